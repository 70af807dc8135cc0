//! Turning provider analysis results into stored documents.

use log::{debug, info};
use serde_json::Value;

use super::error::{GraphError, Result};
use super::types::{DocId, Document, DocumentRecord};

/// Parse one analysis result.
///
/// Accepts either the bare record JSON or a chat-completion envelope whose
/// first choice carries the record JSON as its message content.
pub fn parse_analysis(raw: &str) -> Result<DocumentRecord> {
	let value: Value = serde_json::from_str(raw.trim())
		.map_err(|e| GraphError::InvalidRecord(e.to_string()))?;

	let value = match value.get("choices") {
		Some(choices) => {
			let content = choices
				.get(0)
				.and_then(|choice| choice.pointer("/message/content"))
				.and_then(Value::as_str)
				.filter(|content| !content.trim().is_empty())
				.ok_or(GraphError::MissingContent)?;
			debug!("Unwrapped chat completion content ({} bytes)", content.len());
			serde_json::from_str(content.trim())
				.map_err(|e| GraphError::InvalidRecord(e.to_string()))?
		}
		None => value,
	};

	serde_json::from_value(value).map_err(|e| GraphError::InvalidRecord(e.to_string()))
}

/// Append-only list of analyzed documents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentStore {
	documents: Vec<Document>,
	next_id: u32,
}

impl DocumentStore {
	/// An empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// A store seeded with `records`, in order.
	pub fn with_records(records: impl IntoIterator<Item = DocumentRecord>) -> Self {
		let mut store = Self::new();
		for record in records {
			store.append(record);
		}
		store
	}

	/// Store `record` under the next identity.
	pub fn append(&mut self, record: DocumentRecord) -> DocId {
		let id = DocId(self.next_id);
		self.next_id += 1;
		self.documents.push(Document { id, record });
		id
	}

	/// Parse and append. On failure the store is left as it was.
	pub fn ingest(&mut self, raw: &str) -> Result<DocId> {
		let record = parse_analysis(raw)?;
		let title = record.title.clone();
		let id = self.append(record);
		info!("Added document {:?} \"{}\"", id, title);
		Ok(id)
	}

	/// Every stored document, oldest first.
	pub fn documents(&self) -> &[Document] {
		&self.documents
	}

	/// Number of stored documents.
	pub fn len(&self) -> usize {
		self.documents.len()
	}

	/// Whether nothing has been stored yet.
	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}
}
