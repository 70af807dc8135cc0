//! Analysis records and the identities derived from them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Store-assigned identity of a document. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocId(pub u32);

/// A named entity reported by the analysis provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
	/// Surface text; the only part compared across documents.
	pub text: String,
	/// Provider entity type, e.g. `"organization"`.
	#[serde(rename = "type", default, deserialize_with = "lenient_or_default")]
	pub kind: String,
}

/// A topic and its relevance score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
	/// Topic name; the only part compared across documents.
	pub text: String,
	/// Relevance reported by the provider.
	#[serde(default, deserialize_with = "lenient_or_default")]
	pub score: f64,
}

/// One analyzed text, exactly as the provider produced it.
///
/// Tag-bearing fields that are missing, `null` or not arrays deserialize to
/// empty lists, and unreadable entries inside them are skipped. Side fields
/// of the wrong type fall back to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
	/// Shown as the node label.
	pub title: String,
	/// Passed through untouched.
	#[serde(default, deserialize_with = "lenient_or_default")]
	pub sentiment_score: f64,
	/// Named entities, compared by `text`.
	#[serde(default, deserialize_with = "lenient_list")]
	pub named_entities: Vec<NamedEntity>,
	/// Topics, compared by `text`.
	#[serde(default, deserialize_with = "lenient_list")]
	pub topics: Vec<Topic>,
	/// Plain keyword strings.
	#[serde(default, deserialize_with = "lenient_keywords")]
	pub keywords: Vec<String>,
}

impl DocumentRecord {
	/// Textual values of one tag category, in record order.
	pub fn tag_values(&self, category: TagCategory) -> Vec<&str> {
		match category {
			TagCategory::NamedEntities => {
				self.named_entities.iter().map(|e| e.text.as_str()).collect()
			}
			TagCategory::Topics => self.topics.iter().map(|t| t.text.as_str()).collect(),
			TagCategory::Keywords => self.keywords.iter().map(String::as_str).collect(),
		}
	}
}

/// A record together with its identity in the document store.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
	/// Identity used by layout, scene and links.
	pub id: DocId,
	/// The analysis result itself.
	pub record: DocumentRecord,
}

/// The three fields that links and filters look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagCategory {
	/// `named_entities`
	NamedEntities,
	/// `topics`
	Topics,
	/// `keywords`
	Keywords,
}

impl TagCategory {
	/// Every category, in link-comparison and panel order.
	pub const ALL: [TagCategory; 3] = [
		TagCategory::NamedEntities,
		TagCategory::Topics,
		TagCategory::Keywords,
	];

	/// Key used by filter selections and the provider JSON.
	pub fn key(self) -> &'static str {
		match self {
			TagCategory::NamedEntities => "named_entities",
			TagCategory::Topics => "topics",
			TagCategory::Keywords => "keywords",
		}
	}

	/// Inverse of [`TagCategory::key`].
	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.key() == key)
	}

	/// Human-readable name for the filter panel.
	pub fn label(self) -> &'static str {
		match self {
			TagCategory::NamedEntities => "Named Entities",
			TagCategory::Topics => "Topics",
			TagCategory::Keywords => "Keywords",
		}
	}
}

/// Undirected connection between two visible documents sharing a tag value.
///
/// `source` precedes `target` in the visible sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
	/// Earlier endpoint.
	pub source: DocId,
	/// Later endpoint.
	pub target: DocId,
}

impl Link {
	/// Whether `id` is one of the endpoints.
	pub fn touches(&self, id: DocId) -> bool {
		self.source == id || self.target == id
	}
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Array(items) => items
			.into_iter()
			.filter_map(|item| serde_json::from_value(item).ok())
			.collect(),
		_ => Vec::new(),
	})
}

// A value of the wrong type reads as the field's default.
fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

// Keywords are plain strings, but `{ "text": ... }` entries are accepted too.
fn lenient_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Array(items) => items
			.into_iter()
			.filter_map(|item| match item {
				Value::String(text) => Some(text),
				Value::Object(mut fields) => match fields.remove("text") {
					Some(Value::String(text)) => Some(text),
					_ => None,
				},
				_ => None,
			})
			.collect(),
		_ => Vec::new(),
	})
}
