//! Filter predicates over document tags.

use indexmap::{IndexMap, IndexSet};

use super::types::{Document, DocumentRecord, TagCategory};

/// Selected values per filter category.
///
/// Categories are disjoined internally and conjoined with each other; an
/// empty value set leaves its category unconstrained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSelection {
	categories: IndexMap<String, IndexSet<String>>,
}

impl FilterSelection {
	/// No category constrained.
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the selection of one category, as a filter widget reports it.
	pub fn set(&mut self, category: &str, values: impl IntoIterator<Item = String>) {
		self.categories
			.insert(category.to_string(), values.into_iter().collect());
	}

	/// Builder form of [`FilterSelection::set`].
	pub fn with(mut self, category: &str, values: &[&str]) -> Self {
		self.set(category, values.iter().map(|v| v.to_string()));
		self
	}

	/// Whether `value` is selected under `category`.
	pub fn contains(&self, category: &str, value: &str) -> bool {
		self.categories
			.get(category)
			.is_some_and(|values| values.contains(value))
	}

	/// True when no category carries a constraint.
	pub fn is_unconstrained(&self) -> bool {
		self.categories.values().all(IndexSet::is_empty)
	}
}

/// Whether `record` passes every constrained category of `selection`.
pub fn is_visible(record: &DocumentRecord, selection: &FilterSelection) -> bool {
	selection.categories.iter().all(|(key, selected)| {
		if selected.is_empty() {
			return true;
		}
		// Unknown categories never constrain.
		let Some(category) = TagCategory::from_key(key) else {
			return true;
		};
		let values = record.tag_values(category);
		selected.iter().any(|s| values.contains(&s.as_str()))
	})
}

/// Documents passing `selection`, in their original order.
pub fn visible_documents(documents: &[Document], selection: &FilterSelection) -> Vec<Document> {
	documents
		.iter()
		.filter(|doc| is_visible(&doc.record, selection))
		.cloned()
		.collect()
}

/// Distinct non-empty values of `category` across `documents`, first seen first.
pub fn filter_options(documents: &[Document], category: TagCategory) -> Vec<String> {
	documents
		.iter()
		.flat_map(|doc| doc.record.tag_values(category))
		.filter(|value| !value.is_empty())
		.map(str::to_string)
		.collect::<IndexSet<_>>()
		.into_iter()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::types::{DocId, Topic};

	fn keywords(title: &str, keywords: &[&str]) -> DocumentRecord {
		DocumentRecord {
			title: title.to_string(),
			keywords: keywords.iter().map(|k| k.to_string()).collect(),
			..Default::default()
		}
	}

	#[test]
	fn values_within_a_category_are_disjoined() {
		let d1 = keywords("D1", &["ai", "ethics"]);
		let d2 = keywords("D2", &["ai"]);
		let d3 = keywords("D3", &["ethics"]);
		let selection = FilterSelection::new().with("keywords", &["ai"]);

		assert!(is_visible(&d1, &selection));
		assert!(is_visible(&d2, &selection));
		assert!(!is_visible(&d3, &selection));
	}

	#[test]
	fn categories_are_conjoined() {
		let selection = FilterSelection::new()
			.with("keywords", &["ai"])
			.with("topics", &["x"]);

		for doc in [
			keywords("D1", &["ai", "ethics"]),
			keywords("D2", &["ai"]),
			keywords("D3", &["ethics"]),
		] {
			assert!(!is_visible(&doc, &selection), "{} should be hidden", doc.title);
		}
	}

	#[test]
	fn empty_selections_pass_everything() {
		let selection = FilterSelection::new()
			.with("named_entities", &[])
			.with("topics", &[])
			.with("keywords", &[]);
		assert!(selection.is_unconstrained());
		assert!(is_visible(&keywords("any", &[]), &selection));
		assert!(is_visible(&keywords("other", &["ai"]), &selection));
	}

	#[test]
	fn empty_values_never_pass_a_constrained_category() {
		let selection = FilterSelection::new().with("keywords", &["ai"]);
		assert!(!is_visible(&keywords("none", &[]), &selection));
	}

	#[test]
	fn unknown_categories_are_ignored() {
		let selection = FilterSelection::new().with("sentiment", &["positive"]);
		assert!(is_visible(&keywords("any", &[]), &selection));
	}

	#[test]
	fn object_shaped_tags_match_on_text() {
		let record = DocumentRecord {
			title: "topical".into(),
			topics: vec![Topic {
				text: "climate".into(),
				score: 0.7,
			}],
			..Default::default()
		};
		let selection = FilterSelection::new().with("topics", &["climate", "sports"]);
		assert!(is_visible(&record, &selection));
	}

	#[test]
	fn visible_documents_keep_order() {
		let docs: Vec<Document> = [("a", "ai"), ("b", "art"), ("c", "ai")]
			.iter()
			.enumerate()
			.map(|(i, (title, kw))| Document {
				id: DocId(i as u32),
				record: keywords(title, &[kw]),
			})
			.collect();
		let selection = FilterSelection::new().with("keywords", &["ai"]);
		let ids: Vec<_> = visible_documents(&docs, &selection)
			.iter()
			.map(|d| d.id)
			.collect();
		assert_eq!(ids, vec![DocId(0), DocId(2)]);
	}

	#[test]
	fn options_are_distinct() {
		let docs = vec![
			Document {
				id: DocId(0),
				record: keywords("a", &["ai", "ethics", ""]),
			},
			Document {
				id: DocId(1),
				record: keywords("b", &["ai", "law"]),
			},
		];
		assert_eq!(
			filter_options(&docs, TagCategory::Keywords),
			vec!["ai", "ethics", "law"]
		);
		assert!(filter_options(&docs, TagCategory::Topics).is_empty());
	}
}
