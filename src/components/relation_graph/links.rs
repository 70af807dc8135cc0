//! Links between documents that share tag values.

use super::types::{Document, DocumentRecord, Link, TagCategory};

/// Tag values the two records have in common, compared category by category.
///
/// Every tag of `a` is checked against every tag of `b`, so a value repeated
/// in either record is reported once per matching pair. Empty values never
/// match. Both link derivation and the edge tooltip go through here.
pub fn shared_attributes(a: &DocumentRecord, b: &DocumentRecord) -> Vec<String> {
	let mut shared = Vec::new();
	for category in TagCategory::ALL {
		let theirs = b.tag_values(category);
		for ours in a.tag_values(category) {
			if ours.is_empty() {
				continue;
			}
			shared.extend(
				theirs
					.iter()
					.filter(|t| **t == ours)
					.map(|t| t.to_string()),
			);
		}
	}
	shared
}

/// One link for every pair of documents sharing at least one tag value.
pub fn derive_links(documents: &[Document]) -> Vec<Link> {
	let mut links = Vec::new();
	for (i, source) in documents.iter().enumerate() {
		for target in &documents[i + 1..] {
			if !shared_attributes(&source.record, &target.record).is_empty() {
				links.push(Link {
					source: source.id,
					target: target.id,
				});
			}
		}
	}
	links
}
