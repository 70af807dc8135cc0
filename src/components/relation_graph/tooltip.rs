//! The shared edge tooltip.

use log::debug;

use super::config::GraphConfig;
use super::links::shared_attributes;
use super::types::{DocId, Document, Link};

/// The one overlay shared by every edge.
///
/// Clicking any edge while the overlay is shown hides it; it does not
/// remember, or switch to, the edge that was clicked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipState {
	/// Whether the overlay is shown.
	pub visible: bool,
	/// Shared values of the last edge shown.
	pub content: String,
	/// Page x of the overlay, in pixels.
	pub left: f64,
	/// Page y of the overlay, in pixels.
	pub top: f64,
}

impl TooltipState {
	/// Nothing shown yet.
	pub fn hidden() -> Self {
		Self::default()
	}

	/// Toggle in response to a click on `link` at page coordinates
	/// `(page_x, page_y)`. Returns whether the overlay is now shown.
	pub fn on_edge_activate(
		&mut self,
		link: &Link,
		documents: &[Document],
		page_x: f64,
		page_y: f64,
		config: &GraphConfig,
	) -> bool {
		if self.visible {
			self.visible = false;
			debug!("tooltip hidden");
			return false;
		}

		let record = |id: DocId| documents.iter().find(|d| d.id == id).map(|d| &d.record);
		let shared = match (record(link.source), record(link.target)) {
			(Some(source), Some(target)) => shared_attributes(source, target),
			_ => Vec::new(),
		};

		self.content = shared.join(", ");
		self.left = page_x;
		self.top = page_y - config.tooltip_offset_y;
		self.visible = true;
		debug!("tooltip shown for {:?}: {}", link, self.content);
		true
	}

	/// Back to hidden, e.g. when the graph inputs change or it unmounts.
	pub fn reset(&mut self) {
		*self = Self::hidden();
	}

	/// Target opacity of the overlay.
	pub fn opacity(&self, config: &GraphConfig) -> f64 {
		if self.visible { config.tooltip_opacity } else { 0.0 }
	}

	/// Inline CSS for the overlay element, including the fade transition.
	pub fn style(&self, config: &GraphConfig) -> String {
		let fade_ms = if self.visible {
			config.tooltip_fade_in_ms
		} else {
			config.tooltip_fade_out_ms
		};
		format!(
			"position: absolute; left: {}px; top: {}px; opacity: {}; \
			 transition: opacity {}ms; background-color: white; border: solid; \
			 border-width: 1px; border-radius: 5px; padding: 10px; pointer-events: none;",
			self.left,
			self.top,
			self.opacity(config),
			fade_ms
		)
	}
}
