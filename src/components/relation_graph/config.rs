//! Drawing and interaction settings.

use serde::{Deserialize, Serialize};

/// Drawing and interaction settings for the relationship graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Node circle radius.
	pub node_radius: f64,
	/// Node circle fill colour.
	pub node_fill: String,
	/// Link line colour.
	pub edge_stroke: String,
	/// Link line width.
	pub edge_width: f64,
	/// Extra slack, in pixels, around a line when testing for clicks.
	pub edge_hit_tolerance: f64,
	/// Vertical distance from a node centre to its label.
	pub label_offset: f64,
	/// CSS font of node labels.
	pub label_font: String,
	/// Node label colour.
	pub label_fill: String,
	/// Opacity of the shown tooltip.
	pub tooltip_opacity: f64,
	/// Fade-in duration.
	pub tooltip_fade_in_ms: u32,
	/// Fade-out duration.
	pub tooltip_fade_out_ms: u32,
	/// The tooltip is placed this far above the click point.
	pub tooltip_offset_y: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 500.0,
			node_radius: 20.0,
			node_fill: "steelblue".to_string(),
			edge_stroke: "black".to_string(),
			edge_width: 3.0,
			edge_hit_tolerance: 3.0,
			label_offset: 25.0,
			label_font: "16px sans-serif".to_string(),
			label_fill: "black".to_string(),
			tooltip_opacity: 0.9,
			tooltip_fade_in_ms: 200,
			tooltip_fade_out_ms: 500,
			tooltip_offset_y: 28.0,
		}
	}
}

impl GraphConfig {
	/// Canvas point that graph coordinate `(0, 0)` maps to.
	pub fn origin(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}
