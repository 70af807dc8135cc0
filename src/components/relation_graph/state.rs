//! Per-view state tying filtering, links, layout and the scene together.

use log::debug;

use super::config::GraphConfig;
use super::filter::{FilterSelection, visible_documents};
use super::layout::LayoutState;
use super::links::derive_links;
use super::scene::{ReconcileStats, Scene};
use super::types::{DocId, Document, Link};

/// Everything the graph view mutates between events: the derived visible
/// set and links, the layout store and the retained scene.
pub struct GraphState {
	/// Settings the view was created with.
	pub config: GraphConfig,
	/// Positions and the drag gesture.
	pub layout: LayoutState,
	/// Retained primitives.
	pub scene: Scene,
	visible: Vec<Document>,
	links: Vec<Link>,
}

impl GraphState {
	/// Nothing visible yet.
	pub fn new(config: GraphConfig) -> Self {
		Self {
			layout: LayoutState::new(&config),
			scene: Scene::new(&config),
			config,
			visible: Vec::new(),
			links: Vec::new(),
		}
	}

	/// Full recomputation after the documents or the filters changed.
	pub fn refresh(&mut self, documents: &[Document], selection: &FilterSelection) -> ReconcileStats {
		self.visible = visible_documents(documents, selection);
		self.links = derive_links(&self.visible);
		let stats = self.scene.reconcile(&self.visible, &self.links, &self.layout);
		debug!(
			"refresh: {} of {} documents visible, {} links, {:?}",
			self.visible.len(),
			documents.len(),
			self.links.len(),
			stats
		);
		stats
	}

	/// Documents that passed the last refresh's filters.
	pub fn visible(&self) -> &[Document] {
		&self.visible
	}

	/// Links among the visible documents.
	pub fn links(&self) -> &[Link] {
		&self.links
	}

	/// Start dragging the node under canvas point `(sx, sy)`, if any.
	pub fn pointer_down(&mut self, sx: f64, sy: f64) -> Option<DocId> {
		let p = self.layout.screen_to_graph(sx, sy);
		let id = self.scene.node_at(p)?;
		self.layout.drag_start(id, p);
		Some(id)
	}

	/// Follow the pointer with the dragged node. Only position-dependent
	/// primitives are touched. Returns true when a repaint is needed.
	pub fn pointer_move(&mut self, sx: f64, sy: f64) -> bool {
		let Some(id) = self.layout.dragging() else {
			return false;
		};
		let p = self.layout.screen_to_graph(sx, sy);
		self.layout.drag_move(id, p) && self.scene.move_node(id, &self.layout) > 0
	}

	/// End the drag in progress, returning the released node.
	pub fn pointer_up(&mut self) -> Option<DocId> {
		let id = self.layout.dragging()?;
		self.layout.drag_end(id);
		Some(id)
	}

	/// Edge under canvas point `(sx, sy)`. Nodes sit above edges, so a point
	/// on a node never hits an edge.
	pub fn edge_at(&self, sx: f64, sy: f64) -> Option<Link> {
		let p = self.layout.screen_to_graph(sx, sy);
		if self.scene.node_at(p).is_some() {
			return None;
		}
		self.scene.link_at(p, self.config.edge_hit_tolerance)
	}

	/// Discard in-progress interaction and every primitive.
	pub fn teardown(&mut self) {
		self.layout.cancel();
		self.scene.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::layout::Point;
	use crate::components::relation_graph::types::DocumentRecord;

	fn documents() -> Vec<Document> {
		[("A", "ai"), ("B", "ai"), ("C", "law")]
			.iter()
			.enumerate()
			.map(|(i, (title, keyword))| Document {
				id: DocId(i as u32),
				record: DocumentRecord {
					title: title.to_string(),
					keywords: vec![keyword.to_string()],
					..Default::default()
				},
			})
			.collect()
	}

	#[test]
	fn position_survives_being_filtered_out() {
		let docs = documents();
		let mut state = GraphState::new(GraphConfig::default());
		state.refresh(&docs, &FilterSelection::new());

		// Every node starts at the canvas centre; C is drawn last, so it is
		// the one picked up there.
		assert_eq!(state.pointer_down(400.0, 250.0), Some(DocId(2)));
		assert!(state.pointer_move(450.0, 300.0));
		assert_eq!(state.pointer_up(), Some(DocId(2)));

		state.refresh(&docs, &FilterSelection::new().with("keywords", &["ai"]));
		assert!(state.scene.circle_for(DocId(2)).is_none());

		state.refresh(&docs, &FilterSelection::new());
		let circle = state.scene.circle_for(DocId(2)).unwrap();
		assert_eq!(circle.center, Point::new(50.0, 50.0));
		assert_eq!(state.scene.circle_for(DocId(0)).unwrap().center, Point::ORIGIN);
	}

	#[test]
	fn refresh_derives_links_from_the_visible_set() {
		let docs = documents();
		let mut state = GraphState::new(GraphConfig::default());
		state.refresh(&docs, &FilterSelection::new());
		assert_eq!(state.links().len(), 1);

		let selection = FilterSelection::new()
			.with("keywords", &["ai"])
			.with("topics", &["x"]);
		state.refresh(&docs, &selection);
		assert!(state.visible().is_empty());
		assert!(state.links().is_empty());
		assert_eq!(state.scene.lines().count(), 0);
	}

	#[test]
	fn moves_without_a_drag_do_not_repaint() {
		let docs = documents();
		let mut state = GraphState::new(GraphConfig::default());
		state.refresh(&docs, &FilterSelection::new());
		assert_eq!(state.pointer_down(10.0, 10.0), None);
		assert!(!state.pointer_move(20.0, 20.0));
		assert_eq!(state.pointer_up(), None);
	}

	#[test]
	fn nodes_shadow_edges() {
		let docs = documents();
		let mut state = GraphState::new(GraphConfig::default());
		state.refresh(&docs, &FilterSelection::new().with("keywords", &["ai"]));

		// Move B 100px right of A; the A-B line runs between the two circles.
		assert_eq!(state.pointer_down(400.0, 250.0), Some(DocId(1)));
		state.pointer_move(500.0, 250.0);
		state.pointer_up();

		assert!(state.edge_at(400.0, 250.0).is_none());
		assert_eq!(
			state.edge_at(450.0, 251.0),
			Some(Link {
				source: DocId(0),
				target: DocId(1),
			})
		);
	}

	#[test]
	fn teardown_mid_drag_discards_the_gesture() {
		let docs = documents();
		let mut state = GraphState::new(GraphConfig::default());
		state.refresh(&docs, &FilterSelection::new());
		state.pointer_down(400.0, 250.0);
		state.teardown();
		assert_eq!(state.layout.dragging(), None);
		assert_eq!(state.scene.circles().count(), 0);
	}
}
