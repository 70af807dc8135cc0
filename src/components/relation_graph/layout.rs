//! Node positions and the drag gesture.

use std::collections::HashMap;

use log::debug;

use super::config::GraphConfig;
use super::types::DocId;

/// A point in graph coordinates, `(0, 0)` at the canvas centre.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset, growing downwards.
	pub y: f64,
}

impl Point {
	/// Where nodes that were never dragged sit.
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance_to(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Drag phase of one node.
pub enum DragPhase {
	/// Not under the pointer.
	#[default]
	Idle,
	/// Following the pointer.
	Dragging,
}

/// Interactive state of one document's node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeState {
	/// Last position reached.
	pub position: Point,
	/// Current drag phase.
	pub phase: DragPhase,
}

impl NodeState {
	/// Whether the node is being dragged.
	pub fn drag_active(&self) -> bool {
		self.phase == DragPhase::Dragging
	}
}

/// Canvas-space translation of the graph origin.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	/// Canvas x of the graph origin.
	pub x: f64,
	/// Canvas y of the graph origin.
	pub y: f64,
}

#[derive(Clone, Debug, Default)]
struct DragState {
	node: Option<DocId>,
	grab_dx: f64,
	grab_dy: f64,
}

/// Positions and drag phases, keyed by document identity.
///
/// Entries outlive filter changes: a node hidden and shown again comes back
/// where it was left. Nodes never dragged sit at the origin.
#[derive(Clone, Debug, Default)]
pub struct LayoutState {
	nodes: HashMap<DocId, NodeState>,
	drag: DragState,
	/// Maps canvas points to graph points.
	pub transform: ViewTransform,
}

impl LayoutState {
	/// Empty layout with the origin at the centre of the configured canvas.
	pub fn new(config: &GraphConfig) -> Self {
		let (x, y) = config.origin();
		Self {
			transform: ViewTransform { x, y },
			..Default::default()
		}
	}

	/// State of `id`, idle at the origin if never touched.
	pub fn node(&self, id: DocId) -> NodeState {
		self.nodes.get(&id).copied().unwrap_or_default()
	}

	/// Position of `id`.
	pub fn position(&self, id: DocId) -> Point {
		self.node(id).position
	}

	/// Node currently being dragged, if any.
	pub fn dragging(&self) -> Option<DocId> {
		self.drag.node
	}

	/// Canvas point to graph point.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> Point {
		Point::new(sx - self.transform.x, sy - self.transform.y)
	}

	/// Idle -> Dragging. `pointer` is in graph coordinates; the offset between
	/// it and the node is kept for the rest of the gesture.
	pub fn drag_start(&mut self, id: DocId, pointer: Point) {
		if let Some(previous) = self.drag.node.filter(|&prev| prev != id) {
			self.drag_end(previous);
		}
		let node = self.nodes.entry(id).or_default();
		node.phase = DragPhase::Dragging;
		self.drag = DragState {
			node: Some(id),
			grab_dx: pointer.x - node.position.x,
			grab_dy: pointer.y - node.position.y,
		};
		debug!("drag start {:?} at ({}, {})", id, node.position.x, node.position.y);
	}

	/// Move a dragging node after the pointer. Returns false, and changes
	/// nothing, when `id` is not being dragged.
	pub fn drag_move(&mut self, id: DocId, pointer: Point) -> bool {
		if self.drag.node != Some(id) {
			return false;
		}
		let Some(node) = self.nodes.get_mut(&id) else {
			return false;
		};
		node.position = Point::new(pointer.x - self.drag.grab_dx, pointer.y - self.drag.grab_dy);
		true
	}

	/// Dragging -> Idle. The position reached is kept.
	pub fn drag_end(&mut self, id: DocId) -> bool {
		let Some(node) = self.nodes.get_mut(&id) else {
			return false;
		};
		if !node.drag_active() {
			return false;
		}
		node.phase = DragPhase::Idle;
		if self.drag.node == Some(id) {
			self.drag = DragState::default();
		}
		debug!("drag end {:?} at ({}, {})", id, node.position.x, node.position.y);
		true
	}

	/// Drop any gesture in progress, keeping positions.
	pub fn cancel(&mut self) {
		if let Some(id) = self.drag.node {
			self.drag_end(id);
		}
	}
}
