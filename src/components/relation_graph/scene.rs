//! Retained drawing primitives, reconciled against the visible documents and
//! their links by identity.

use std::hash::Hash;

use indexmap::IndexMap;

use super::config::GraphConfig;
use super::layout::{LayoutState, Point};
use super::types::{DocId, Document, Link};

/// Filled circle of one document node.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	/// Centre, in graph coordinates.
	pub center: Point,
	/// Radius in pixels.
	pub radius: f64,
	/// Fill colour.
	pub fill: String,
}

/// Title text drawn above a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
	/// Centre of the text.
	pub anchor: Point,
	/// The document title.
	pub text: String,
}

/// Straight segment of one link.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	/// Source node centre.
	pub from: Point,
	/// Target node centre.
	pub to: Point,
	/// Stroke colour.
	pub stroke: String,
	/// Stroke width.
	pub width: f64,
}

impl Line {
	fn distance_to(&self, p: Point) -> f64 {
		let (dx, dy) = (self.to.x - self.from.x, self.to.y - self.from.y);
		let len_sq = dx * dx + dy * dy;
		if len_sq < 1e-9 {
			return p.distance_to(self.from);
		}
		let t = (((p.x - self.from.x) * dx + (p.y - self.from.y) * dy) / len_sq).clamp(0.0, 1.0);
		p.distance_to(Point::new(self.from.x + t * dx, self.from.y + t * dy))
	}
}

/// What a reconcile pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
	/// Primitives created.
	pub added: usize,
	/// Primitives whose attributes changed.
	pub updated: usize,
	/// Primitives dropped.
	pub removed: usize,
}

impl ReconcileStats {
	/// Whether the pass changed nothing.
	pub fn is_noop(&self) -> bool {
		*self == Self::default()
	}
}

/// Every primitive currently on screen, keyed by document or link.
#[derive(Clone, Debug)]
pub struct Scene {
	circles: IndexMap<DocId, Circle>,
	labels: IndexMap<DocId, Label>,
	lines: IndexMap<Link, Line>,
	radius: f64,
	fill: String,
	stroke: String,
	stroke_width: f64,
	label_offset: f64,
}

impl Scene {
	/// Empty scene styled from `config`.
	pub fn new(config: &GraphConfig) -> Self {
		Self {
			circles: IndexMap::new(),
			labels: IndexMap::new(),
			lines: IndexMap::new(),
			radius: config.node_radius,
			fill: config.node_fill.clone(),
			stroke: config.edge_stroke.clone(),
			stroke_width: config.edge_width,
			label_offset: config.label_offset,
		}
	}

	/// Bring every primitive in line with `visible` and `links`: create the
	/// missing ones, update the stale ones, drop the orphaned ones. Drawing
	/// order follows the input order.
	pub fn reconcile(
		&mut self,
		visible: &[Document],
		links: &[Link],
		layout: &LayoutState,
	) -> ReconcileStats {
		let mut stats = ReconcileStats::default();

		let circles: Vec<_> = visible
			.iter()
			.map(|doc| (doc.id, self.circle(layout.position(doc.id))))
			.collect();
		sync(&mut self.circles, circles, &mut stats);

		let labels: Vec<_> = visible
			.iter()
			.map(|doc| (doc.id, self.label(layout.position(doc.id), &doc.record.title)))
			.collect();
		sync(&mut self.labels, labels, &mut stats);

		let lines: Vec<_> = links
			.iter()
			.map(|link| {
				let line = self.line(layout.position(link.source), layout.position(link.target));
				(*link, line)
			})
			.collect();
		sync(&mut self.lines, lines, &mut stats);

		stats
	}

	/// Position-only update for one node: its circle, label and incident
	/// lines. Returns how many primitives moved.
	pub fn move_node(&mut self, id: DocId, layout: &LayoutState) -> usize {
		let position = layout.position(id);
		let mut moved = 0;

		if let Some(circle) = self.circles.get_mut(&id) {
			circle.center = position;
			moved += 1;
		}
		if let Some(label) = self.labels.get_mut(&id) {
			label.anchor = Point::new(position.x, position.y - self.label_offset);
			moved += 1;
		}
		for (link, line) in self.lines.iter_mut().filter(|(link, _)| link.touches(id)) {
			if link.source == id {
				line.from = position;
			}
			if link.target == id {
				line.to = position;
			}
			moved += 1;
		}
		moved
	}

	/// Drop every primitive.
	pub fn clear(&mut self) {
		self.circles.clear();
		self.labels.clear();
		self.lines.clear();
	}

	/// Circles in drawing order.
	pub fn circles(&self) -> impl Iterator<Item = (&DocId, &Circle)> {
		self.circles.iter()
	}

	/// Labels in drawing order.
	pub fn labels(&self) -> impl Iterator<Item = (&DocId, &Label)> {
		self.labels.iter()
	}

	/// Lines in drawing order.
	pub fn lines(&self) -> impl Iterator<Item = (&Link, &Line)> {
		self.lines.iter()
	}

	/// Circle of `id`, if visible.
	pub fn circle_for(&self, id: DocId) -> Option<&Circle> {
		self.circles.get(&id)
	}

	/// Line of `link`, if drawn.
	pub fn line_for(&self, link: &Link) -> Option<&Line> {
		self.lines.get(link)
	}

	/// Topmost node under `p` (graph coordinates).
	pub fn node_at(&self, p: Point) -> Option<DocId> {
		self.circles
			.iter()
			.rev()
			.find(|(_, circle)| p.distance_to(circle.center) <= circle.radius)
			.map(|(id, _)| *id)
	}

	/// Topmost line within half its width plus `tolerance` of `p`.
	pub fn link_at(&self, p: Point, tolerance: f64) -> Option<Link> {
		self.lines
			.iter()
			.rev()
			.find(|(_, line)| line.distance_to(p) <= line.width / 2.0 + tolerance)
			.map(|(link, _)| *link)
	}

	fn circle(&self, center: Point) -> Circle {
		Circle {
			center,
			radius: self.radius,
			fill: self.fill.clone(),
		}
	}

	fn label(&self, position: Point, title: &str) -> Label {
		Label {
			anchor: Point::new(position.x, position.y - self.label_offset),
			text: title.to_string(),
		}
	}

	fn line(&self, from: Point, to: Point) -> Line {
		Line {
			from,
			to,
			stroke: self.stroke.clone(),
			width: self.stroke_width,
		}
	}
}

fn sync<K, V>(current: &mut IndexMap<K, V>, next: Vec<(K, V)>, stats: &mut ReconcileStats)
where
	K: Hash + Eq,
	V: PartialEq,
{
	let mut merged = IndexMap::with_capacity(next.len());
	for (key, value) in next {
		match current.swap_remove(&key) {
			Some(old) if old == value => {}
			Some(_) => stats.updated += 1,
			None => stats.added += 1,
		}
		merged.insert(key, value);
	}
	stats.removed += current.len();
	*current = merged;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relation_graph::links::derive_links;
	use crate::components::relation_graph::types::DocumentRecord;

	fn doc(id: u32, title: &str, keywords: &[&str]) -> Document {
		Document {
			id: DocId(id),
			record: DocumentRecord {
				title: title.to_string(),
				keywords: keywords.iter().map(|k| k.to_string()).collect(),
				..Default::default()
			},
		}
	}

	fn docs() -> Vec<Document> {
		vec![
			doc(0, "Alpha", &["ai"]),
			doc(1, "Beta", &["ai", "law"]),
			doc(2, "Gamma", &["law"]),
		]
	}

	#[test]
	fn first_pass_adds_everything() {
		let config = GraphConfig::default();
		let layout = LayoutState::new(&config);
		let mut scene = Scene::new(&config);
		let visible = docs();
		let links = derive_links(&visible);

		let stats = scene.reconcile(&visible, &links, &layout);
		assert_eq!(stats.added, 3 + 3 + 2);
		assert_eq!(stats.removed, 0);

		let circle = scene.circle_for(DocId(1)).unwrap();
		assert_eq!(circle.radius, 20.0);
		assert_eq!(circle.fill, "steelblue");
		let (_, label) = scene.labels().nth(1).unwrap();
		assert_eq!(label.text, "Beta");
		assert_eq!(label.anchor, Point::new(0.0, -25.0));
		let (_, line) = scene.lines().next().unwrap();
		assert_eq!((line.stroke.as_str(), line.width), ("black", 3.0));
	}

	#[test]
	fn reconcile_is_idempotent() {
		let config = GraphConfig::default();
		let mut layout = LayoutState::new(&config);
		layout.drag_start(DocId(2), Point::ORIGIN);
		layout.drag_move(DocId(2), Point::new(30.0, 10.0));
		let mut scene = Scene::new(&config);
		let visible = docs();
		let links = derive_links(&visible);

		scene.reconcile(&visible, &links, &layout);
		let snapshot: Vec<_> = scene.lines().map(|(l, line)| (*l, line.clone())).collect();
		let second = scene.reconcile(&visible, &links, &layout);

		assert!(second.is_noop(), "{second:?}");
		let after: Vec<_> = scene.lines().map(|(l, line)| (*l, line.clone())).collect();
		assert_eq!(snapshot, after);
	}

	#[test]
	fn departed_entities_are_removed_by_identity() {
		let config = GraphConfig::default();
		let layout = LayoutState::new(&config);
		let mut scene = Scene::new(&config);
		let all = docs();
		scene.reconcile(&all, &derive_links(&all), &layout);

		// Dropping the first document shifts indices but must not touch the rest.
		let remaining = all[1..].to_vec();
		let stats = scene.reconcile(&remaining, &derive_links(&remaining), &layout);
		assert_eq!(stats.removed, 1 + 1 + 1);
		assert_eq!(stats.added, 0);
		assert_eq!(stats.updated, 0);
		assert!(scene.circle_for(DocId(0)).is_none());
		assert_eq!(scene.circles().count(), 2);
	}

	#[test]
	fn move_node_touches_only_incident_primitives() {
		let config = GraphConfig::default();
		let mut layout = LayoutState::new(&config);
		let mut scene = Scene::new(&config);
		let visible = docs();
		let links = derive_links(&visible);
		scene.reconcile(&visible, &links, &layout);

		layout.drag_start(DocId(0), Point::ORIGIN);
		layout.drag_move(DocId(0), Point::new(-40.0, 60.0));
		// circle + label + the single line 0-1
		assert_eq!(scene.move_node(DocId(0), &layout), 3);

		let line = scene
			.line_for(&Link {
				source: DocId(0),
				target: DocId(1),
			})
			.unwrap();
		assert_eq!(line.from, Point::new(-40.0, 60.0));
		assert_eq!(line.to, Point::ORIGIN);
		assert_eq!(scene.circle_for(DocId(2)).unwrap().center, Point::ORIGIN);

		// The drag path already applied the move, so a full pass finds nothing new.
		assert!(scene.reconcile(&visible, &links, &layout).is_noop());
	}

	#[test]
	fn hit_testing_prefers_topmost() {
		let config = GraphConfig::default();
		let mut layout = LayoutState::new(&config);
		let mut scene = Scene::new(&config);
		let visible = docs();
		for (id, x) in [(0, -100.0), (1, 0.0), (2, 100.0)] {
			layout.drag_start(DocId(id), Point::ORIGIN);
			layout.drag_move(DocId(id), Point::new(x, 0.0));
			layout.drag_end(DocId(id));
		}
		scene.reconcile(&visible, &derive_links(&visible), &layout);

		assert_eq!(scene.node_at(Point::new(5.0, 5.0)), Some(DocId(1)));
		assert_eq!(scene.node_at(Point::new(50.0, 30.0)), None);
		assert_eq!(
			scene.link_at(Point::new(50.0, 2.0), 3.0),
			Some(Link {
				source: DocId(1),
				target: DocId(2),
			})
		);
		assert_eq!(scene.link_at(Point::new(50.0, 20.0), 3.0), None);
	}
}
