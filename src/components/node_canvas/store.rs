use std::collections::HashMap;

use log::{debug, warn};

use super::error::EditorError;
use super::types::{Link, Node, NodeId};

/// Nodes keyed by id, a separate paint order, and outgoing links per node.
///
/// Paint order is back to front: the last id is drawn last and sits on top.
#[derive(Clone, Debug, Default)]
pub struct ShapeStore {
	nodes: HashMap<NodeId, Node>,
	order: Vec<NodeId>,
	links: HashMap<NodeId, Vec<NodeId>>,
	overlap_tolerance: f64,
}

impl ShapeStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_overlap_tolerance(tolerance: f64) -> Self {
		Self {
			overlap_tolerance: tolerance,
			..Self::default()
		}
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn contains(&self, id: NodeId) -> bool {
		self.nodes.contains_key(&id)
	}

	pub fn get(&self, id: NodeId) -> Option<&Node> {
		self.nodes.get(&id)
	}

	/// Nodes in paint order.
	pub fn nodes(&self) -> impl Iterator<Item = &Node> {
		self.order.iter().filter_map(|id| self.nodes.get(id))
	}

	pub fn paint_order(&self) -> &[NodeId] {
		&self.order
	}

	/// Appends `node` on top of the paint order unless it overlaps a node
	/// already in the store.
	pub fn insert(&mut self, node: Node) -> Result<NodeId, EditorError> {
		if self.contains(node.id) {
			return Err(EditorError::DuplicateNode(node.id));
		}
		if let Some(overlapping) = self.first_overlap(&node) {
			warn!("There is already a node at ({}, {})", node.x, node.y);
			return Err(EditorError::PlacementRejected { overlapping });
		}
		let id = node.id;
		debug!("Inserted node {} at ({}, {})", id, node.x, node.y);
		self.nodes.insert(id, node);
		self.order.push(id);
		Ok(id)
	}

	/// First node in paint order, other than `node` itself, overlapping it.
	pub fn first_overlap(&self, node: &Node) -> Option<NodeId> {
		let circle = node.circle();
		self.nodes()
			.find(|other| {
				other.id != node.id && circle.overlaps(&other.circle(), self.overlap_tolerance)
			})
			.map(|other| other.id)
	}

	/// Overlap check for a node already in the store, at its current position.
	pub fn overlapping(&self, id: NodeId) -> Option<NodeId> {
		self.get(id).and_then(|node| self.first_overlap(node))
	}

	/// Topmost node whose circle contains the point, scanning front to back
	/// so the hit matches what is drawn on top.
	pub fn find_at(&self, x: f64, y: f64) -> Option<&Node> {
		self.order
			.iter()
			.rev()
			.filter_map(|id| self.nodes.get(id))
			.find(|node| node.circle().contains(x, y))
	}

	/// Moves a node without any overlap check.
	pub fn set_center(&mut self, id: NodeId, x: f64, y: f64) -> bool {
		match self.nodes.get_mut(&id) {
			Some(node) => {
				node.set_center(x, y);
				true
			}
			None => false,
		}
	}

	/// Shifts every node by the same offset. Distances between nodes are
	/// unchanged, so no new overlaps can appear.
	pub fn translate_all(&mut self, dx: f64, dy: f64) {
		for node in self.nodes.values_mut() {
			node.x += dx;
			node.y += dy;
		}
	}

	pub fn raise_to_top(&mut self, id: NodeId) -> bool {
		let Some(pos) = self.order.iter().position(|&other| other == id) else {
			return false;
		};
		let id = self.order.remove(pos);
		self.order.push(id);
		true
	}

	/// Drops every link touching `id`, then the node itself.
	pub fn remove(&mut self, id: NodeId) -> Option<Node> {
		if !self.contains(id) {
			return None;
		}
		self.links.remove(&id);
		for targets in self.links.values_mut() {
			targets.retain(|&target| target != id);
		}
		self.links.retain(|_, targets| !targets.is_empty());
		self.order.retain(|&other| other != id);
		debug!("Removed node {}", id);
		self.nodes.remove(&id)
	}

	/// Adds `source -> target`. `Ok(false)` when the link already exists.
	/// A node may link to itself.
	pub fn link(&mut self, source: NodeId, target: NodeId) -> Result<bool, EditorError> {
		for id in [source, target] {
			if !self.contains(id) {
				return Err(EditorError::NodeNotFound(id));
			}
		}
		let targets = self.links.entry(source).or_default();
		if targets.contains(&target) {
			return Ok(false);
		}
		targets.push(target);
		debug!("Linked node {} -> {}", source, target);
		Ok(true)
	}

	pub fn unlink(&mut self, source: NodeId, target: NodeId) -> bool {
		let Some(targets) = self.links.get_mut(&source) else {
			return false;
		};
		let before = targets.len();
		targets.retain(|&other| other != target);
		let removed = targets.len() != before;
		if targets.is_empty() {
			self.links.remove(&source);
		}
		removed
	}

	pub fn has_link(&self, source: NodeId, target: NodeId) -> bool {
		self.targets(source).contains(&target)
	}

	/// Outgoing link targets of `source`, oldest first.
	pub fn targets(&self, source: NodeId) -> &[NodeId] {
		self.links.get(&source).map(Vec::as_slice).unwrap_or(&[])
	}

	/// All links, grouped by source in paint order.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		self.order.iter().flat_map(move |&source| {
			self.targets(source)
				.iter()
				.map(move |&target| Link { source, target })
		})
	}

	pub fn clear(&mut self) {
		self.nodes.clear();
		self.order.clear();
		self.links.clear();
	}
}
