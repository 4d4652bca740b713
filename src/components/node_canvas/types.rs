use std::fmt;

use super::error::EditorError;
use super::geometry::Circle;

pub const DEFAULT_NODE_RADIUS: f64 = 16.0;
pub const DEFAULT_SELECTION_BOX_OFFSET: f64 = 6.0;
pub const DEFAULT_REPAINT_INTERVAL_MS: i32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub label: Option<String>,
}

impl Node {
	pub fn new(id: NodeId, x: f64, y: f64, radius: f64) -> Self {
		Self {
			id,
			x,
			y,
			radius,
			label: None,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn circle(&self) -> Circle {
		Circle::new(self.x, self.y, self.radius)
	}

	pub fn set_center(&mut self, x: f64, y: f64) {
		self.x = x;
		self.y = y;
	}
}

/// Directed edge between two nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
	pub source: NodeId,
	pub target: NodeId,
}

/// Constructor-time settings for an [`Editor`](super::Editor).
#[derive(Clone, Debug, PartialEq)]
pub struct EditorOptions {
	/// Radius given to every node created in this session.
	pub node_radius: f64,
	/// Extra radius of the selection ring drawn around the selected node.
	pub selection_box_offset: f64,
	/// How deep two circles may sink into each other before counting as overlapping.
	pub overlap_tolerance: f64,
	/// Number new nodes "1", "2", ... in creation order.
	pub labels_enabled: bool,
	/// Shift-press on a node links the current selection to it.
	pub links_enabled: bool,
	/// Dragging empty canvas moves every node.
	pub pan_enabled: bool,
	/// Period of the repaint clock.
	pub repaint_interval_ms: i32,
}

impl Default for EditorOptions {
	fn default() -> Self {
		Self {
			node_radius: DEFAULT_NODE_RADIUS,
			selection_box_offset: DEFAULT_SELECTION_BOX_OFFSET,
			overlap_tolerance: 0.0,
			labels_enabled: false,
			links_enabled: false,
			pan_enabled: false,
			repaint_interval_ms: DEFAULT_REPAINT_INTERVAL_MS,
		}
	}
}

impl EditorOptions {
	/// Unlabeled nodes, no links.
	pub fn plain() -> Self {
		Self::default()
	}

	/// Labeled nodes; dragging the background pans everything.
	pub fn labeled() -> Self {
		Self::default().with_labels(true).with_pan(true)
	}

	/// Labeled nodes joined by directed links.
	pub fn linked() -> Self {
		Self::default().with_labels(true).with_links(true)
	}

	pub fn with_node_radius(mut self, radius: f64) -> Self {
		self.node_radius = radius;
		self
	}

	pub fn with_selection_box_offset(mut self, offset: f64) -> Self {
		self.selection_box_offset = offset;
		self
	}

	pub fn with_overlap_tolerance(mut self, tolerance: f64) -> Self {
		self.overlap_tolerance = tolerance;
		self
	}

	pub fn with_labels(mut self, enabled: bool) -> Self {
		self.labels_enabled = enabled;
		self
	}

	pub fn with_links(mut self, enabled: bool) -> Self {
		self.links_enabled = enabled;
		self
	}

	pub fn with_pan(mut self, enabled: bool) -> Self {
		self.pan_enabled = enabled;
		self
	}

	pub fn with_repaint_interval_ms(mut self, ms: i32) -> Self {
		self.repaint_interval_ms = ms;
		self
	}

	pub fn validate(&self) -> Result<(), EditorError> {
		if !(self.node_radius.is_finite() && self.node_radius > 0.0) {
			return Err(invalid("nodeRadius", "must be a positive number", self.node_radius));
		}
		if !(self.selection_box_offset.is_finite() && self.selection_box_offset >= 0.0) {
			return Err(invalid(
				"selectionBoxOffset",
				"must be a non-negative number",
				self.selection_box_offset,
			));
		}
		if !(self.overlap_tolerance.is_finite()
			&& self.overlap_tolerance >= 0.0
			&& self.overlap_tolerance < 2.0 * self.node_radius)
		{
			return Err(invalid(
				"overlapTolerance",
				"must be non-negative and smaller than the node diameter",
				self.overlap_tolerance,
			));
		}
		if self.repaint_interval_ms <= 0 {
			return Err(EditorError::InvalidOption {
				name: "repaintIntervalMs",
				reason: format!("must be positive, got {}", self.repaint_interval_ms),
			});
		}
		Ok(())
	}

	/// Radius of the ring drawn around the selected node.
	pub fn selection_ring_radius(&self) -> f64 {
		self.node_radius + self.selection_box_offset
	}
}

fn invalid(name: &'static str, rule: &str, value: f64) -> EditorError {
	EditorError::InvalidOption {
		name,
		reason: format!("{rule}, got {value}"),
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Middle,
	Secondary,
	Other(i16),
}

impl From<i16> for PointerButton {
	/// Maps a DOM `MouseEvent.button` code.
	fn from(code: i16) -> Self {
		match code {
			0 => Self::Primary,
			1 => Self::Middle,
			2 => Self::Secondary,
			other => Self::Other(other),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
	pub ctrl: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		shift: false,
	};
	pub const CTRL: Self = Self {
		ctrl: true,
		shift: false,
	};
	pub const SHIFT: Self = Self {
		ctrl: false,
		shift: true,
	};
}

/// Input vocabulary understood by the editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditorEvent {
	Press {
		x: f64,
		y: f64,
		button: PointerButton,
		modifiers: Modifiers,
	},
	/// `dx`/`dy` are the pointer movement since the previous move.
	Move { x: f64, y: f64, dx: f64, dy: f64 },
	Release { button: PointerButton },
	Delete,
	Restart,
}

impl EditorEvent {
	pub fn press(x: f64, y: f64) -> Self {
		Self::Press {
			x,
			y,
			button: PointerButton::Primary,
			modifiers: Modifiers::NONE,
		}
	}

	pub fn ctrl_press(x: f64, y: f64) -> Self {
		Self::Press {
			x,
			y,
			button: PointerButton::Primary,
			modifiers: Modifiers::CTRL,
		}
	}

	pub fn shift_press(x: f64, y: f64) -> Self {
		Self::Press {
			x,
			y,
			button: PointerButton::Primary,
			modifiers: Modifiers::SHIFT,
		}
	}

	pub fn release() -> Self {
		Self::Release {
			button: PointerButton::Primary,
		}
	}
}

/// What an event did to the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
	/// Nothing to do for this event in the current state.
	Ignored,
	Placed(NodeId),
	Selected(Option<NodeId>),
	Linked(Link),
	Moved(NodeId),
	Panned,
	Dropped(NodeId),
	/// The drop overlapped another node; the node went back to its anchor.
	Reverted(NodeId),
	Released,
	Deleted(NodeId),
	Restarted,
	Rejected(EditorError),
}
