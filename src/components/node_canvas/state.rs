use log::{debug, info};

use super::error::EditorError;
use super::store::ShapeStore;
use super::types::{
	EditorEvent, EditorOptions, Link, Modifiers, Node, NodeId, Outcome, PointerButton,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
	#[default]
	Idle,
	/// Dragging a node; `anchor` is where it sat when the drag began.
	Node { id: NodeId, anchor: (f64, f64) },
	/// Dragging empty canvas: every node follows the pointer.
	Pan,
}

/// Interaction controller: turns pointer and key events into store mutations.
#[derive(Clone, Debug)]
pub struct Editor {
	options: EditorOptions,
	store: ShapeStore,
	selected: Option<NodeId>,
	drag: DragState,
	next_id: u32,
}

impl Default for Editor {
	fn default() -> Self {
		let options = EditorOptions::default();
		Self {
			store: ShapeStore::with_overlap_tolerance(options.overlap_tolerance),
			options,
			selected: None,
			drag: DragState::Idle,
			next_id: 1,
		}
	}
}

impl Editor {
	pub fn new(options: EditorOptions) -> Result<Self, EditorError> {
		options.validate()?;
		Ok(Self {
			store: ShapeStore::with_overlap_tolerance(options.overlap_tolerance),
			options,
			..Self::default()
		})
	}

	pub fn options(&self) -> &EditorOptions {
		&self.options
	}

	pub fn store(&self) -> &ShapeStore {
		&self.store
	}

	/// Direct store access. Nodes inserted here may take ids the editor would
	/// have handed out; `place` skips those.
	pub fn store_mut(&mut self) -> &mut ShapeStore {
		&mut self.store
	}

	/// Current selection, if that node is still in the store.
	pub fn selected(&self) -> Option<NodeId> {
		self.selected.filter(|&id| self.store.contains(id))
	}

	pub fn selected_node(&self) -> Option<&Node> {
		self.selected.and_then(|id| self.store.get(id))
	}

	pub fn drag(&self) -> DragState {
		self.drag
	}

	pub fn is_dragging(&self) -> bool {
		self.drag != DragState::Idle
	}

	/// Consumes the editor, applies one event and hands it back.
	pub fn apply(mut self, event: EditorEvent) -> Self {
		self.handle(event);
		self
	}

	pub fn handle(&mut self, event: EditorEvent) -> Outcome {
		let outcome = match event {
			EditorEvent::Press {
				x,
				y,
				button,
				modifiers,
			} => {
				if button != PointerButton::Primary {
					return Outcome::Ignored;
				}
				self.press(x, y, modifiers)
			}
			EditorEvent::Move { x, y, dx, dy } => self.pointer_move(x, y, dx, dy),
			EditorEvent::Release { button } => {
				if button != PointerButton::Primary {
					return Outcome::Ignored;
				}
				self.release()
			}
			EditorEvent::Delete => self.delete_selected(),
			EditorEvent::Restart => self.restart(),
		};
		if let Outcome::Rejected(ref err) = outcome {
			info!("{}", err);
		}
		outcome
	}

	fn press(&mut self, x: f64, y: f64, modifiers: Modifiers) -> Outcome {
		if modifiers.ctrl {
			self.place(x, y)
		} else if modifiers.shift && self.options.links_enabled {
			self.link_to(x, y)
		} else if modifiers.shift {
			self.select_at(x, y)
		} else {
			self.grab(x, y)
		}
	}

	/// Creates a node under the pointer and starts dragging it.
	fn place(&mut self, x: f64, y: f64) -> Outcome {
		while self.store.contains(NodeId(self.next_id)) {
			self.next_id += 1;
		}
		let id = NodeId(self.next_id);
		let mut node = Node::new(id, x, y, self.options.node_radius);
		if self.options.labels_enabled {
			node = node.with_label(id.to_string());
		}
		match self.store.insert(node) {
			Ok(id) => {
				self.next_id += 1;
				self.selected = Some(id);
				self.drag = DragState::Node { id, anchor: (x, y) };
				Outcome::Placed(id)
			}
			Err(err) => Outcome::Rejected(err),
		}
	}

	/// Links the current selection to the node under the pointer, which then
	/// becomes the selection.
	fn link_to(&mut self, x: f64, y: f64) -> Outcome {
		let Some(source) = self.selected() else {
			return self.select_at(x, y);
		};
		let Some(target) = self.store.find_at(x, y).map(|n| n.id) else {
			return Outcome::Ignored;
		};
		if target == source {
			return Outcome::Ignored;
		}
		self.selected = Some(target);
		match self.store.link(source, target) {
			Ok(_) => Outcome::Linked(Link { source, target }),
			Err(err) => Outcome::Rejected(err),
		}
	}

	fn select_at(&mut self, x: f64, y: f64) -> Outcome {
		self.selected = self.store.find_at(x, y).map(|n| n.id);
		Outcome::Selected(self.selected)
	}

	/// Plain press: select whatever is under the pointer and start a drag.
	fn grab(&mut self, x: f64, y: f64) -> Outcome {
		let hit = self.store.find_at(x, y).map(|n| (n.id, n.x, n.y));
		match hit {
			Some((id, nx, ny)) => {
				self.selected = Some(id);
				self.store.raise_to_top(id);
				self.drag = DragState::Node {
					id,
					anchor: (nx, ny),
				};
			}
			None => {
				self.selected = None;
				self.drag = if self.options.pan_enabled {
					DragState::Pan
				} else {
					DragState::Idle
				};
			}
		}
		Outcome::Selected(self.selected)
	}

	fn pointer_move(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> Outcome {
		match self.drag {
			DragState::Idle => Outcome::Ignored,
			DragState::Node { id, .. } => {
				if self.store.set_center(id, x, y) {
					Outcome::Moved(id)
				} else {
					Outcome::Ignored
				}
			}
			DragState::Pan => {
				self.store.translate_all(dx, dy);
				Outcome::Panned
			}
		}
	}

	/// Ends the drag. A node dropped onto another node goes back to its anchor.
	fn release(&mut self) -> Outcome {
		match std::mem::take(&mut self.drag) {
			DragState::Idle => Outcome::Ignored,
			DragState::Pan => Outcome::Released,
			DragState::Node { id, anchor } => match self.store.overlapping(id) {
				Some(overlapping) => {
					self.store.set_center(id, anchor.0, anchor.1);
					info!(
						"{}",
						EditorError::DropRejected {
							node: id,
							overlapping
						}
					);
					Outcome::Reverted(id)
				}
				None if self.store.contains(id) => Outcome::Dropped(id),
				None => Outcome::Released,
			},
		}
	}

	fn delete_selected(&mut self) -> Outcome {
		let Some(id) = self.selected() else {
			self.selected = None;
			return Outcome::Ignored;
		};
		self.selected = None;
		self.drag = DragState::Idle;
		match self.store.remove(id) {
			Some(_) => Outcome::Deleted(id),
			None => Outcome::Rejected(EditorError::NodeNotFound(id)),
		}
	}

	/// Empties the store and forgets the session.
	pub fn restart(&mut self) -> Outcome {
		debug!("Restarting editor with {} nodes", self.store.len());
		self.store.clear();
		self.selected = None;
		self.drag = DragState::Idle;
		self.next_id = 1;
		Outcome::Restarted
	}
}
