//! Circular node editor on a 2D canvas: place, drag, link and delete nodes.

mod component;
mod error;
pub mod geometry;
mod render;
mod state;
mod store;
mod types;

pub use component::NodeCanvas;
pub use error::EditorError;
pub use state::{DragState, Editor};
pub use store::ShapeStore;
pub use types::{
	EditorEvent, EditorOptions, Link, Modifiers, Node, NodeId, Outcome, PointerButton,
};
