//! UI components.

pub mod node_canvas;
