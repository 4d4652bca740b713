use thiserror::Error;

use super::types::NodeId;

/// Everything the editor can refuse to do. None of these are fatal: the
/// store is left untouched (or restored) and the caller carries on.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EditorError {
	#[error("there is already a node at that position (overlaps node {overlapping})")]
	PlacementRejected { overlapping: NodeId },

	#[error("node {node} cannot be dropped on top of node {overlapping}")]
	DropRejected { node: NodeId, overlapping: NodeId },

	#[error("node {0} does not exist")]
	NodeNotFound(NodeId),

	#[error("node {0} is already in the store")]
	DuplicateNode(NodeId),

	#[error("invalid option `{name}`: {reason}")]
	InvalidOption { name: &'static str, reason: String },
}
