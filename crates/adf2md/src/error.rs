//! Error types for ADF parsing and rendering.

use crate::node::NodeType;

/// Error constructing a typed node from a raw record.
///
/// These are structural errors: fatal for the record being built, recovered
/// only at the orchestrator boundary in [`crate::convert`].
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The record is not a JSON object.
    #[error("node record is not a JSON object")]
    NotAnObject,

    /// The record has no usable `type` tag.
    #[error("node record has no 'type' field")]
    MissingType,

    /// The `type` tag is outside the supported vocabulary.
    #[error("unknown node type '{0}'")]
    UnknownNodeType(String),

    /// A `text` node has no `text` field.
    #[error("text node has no 'text' field")]
    MissingText,
}

/// Error constructing a presenter for a node.
#[derive(Debug, thiserror::Error)]
pub enum PresenterError {
    /// No rendering rule exists for the node type.
    #[error("no presenter registered for node type '{0}'")]
    Unsupported(NodeType),
}

/// Error converting one top-level document.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Node tree construction failed.
    #[error(transparent)]
    Node(#[from] NodeError),

    /// Presenter tree construction failed.
    #[error(transparent)]
    Presenter(#[from] PresenterError),
}
