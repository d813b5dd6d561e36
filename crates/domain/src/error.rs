//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The element type string is not one of node, way or relation.
    #[error("unknown element type: {0}")]
    UnknownElementType(String),

    /// Coordinates were applied to an element that is not a node.
    #[error("coordinates only apply to nodes, got a {0}")]
    NotANode(crate::element::ElementType),

    /// A bounding box is inverted or outside the valid lon/lat ranges.
    #[error("invalid bounding box: {0}")]
    InvalidBbox(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
