//! Error handling for ShapeKit
//!
//! Provides error types for the layers of the engine:
//! - Geometry errors (vertex edits that would break a geometry invariant)
//! - Interaction errors (operations against shapes the engine does not know)
//!
//! Most of these never reach the application shell. The interaction surface
//! turns them into silent no-ops and a log line; they exist so the internal
//! operations can say precisely why an edit was refused.

use thiserror::Error;

use crate::geometry::GeometryKind;
use crate::shape::ShapeId;

/// Geometry error type
///
/// Represents vertex edits rejected by a geometry's own invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Removing a vertex would leave fewer coordinates than the kind allows
    #[error("{kind} cannot drop below {minimum} coordinates")]
    BelowMinimumVertices {
        /// The geometry kind being edited.
        kind: GeometryKind,
        /// The minimum coordinate count for that kind.
        minimum: usize,
    },

    /// Vertex index does not address an existing vertex
    #[error("Vertex index {index} out of range for {len} vertices")]
    VertexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of addressable vertices.
        len: usize,
    },

    /// The edit has no meaning for this geometry kind
    #[error("{edit} is not supported on {kind}")]
    UnsupportedEdit {
        /// The geometry kind being edited.
        kind: GeometryKind,
        /// Short name of the edit.
        edit: &'static str,
    },
}

/// Interaction error type
///
/// Represents requests that reference shapes or state the engine cannot honour.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// The host has no geometry for this shape
    #[error("Shape {0} is not present in the host")]
    UnknownShape(ShapeId),

    /// The shape is not part of the membership collection
    #[error("Shape {0} is not transformable")]
    NotMember(ShapeId),

    /// An operation needed a selected shape
    #[error("No shape is selected")]
    NoSelection,

    /// An operation is refused while a drag is in progress
    #[error("A transform is in progress")]
    TransformInProgress,
}

/// Main error type for ShapeKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Interaction error
    #[error(transparent)]
    Interaction(#[from] InteractionError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this is an interaction error
    pub fn is_interaction_error(&self) -> bool {
        matches!(self, Error::Interaction(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
