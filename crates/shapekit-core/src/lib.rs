//! # ShapeKit Core
//!
//! Core types for the ShapeKit direct-manipulation engine.
//! Provides the geometry model the transform engine edits, the error
//! taxonomy shared by every layer, interaction options, and the projection
//! seam between screen pixels and map coordinates.

pub mod error;
pub mod geometry;
pub mod options;
pub mod shape;
pub mod viewport;

pub use error::{Error, GeometryError, InteractionError, Result};
pub use geometry::{
    CircleGeometry, Coordinate, Extent, Geometry, GeometryKind, MIN_LINE_VERTICES, MIN_RING_LEN,
};
pub use options::TransformOptions;
pub use shape::ShapeId;
pub use viewport::{MapSurface, Pixel, Viewport};
