//! Vertex-level edits: move, insert and delete.
//!
//! Indices address [`Geometry::vertices`], so a polygon's closing coordinate is
//! never addressed directly; editing vertex 0 rewrites it as well.

use super::{Coordinate, Geometry, GeometryKind};
use crate::error::GeometryError;

/// Fewest coordinates a line string may keep.
pub const MIN_LINE_VERTICES: usize = 2;

/// Fewest coordinates a polygon ring may keep (three vertices plus closure).
pub const MIN_RING_LEN: usize = 4;

impl Geometry {
    /// Number of grabbable vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Replaces vertex `index` with `to`.
    pub fn move_vertex(&mut self, index: usize, to: Coordinate) -> Result<(), GeometryError> {
        let len = self.vertex_count();
        match self {
            Geometry::Point(c) if index == 0 => *c = to,
            Geometry::LineString(coords) if index < coords.len() => coords[index] = to,
            Geometry::Polygon(ring) if index < len => {
                ring[index] = to;
                if index == 0 {
                    if let Some(last) = ring.last_mut() {
                        *last = to;
                    }
                }
            }
            Geometry::Circle(_) => {
                return Err(GeometryError::UnsupportedEdit {
                    kind: GeometryKind::Circle,
                    edit: "move vertex",
                })
            }
            _ => return Err(GeometryError::VertexOutOfRange { index, len }),
        }
        Ok(())
    }

    /// Inserts `at` so that it becomes vertex `index`.
    pub fn insert_vertex(&mut self, index: usize, at: Coordinate) -> Result<(), GeometryError> {
        let len = self.vertex_count();
        match self {
            Geometry::LineString(coords) if index <= coords.len() => coords.insert(index, at),
            Geometry::Polygon(ring) if index <= len => {
                ring.insert(index, at);
                if index == 0 {
                    if let Some(last) = ring.last_mut() {
                        *last = at;
                    }
                }
            }
            Geometry::LineString(_) | Geometry::Polygon(_) => {
                return Err(GeometryError::VertexOutOfRange { index, len })
            }
            other => {
                return Err(GeometryError::UnsupportedEdit {
                    kind: other.kind(),
                    edit: "insert vertex",
                })
            }
        }
        Ok(())
    }

    /// Removes vertex `index`, refusing edits that would break the
    /// minimum-vertex rule of the kind.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Coordinate, GeometryError> {
        let len = self.vertex_count();
        match self {
            Geometry::LineString(coords) => {
                if index >= coords.len() {
                    return Err(GeometryError::VertexOutOfRange { index, len });
                }
                if coords.len() <= MIN_LINE_VERTICES {
                    return Err(GeometryError::BelowMinimumVertices {
                        kind: GeometryKind::LineString,
                        minimum: MIN_LINE_VERTICES,
                    });
                }
                Ok(coords.remove(index))
            }
            Geometry::Polygon(ring) => {
                if index >= len {
                    return Err(GeometryError::VertexOutOfRange { index, len });
                }
                if ring.len() <= MIN_RING_LEN {
                    return Err(GeometryError::BelowMinimumVertices {
                        kind: GeometryKind::Polygon,
                        minimum: MIN_RING_LEN,
                    });
                }
                let removed = ring.remove(index);
                if index == 0 {
                    let first = ring[0];
                    if let Some(last) = ring.last_mut() {
                        *last = first;
                    }
                }
                Ok(removed)
            }
            other => Err(GeometryError::UnsupportedEdit {
                kind: other.kind(),
                edit: "delete vertex",
            }),
        }
    }
}
