//! Vertex-level edits on a drag-start snapshot.

use shapekit_core::{Coordinate, Geometry, GeometryError};

/// Moves vertex `index` of `start` by (dx, dy).
pub fn move_vertex(
    start: &Geometry,
    index: usize,
    dx: f64,
    dy: f64,
) -> Result<Geometry, GeometryError> {
    let origin = start
        .vertices()
        .get(index)
        .copied()
        .ok_or(GeometryError::VertexOutOfRange {
            index,
            len: start.vertex_count(),
        })?;
    let mut next = start.clone();
    next.move_vertex(index, origin.offset(dx, dy))?;
    Ok(next)
}

/// Inserts the midpoint of edge `edge_index` as a new vertex.
///
/// Returns the new geometry and the index of the inserted vertex, which is
/// always `edge_index + 1`.
pub fn insert_midpoint(
    start: &Geometry,
    edge_index: usize,
) -> Result<(Geometry, usize), GeometryError> {
    let edges = start.edges();
    let (a, b) = edges
        .get(edge_index)
        .copied()
        .ok_or(GeometryError::VertexOutOfRange {
            index: edge_index,
            len: edges.len(),
        })?;
    let index = edge_index + 1;
    let mut next = start.clone();
    next.insert_vertex(index, a.midpoint(&b))?;
    Ok((next, index))
}

/// Removes vertex `index`, keeping the geometry's minimum-vertex floor.
pub fn delete_vertex(start: &Geometry, index: usize) -> Result<(Geometry, Coordinate), GeometryError> {
    let mut next = start.clone();
    let removed = next.remove_vertex(index)?;
    Ok((next, removed))
}
