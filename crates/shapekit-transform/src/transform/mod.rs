//! Transform algorithms.
//!
//! Every algorithm is a pure function of the drag-start snapshot and the
//! current pointer coordinate. Intermediate moves re-apply from the snapshot
//! rather than composing onto the previous step.

pub mod affine;
pub mod circle;
pub mod vertex;

use std::fmt;

use serde::{Deserialize, Serialize};

use shapekit_core::{Coordinate, Extent, Geometry, GeometryError};

use crate::handles::{Corner, Handle, HandleKind, Side};
use crate::history::ActionType;

/// The edit a drag performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformKind {
    Translate,
    Rotate,
    Scale(Corner),
    Stretch(Side),
    Vertex { index: usize },
    CircleCenter,
    CircleRadius,
    Delete,
}

impl TransformKind {
    /// The transform a press on `handle` starts.
    ///
    /// Edge midpoints and visual-only handles map to `None`; an edge midpoint
    /// first inserts a vertex and then drags it as [`TransformKind::Vertex`].
    pub fn for_handle(handle: &Handle) -> Option<TransformKind> {
        match handle.kind {
            HandleKind::Rotate => Some(TransformKind::Rotate),
            HandleKind::ScaleCorner(corner) => Some(TransformKind::Scale(corner)),
            HandleKind::StretchSide(side) => Some(TransformKind::Stretch(side)),
            HandleKind::Translate | HandleKind::TranslateCenter => Some(TransformKind::Translate),
            HandleKind::Delete => Some(TransformKind::Delete),
            HandleKind::Vertex if handle.aux.circle_center => Some(TransformKind::CircleCenter),
            HandleKind::Vertex if handle.aux.circle_edge => Some(TransformKind::CircleRadius),
            HandleKind::Vertex => handle
                .aux
                .vertex_index
                .map(|index| TransformKind::Vertex { index }),
            HandleKind::EdgeMidpoint | HandleKind::Boundary | HandleKind::RotateGuideLine => None,
        }
    }

    /// History label for a committed drag of this kind. Deleting the whole
    /// shape is not recorded.
    pub fn action(&self, vertex_added: bool) -> Option<ActionType> {
        let action = match self {
            TransformKind::Translate => ActionType::Translate,
            TransformKind::Rotate => ActionType::Rotate,
            TransformKind::Scale(_) => ActionType::Scale,
            TransformKind::Stretch(_) => ActionType::Stretch,
            TransformKind::Vertex { .. } if vertex_added => ActionType::AddVertex,
            TransformKind::Vertex { .. } => ActionType::MoveVertex,
            TransformKind::CircleCenter => ActionType::MoveCircleCenter,
            TransformKind::CircleRadius => ActionType::ResizeCircle,
            TransformKind::Delete => return None,
        };
        Some(action)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformKind::Translate => write!(f, "translate"),
            TransformKind::Rotate => write!(f, "rotate"),
            TransformKind::Scale(c) => write!(f, "scale {c:?}"),
            TransformKind::Stretch(s) => write!(f, "stretch {s:?}"),
            TransformKind::Vertex { index } => write!(f, "vertex {index}"),
            TransformKind::CircleCenter => write!(f, "circle center"),
            TransformKind::CircleRadius => write!(f, "circle radius"),
            TransformKind::Delete => write!(f, "delete"),
        }
    }
}

/// Values captured at pointer-down that every step of the drag reuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    /// Pointer position at pointer-down
    pub start: Coordinate,
    /// Extent of the snapshot
    pub extent: Extent,
    /// Rotation and scale pivot: the snapshot's extent center
    pub pivot: Coordinate,
    pub keep_aspect_ratio: bool,
}

impl DragContext {
    pub fn new(start: Coordinate, snapshot: &Geometry, keep_aspect_ratio: bool) -> Self {
        let extent = snapshot.extent();
        Self {
            start,
            extent,
            pivot: extent.center(),
            keep_aspect_ratio,
        }
    }
}

/// Computes the geometry for pointer position `current`.
pub fn apply(
    kind: TransformKind,
    snapshot: &Geometry,
    ctx: &DragContext,
    current: Coordinate,
) -> Result<Geometry, GeometryError> {
    let (dx, dy) = ctx.start.delta_to(&current);
    let next = match kind {
        TransformKind::Translate => affine::apply_matrix(snapshot, &affine::translation(dx, dy)),
        TransformKind::Rotate => {
            let angle = ctx.pivot.angle_to(&current) - ctx.pivot.angle_to(&ctx.start);
            affine::apply_matrix(snapshot, &affine::rotation_about(ctx.pivot, angle))
        }
        TransformKind::Scale(corner) => {
            let (sx, sy) = affine::corner_factors(corner, &ctx.extent, dx, dy, ctx.keep_aspect_ratio);
            affine::scale_geometry(snapshot, ctx.pivot, sx, sy)
        }
        TransformKind::Stretch(side) => {
            let (sx, sy) = affine::side_factors(side, &ctx.extent, dx, dy);
            affine::scale_geometry(snapshot, ctx.pivot, sx, sy)
        }
        TransformKind::Vertex { index } => vertex::move_vertex(snapshot, index, dx, dy)?,
        TransformKind::CircleCenter => circle::recenter(snapshot, dx, dy)?,
        TransformKind::CircleRadius => circle::resize(snapshot, current)?,
        TransformKind::Delete => snapshot.clone(),
    };
    Ok(next)
}
