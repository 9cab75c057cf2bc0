//! Homogeneous 2D affine helpers for translate, rotate, scale and stretch.

use nalgebra::{Matrix3, Point2, Vector2};

use shapekit_core::{CircleGeometry, Coordinate, Extent, Geometry};

use crate::handles::{Corner, Side};

/// Scale and stretch factors never drop below this, so a drag past the fixed
/// edge flattens the shape instead of mirroring it.
pub const MIN_SCALE_FACTOR: f64 = 0.1;

/// Spans narrower than this keep a factor of 1.0.
const DEGENERATE_SPAN: f64 = 1e-9;

pub fn translation(dx: f64, dy: f64) -> Matrix3<f64> {
    Matrix3::new_translation(&Vector2::new(dx, dy))
}

/// Rotation by `angle` radians (counter-clockwise) about `pivot`.
pub fn rotation_about(pivot: Coordinate, angle: f64) -> Matrix3<f64> {
    translation(pivot.x, pivot.y) * Matrix3::new_rotation(angle) * translation(-pivot.x, -pivot.y)
}

/// Non-uniform scaling about `center`.
pub fn scaling_about(center: Coordinate, sx: f64, sy: f64) -> Matrix3<f64> {
    translation(center.x, center.y)
        * Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy))
        * translation(-center.x, -center.y)
}

pub fn transform_coordinate(m: &Matrix3<f64>, c: Coordinate) -> Coordinate {
    m.transform_point(&Point2::from(c)).into()
}

/// Applies `m` to every coordinate of `geometry`.
///
/// Circles move their center only; the radius is left to the caller.
pub fn apply_matrix(geometry: &Geometry, m: &Matrix3<f64>) -> Geometry {
    geometry.map_coordinates(|c| transform_coordinate(m, c))
}

/// Factor that moves the `moving` edge by `delta` while `fixed` stays put.
fn edge_factor(moving: f64, fixed: f64, delta: f64) -> f64 {
    let span = moving - fixed;
    if span.abs() < DEGENERATE_SPAN {
        return 1.0;
    }
    ((span + delta) / span).max(MIN_SCALE_FACTOR)
}

/// Independent X/Y factors for dragging `corner` of `extent` by (dx, dy).
///
/// With `keep_aspect_ratio` both collapse to the smaller one.
pub fn corner_factors(
    corner: Corner,
    extent: &Extent,
    dx: f64,
    dy: f64,
    keep_aspect_ratio: bool,
) -> (f64, f64) {
    let moving = corner.on(extent);
    let fixed = corner.opposite().on(extent);
    let sx = edge_factor(moving.x, fixed.x, dx);
    let sy = edge_factor(moving.y, fixed.y, dy);
    if keep_aspect_ratio {
        let s = sx.min(sy);
        (s, s)
    } else {
        (sx, sy)
    }
}

/// Single-axis factors for dragging `side` of `extent` by (dx, dy).
pub fn side_factors(side: Side, extent: &Extent, dx: f64, dy: f64) -> (f64, f64) {
    match side {
        Side::E => (edge_factor(extent.max_x, extent.min_x, dx), 1.0),
        Side::W => (edge_factor(extent.min_x, extent.max_x, dx), 1.0),
        Side::N => (1.0, edge_factor(extent.max_y, extent.min_y, dy)),
        Side::S => (1.0, edge_factor(extent.min_y, extent.max_y, dy)),
    }
}

/// Scales `geometry` about `center`. A circle's radius follows the smaller factor.
pub fn scale_geometry(geometry: &Geometry, center: Coordinate, sx: f64, sy: f64) -> Geometry {
    let m = scaling_about(center, sx, sy);
    match geometry {
        Geometry::Circle(circle) => Geometry::Circle(CircleGeometry {
            center: transform_coordinate(&m, circle.center),
            radius: circle.radius * sx.min(sy),
        }),
        other => apply_matrix(other, &m),
    }
}
