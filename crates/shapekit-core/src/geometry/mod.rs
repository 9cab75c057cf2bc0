//! Geometry model edited by the transform engine.
//!
//! The four supported kinds form a closed union. Every per-kind read or write
//! the engine needs lives here, so the transform algorithms dispatch on the
//! tag exactly once instead of inspecting types at runtime.

mod coordinate;
mod extent;
mod vertices;

pub use coordinate::Coordinate;
pub use extent::Extent;
pub use vertices::{MIN_LINE_VERTICES, MIN_RING_LEN};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    Circle,
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryKind::Point => write!(f, "Point"),
            GeometryKind::LineString => write!(f, "LineString"),
            GeometryKind::Polygon => write!(f, "Polygon"),
            GeometryKind::Circle => write!(f, "Circle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub center: Coordinate,
    pub radius: f64,
}

/// A transformable geometry.
///
/// Polygons store their outer ring closed: the last coordinate repeats the
/// first. Every mutation in this crate keeps that true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates", rename_all = "snake_case")]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    Polygon(Vec<Coordinate>),
    Circle(CircleGeometry),
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point(Coordinate::new(x, y))
    }

    pub fn line_string(coords: impl IntoIterator<Item = Coordinate>) -> Self {
        Geometry::LineString(coords.into_iter().collect())
    }

    /// Builds a polygon, closing the ring if the input is open.
    pub fn polygon(coords: impl IntoIterator<Item = Coordinate>) -> Self {
        let mut ring: Vec<Coordinate> = coords.into_iter().collect();
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if ring.len() == 1 || first != last {
                ring.push(first);
            }
        }
        Geometry::Polygon(ring)
    }

    pub fn circle(center: Coordinate, radius: f64) -> Self {
        Geometry::Circle(CircleGeometry {
            center,
            radius: radius.abs(),
        })
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::Circle(_) => GeometryKind::Circle,
        }
    }

    /// Every stored coordinate, including a polygon's closing coordinate.
    /// A circle reports its center.
    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Geometry::Point(c) => std::slice::from_ref(c),
            Geometry::LineString(coords) | Geometry::Polygon(coords) => coords,
            Geometry::Circle(circle) => std::slice::from_ref(&circle.center),
        }
    }

    /// Coordinates a user can grab as vertices: a polygon's closing
    /// coordinate is left out.
    pub fn vertices(&self) -> &[Coordinate] {
        match self {
            Geometry::Polygon(ring) if ring.len() > 1 => &ring[..ring.len() - 1],
            other => other.coordinates(),
        }
    }

    /// Consecutive coordinate pairs; for a polygon this includes the closing edge.
    pub fn edges(&self) -> Vec<(Coordinate, Coordinate)> {
        match self {
            Geometry::LineString(coords) | Geometry::Polygon(coords) => {
                coords.windows(2).map(|w| (w[0], w[1])).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Replaces the coordinates of a point, line or polygon.
    ///
    /// Polygon input is re-closed. Circles keep their radius and take the
    /// first coordinate as the new center.
    pub fn set_coordinates(&mut self, coords: Vec<Coordinate>) {
        match self {
            Geometry::Point(c) => {
                if let Some(first) = coords.first() {
                    *c = *first;
                }
            }
            Geometry::LineString(existing) => *existing = coords,
            Geometry::Polygon(_) => *self = Geometry::polygon(coords),
            Geometry::Circle(circle) => {
                if let Some(first) = coords.first() {
                    circle.center = *first;
                }
            }
        }
    }

    pub fn extent(&self) -> Extent {
        match self {
            Geometry::Circle(circle) => Extent::new(
                circle.center.x - circle.radius,
                circle.center.y - circle.radius,
                circle.center.x + circle.radius,
                circle.center.y + circle.radius,
            ),
            other => Extent::from_coordinates(other.coordinates())
                .unwrap_or_else(|| Extent::new(0.0, 0.0, 0.0, 0.0)),
        }
    }

    pub fn center(&self) -> Coordinate {
        self.extent().center()
    }

    /// Applies `f` to every stored coordinate (a circle's center only).
    pub fn map_coordinates(&self, mut f: impl FnMut(Coordinate) -> Coordinate) -> Geometry {
        match self {
            Geometry::Point(c) => Geometry::Point(f(*c)),
            Geometry::LineString(coords) => {
                Geometry::LineString(coords.iter().map(|c| f(*c)).collect())
            }
            Geometry::Polygon(ring) => {
                let mut mapped: Vec<Coordinate> = ring.iter().map(|c| f(*c)).collect();
                // Closure must stay bit-exact.
                let first = mapped.first().copied();
                if let (Some(first), Some(last)) = (first, mapped.last_mut()) {
                    *last = first;
                }
                Geometry::Polygon(mapped)
            }
            Geometry::Circle(circle) => Geometry::Circle(CircleGeometry {
                center: f(circle.center),
                radius: circle.radius,
            }),
        }
    }

    /// True when a polygon's ring is closed; always true for other kinds.
    pub fn is_closed(&self) -> bool {
        match self {
            Geometry::Polygon(ring) => ring.first() == ring.last(),
            _ => true,
        }
    }

    /// Hit test in map units.
    ///
    /// Points and line strings match within `tolerance` of a coordinate or
    /// segment. Polygons and circles also match anywhere inside their area.
    pub fn contains_point(&self, p: &Coordinate, tolerance: f64) -> bool {
        match self {
            Geometry::Point(c) => c.distance_to(p) <= tolerance,
            Geometry::LineString(coords) => match coords.as_slice() {
                [only] => only.distance_to(p) <= tolerance,
                _ => coords
                    .windows(2)
                    .any(|w| p.distance_to_segment(&w[0], &w[1]) <= tolerance),
            },
            Geometry::Polygon(ring) => {
                ring_contains(ring, p)
                    || ring
                        .windows(2)
                        .any(|w| p.distance_to_segment(&w[0], &w[1]) <= tolerance)
            }
            Geometry::Circle(circle) => circle.center.distance_to(p) <= circle.radius + tolerance,
        }
    }
}

/// Even-odd ray casting against a closed ring.
fn ring_contains(ring: &[Coordinate], p: &Coordinate) -> bool {
    if ring.len() < 4 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 2;
    for i in 0..ring.len() - 1 {
        let (a, b) = (ring[i], ring[j]);
        if ((a.y > p.y) != (b.y > p.y)) && (p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x) {
            inside = !inside;
        }
        j = i;
    }
    inside
}
