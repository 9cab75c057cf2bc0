use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A position in map units. Y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns this coordinate shifted by (dx, dy).
    pub fn offset(&self, dx: f64, dy: f64) -> Coordinate {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Vector from `self` to `other`.
    pub fn delta_to(&self, other: &Coordinate) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Angle of the vector from `self` to `other`, in radians.
    pub fn angle_to(&self, other: &Coordinate) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn approx_eq(&self, other: &Coordinate, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Shortest distance from this coordinate to the segment `a`-`b`.
    pub fn distance_to_segment(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        let (sx, sy) = a.delta_to(b);
        let len_sq = sx * sx + sy * sy;
        if len_sq < f64::EPSILON {
            return self.distance_to(a);
        }
        let t = (((self.x - a.x) * sx + (self.y - a.y) * sy) / len_sq).clamp(0.0, 1.0);
        self.distance_to(&Coordinate::new(a.x + t * sx, a.y + t * sy))
    }
}

impl From<Coordinate> for Point2<f64> {
    fn from(c: Coordinate) -> Self {
        Point2::new(c.x, c.y)
    }
}

impl From<Point2<f64>> for Coordinate {
    fn from(p: Point2<f64>) -> Self {
        Coordinate::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}
