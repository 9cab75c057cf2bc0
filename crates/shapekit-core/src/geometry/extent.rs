use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Axis-aligned bounding box in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// Smallest extent containing every coordinate, or `None` for an empty input.
    pub fn from_coordinates<'a>(coords: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut extent = Extent {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for c in iter {
            extent.extend(c);
        }
        Some(extent)
    }

    pub fn extend(&mut self, c: &Coordinate) {
        self.min_x = self.min_x.min(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_x = self.max_x.max(c.x);
        self.max_y = self.max_y.max(c.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grows the extent by `amount` on every side.
    pub fn buffer(&self, amount: f64) -> Extent {
        Extent {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }

    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.min_x, self.max_y)
    }

    pub fn top_right(&self) -> Coordinate {
        Coordinate::new(self.max_x, self.max_y)
    }

    pub fn bottom_left(&self) -> Coordinate {
        Coordinate::new(self.min_x, self.min_y)
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.max_x, self.min_y)
    }

    /// Closed outline ring, counter-clockwise from the bottom-left corner.
    pub fn outline(&self) -> [Coordinate; 5] {
        [
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
            self.bottom_left(),
        ]
    }
}
