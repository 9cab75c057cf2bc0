//! Projection between screen pixels and map coordinates.
//!
//! The transform engine never draws anything itself; it only needs to turn a
//! pointer position into a map coordinate and to know how many map units one
//! pixel covers, so that pick tolerances and handle spacing stay constant on
//! screen at every zoom level. [`MapSurface`] is that seam; [`Viewport`] is a
//! zoom/pan implementation of it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Coordinate, Extent};

/// Zoom limits, exclusive.
const MIN_ZOOM: f64 = 0.01;
const MAX_ZOOM: f64 = 500.0;

/// Screen position in pixels. (0,0) is the top-left corner; Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Pixel) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// The rendering surface's projection, as seen by the transform engine.
pub trait MapSurface {
    /// Converts a screen pixel to a map coordinate.
    fn pixel_to_map(&self, pixel: Pixel) -> Coordinate;

    /// Converts a map coordinate to a screen pixel.
    fn map_to_pixel(&self, coordinate: Coordinate) -> Pixel;

    /// Map units covered by one pixel at the current zoom.
    fn resolution(&self) -> f64;
}

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a viewport with map (0,0) at the bottom-left pixel.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = one map unit per pixel).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level; values outside the supported range are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Zooms to a map coordinate, keeping its screen position fixed.
    pub fn zoom_to_point(&mut self, coordinate: &Coordinate, new_zoom: f64) {
        if new_zoom <= MIN_ZOOM || new_zoom >= MAX_ZOOM {
            return;
        }

        let pixel = self.map_to_pixel(*coordinate);

        // pixel_x = x * zoom + pan_x, pixel_y = height - (y * zoom + pan_y)
        self.zoom = new_zoom;
        self.pan_x = pixel.x - coordinate.x * new_zoom;
        self.pan_y = self.canvas_height - pixel.y - coordinate.y * new_zoom;
    }

    /// Centers the viewport on a map coordinate.
    pub fn center_on(&mut self, coordinate: &Coordinate) {
        self.pan_x = self.canvas_width / 2.0 - coordinate.x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - coordinate.y * self.zoom;
    }

    /// Fits an extent into the viewport, reserving `padding` (fraction of the
    /// canvas, per edge) as margin.
    pub fn fit_to_extent(&mut self, extent: &Extent, padding: f64) {
        if extent.width() <= 0.0 || extent.height() <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / extent.width();
        let zoom_y = (self.canvas_height * padding_factor) / extent.height();
        self.zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM * 2.0, MAX_ZOOM / 2.0);
        self.center_on(&extent.center());
    }
}

impl MapSurface for Viewport {
    fn pixel_to_map(&self, pixel: Pixel) -> Coordinate {
        let x = (pixel.x - self.pan_x) / self.zoom;
        // Flip Y-axis: lower pixel Y (top of screen) maps to higher map Y
        let y = (self.canvas_height - pixel.y - self.pan_y) / self.zoom;
        Coordinate::new(x, y)
    }

    fn map_to_pixel(&self, coordinate: Coordinate) -> Pixel {
        let x = coordinate.x * self.zoom + self.pan_x;
        let y = self.canvas_height - (coordinate.y * self.zoom + self.pan_y);
        Pixel::new(x, y)
    }

    fn resolution(&self) -> f64 {
        1.0 / self.zoom
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
