use serde::{Deserialize, Serialize};

/// Default pick radius around the pointer, in pixels.
pub const DEFAULT_HIT_TOLERANCE_PX: f64 = 5.0;

/// Default distance between a shape's extent and its handle frame, in pixels.
pub const DEFAULT_HANDLE_PADDING_PX: f64 = 15.0;

/// Feature switches for a transform interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Drag the shape body to move it
    pub translate_feature: bool,
    /// Show corner scale handles
    pub scale: bool,
    /// Show the rotate handle
    pub rotate: bool,
    /// Show side stretch handles
    pub stretch: bool,
    /// Lock X and Y scale factors together on corner scaling
    pub keep_aspect_ratio: bool,
    /// Pick radius in pixels
    pub hit_tolerance: f64,
    /// Show the delete handle
    pub enable_delete: bool,
    /// Show a move handle at the extent center of lines and polygons
    pub translate_center: bool,
    /// Gap between the shape extent and the handle frame, in pixels
    pub handle_padding_px: f64,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            translate_feature: false,
            scale: true,
            rotate: true,
            stretch: true,
            keep_aspect_ratio: false,
            hit_tolerance: DEFAULT_HIT_TOLERANCE_PX,
            enable_delete: true,
            translate_center: false,
            handle_padding_px: DEFAULT_HANDLE_PADDING_PX,
        }
    }
}

impl TransformOptions {
    /// Pick radius converted to map units at `resolution` (map units per pixel).
    pub fn tolerance_at(&self, resolution: f64) -> f64 {
        self.hit_tolerance * resolution
    }

    /// Handle padding converted to map units at `resolution`.
    pub fn padding_at(&self, resolution: f64) -> f64 {
        self.handle_padding_px * resolution
    }
}
