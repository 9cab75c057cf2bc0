//! Pointer input and cursor feedback.

use serde::{Deserialize, Serialize};

use shapekit_core::Pixel;

use crate::handles::{Corner, Handle, HandleKind, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Down,
    /// Motion with a button held
    Drag,
    Up,
    /// Hover motion with no button held
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pixel: Pixel,
    #[serde(default)]
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn drag(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Drag, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub fn hover(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            pixel: Pixel::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// Cursor the shell should show for what lies under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Default,
    Pointer,
    Move,
    Grab,
    Grabbing,
    ResizeNeSw,
    ResizeNwSe,
    ResizeNs,
    ResizeEw,
    Crosshair,
    NotAllowed,
}

impl CursorHint {
    /// CSS cursor name, as accepted by most toolkits' named-cursor lookups.
    pub fn css_name(&self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Pointer => "pointer",
            CursorHint::Move => "move",
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
            CursorHint::ResizeNeSw => "nesw-resize",
            CursorHint::ResizeNwSe => "nwse-resize",
            CursorHint::ResizeNs => "ns-resize",
            CursorHint::ResizeEw => "ew-resize",
            CursorHint::Crosshair => "crosshair",
            CursorHint::NotAllowed => "not-allowed",
        }
    }

    pub fn for_handle(handle: &Handle) -> CursorHint {
        match handle.kind {
            HandleKind::Rotate => CursorHint::Grab,
            HandleKind::ScaleCorner(Corner::NE | Corner::SW) => CursorHint::ResizeNeSw,
            HandleKind::ScaleCorner(Corner::NW | Corner::SE) => CursorHint::ResizeNwSe,
            HandleKind::StretchSide(Side::N | Side::S) => CursorHint::ResizeNs,
            HandleKind::StretchSide(Side::E | Side::W) => CursorHint::ResizeEw,
            HandleKind::Delete => CursorHint::Pointer,
            HandleKind::Vertex if handle.aux.circle_edge => CursorHint::ResizeEw,
            HandleKind::Vertex | HandleKind::Translate | HandleKind::TranslateCenter => {
                CursorHint::Move
            }
            HandleKind::EdgeMidpoint => CursorHint::Crosshair,
            HandleKind::Boundary | HandleKind::RotateGuideLine => CursorHint::Default,
        }
    }
}
