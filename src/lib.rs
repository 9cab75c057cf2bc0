//! # ShapeKit
//!
//! A direct-manipulation transform engine for shapes drawn over a map view:
//! grab handles to move, rotate, scale and stretch a shape, edit its
//! vertices, resize circles, and step back and forth through an undo
//! history.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Geometry model, errors, options, viewport projection
//! 2. **shapekit-transform** - Handles, hit testing, transforms, history, interaction
//! 3. **shapekit-settings** - Configuration files and validation
//! 4. **shapekit** - Logging setup and the gesture replay tool

pub mod script;

pub use shapekit_core::{
    Coordinate, Error, Extent, Geometry, GeometryError, GeometryKind, InteractionError,
    MapSurface, Pixel, Result, ShapeId, TransformOptions, Viewport,
};
pub use shapekit_settings::{Config, SettingsPersistence};
pub use shapekit_transform::{
    CursorHint, EventFilter, Handle, HandleKind, PointerEvent, Scene, SharedInteraction,
    TransformEvent, TransformInteraction,
};

/// Initialize logging
///
/// Console output on stderr, so command output on stdout stays parseable.
/// `RUST_LOG` wins over `default_level` when set.
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", default_level, e))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
