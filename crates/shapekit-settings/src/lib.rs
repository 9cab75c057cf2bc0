//! ShapeKit Settings Crate
//!
//! Handles configuration files for the transform engine: interaction options,
//! history depth and the default log level.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, HistorySettings, LoggingSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
