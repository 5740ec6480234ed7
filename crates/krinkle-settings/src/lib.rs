//! Krinkle Settings Crate
//!
//! Handles application configuration: generation parameters, view
//! preferences and overlay toggles, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, OverlaySettings, ParameterSettings, ViewSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
