//! Configuration and settings management for Krinkle
//!
//! Provides read-only configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is platform-specific.
//!
//! Configuration is organized into logical sections:
//! - Generation parameters (mode, k, m, t, rows, offset)
//! - View settings (canvas size, zoom sensitivity, framing)
//! - Overlay toggles (edges, labels, short-period warning)

use krinkle_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, ZOOM_SENSITIVITY};
use krinkle_core::TilingMode;
use krinkle_tiling::TilingParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Supported configuration file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Generator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSettings {
    pub mode: TilingMode,
    /// Modulus
    pub k: i64,
    /// Step
    pub m: i64,
    /// Symmetry multiplier
    pub t: i64,
    /// Wedge depth
    pub rows: usize,
    pub offset: bool,
}

impl Default for ParameterSettings {
    fn default() -> Self {
        let params = TilingParams::default();
        Self {
            mode: TilingMode::default(),
            k: params.k,
            m: params.m,
            t: params.t,
            rows: params.rows,
            offset: params.offset,
        }
    }
}

impl ParameterSettings {
    pub fn to_params(&self) -> TilingParams {
        TilingParams::new(self.k, self.m, self.t)
            .with_rows(self.rows)
            .with_offset(self.offset)
    }
}

/// Canvas and navigation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Scale change per wheel delta unit
    pub zoom_sensitivity: f64,
    /// Frame the result after every regeneration
    pub auto_center: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            auto_center: true,
        }
    }
}

/// Diagnostic overlay toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub show_edges: bool,
    pub show_wedge_labels: bool,
    pub show_tile_labels: bool,
    pub warn_short_period: bool,
    /// Font family for labels ("Sans", "Serif", "Monospace" or a family name)
    pub label_font_family: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            show_edges: true,
            show_wedge_labels: false,
            show_tile_labels: false,
            warn_short_period: true,
            label_font_family: "Sans".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections. Files are only ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub parameters: ParameterSettings,
    pub view: ViewSettings,
    pub overlays: OverlaySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location: `<config dir>/krinkle/config.toml`
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("krinkle").join("config.toml"))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    ///
    /// Only values that no run could use are rejected here. Whether the
    /// derived symmetry order is large enough is a per-run check done by
    /// [`TilingParams::validate`].
    pub fn validate(&self) -> ConfigResult<()> {
        let p = &self.parameters;
        if p.k < 1 {
            return Err(ConfigError::out_of_range("parameters.k", p.k));
        }
        if p.rows < 1 {
            return Err(ConfigError::out_of_range("parameters.rows", p.rows));
        }

        let v = &self.view;
        if v.canvas_width == 0 || v.canvas_height == 0 {
            return Err(ConfigError::out_of_range(
                "view.canvas",
                format!("{}x{}", v.canvas_width, v.canvas_height),
            ));
        }
        if !(v.zoom_sensitivity.is_finite() && v.zoom_sensitivity > 0.0) {
            return Err(ConfigError::out_of_range(
                "view.zoom_sensitivity",
                v.zoom_sensitivity,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parameters.to_params(), TilingParams::default());
        assert_eq!(config.view.canvas_width, 1200);
        assert!(config.overlays.warn_short_period);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.parameters.k = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::out_of_range("parameters.k", 0))
        );

        let mut config = Config::default();
        config.parameters.rows = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.view.canvas_height = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.view.zoom_sensitivity = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/b.json")),
            Ok(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("b.toml")),
            Ok(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("b.yaml")),
            Err(ConfigError::UnsupportedFormat("yaml".to_string()))
        );
        assert!(ConfigFormat::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[parameters]\nk = 7\nmode = \"tiling\"\n").unwrap();
        assert_eq!(config.parameters.k, 7);
        assert_eq!(config.parameters.mode, TilingMode::Tiling);
        assert_eq!(config.parameters.m, 2);
        assert_eq!(config.view, ViewSettings::default());
    }
}
