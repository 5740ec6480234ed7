//! Generation/render mode tag

use crate::error::ModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the generator produces and which overlays the renderer applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TilingMode {
    /// A single prototile (wedge 0's base tile)
    #[default]
    Prototile,
    /// A triangular arrangement of prototiles
    Wedge,
    /// Wedges placed around the center by front tracking
    Tiling,
}

impl TilingMode {
    /// All modes in display order
    pub const ALL: [TilingMode; 3] = [Self::Prototile, Self::Wedge, Self::Tiling];

    /// Lowercase identifier used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prototile => "prototile",
            Self::Wedge => "wedge",
            Self::Tiling => "tiling",
        }
    }
}

impl fmt::Display for TilingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prototile => write!(f, "Prototile"),
            Self::Wedge => write!(f, "Wedge"),
            Self::Tiling => write!(f, "Tiling"),
        }
    }
}

impl FromStr for TilingMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prototile" => Ok(Self::Prototile),
            "wedge" => Ok(Self::Wedge),
            "tiling" => Ok(Self::Tiling),
            _ => Err(ModeError::Unsupported {
                mode: s.to_string(),
            }),
        }
    }
}
