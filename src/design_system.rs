//! Design-system token loading
//!
//! The design system is a flat JSON object with exactly five string keys.
//! Loading is fail-fast: a missing or empty key is a configuration error
//! surfaced immediately, never a validation diagnostic. Downstream code may
//! therefore assume a complete token set.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default location of the design-system file, relative to the working dir.
pub const DEFAULT_DESIGN_SYSTEM_PATH: &str = "design-system.json";

#[derive(Debug, Error)]
pub enum DesignSystemError {
    #[error("design token '{key}' is missing or empty")]
    MissingToken { key: &'static str },

    #[error("failed to read design-system file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("design-system file is not valid JSON")]
    Parse(#[from] serde_json::Error),
}

/// The five immutable design tokens every generated component must honour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokenSet {
    /// Primary accent colour, hex form (`#` + 3/4/6/8 hex digits).
    pub primary_color: String,
    /// Secondary/surface colour, hex form.
    pub secondary_color: String,
    /// CSS length applied to cards, inputs, and buttons (e.g. `8px`).
    pub border_radius: String,
    /// Font family name (e.g. `Inter`).
    pub font_family: String,
    /// Base spacing unit for padding/margin (e.g. `16px`).
    pub spacing: String,
}

/// Raw shape used during deserialization so that absent keys become a typed
/// `MissingToken` error instead of a serde message.
#[derive(Deserialize)]
struct RawTokenSet {
    #[serde(default)]
    primary_color: Option<String>,
    #[serde(default)]
    secondary_color: Option<String>,
    #[serde(default)]
    border_radius: Option<String>,
    #[serde(default)]
    font_family: Option<String>,
    #[serde(default)]
    spacing: Option<String>,
}

impl DesignTokenSet {
    /// Parse a token set from JSON text, requiring all five keys.
    pub fn from_json_str(json: &str) -> Result<Self, DesignSystemError> {
        let raw: RawTokenSet = serde_json::from_str(json)?;
        Ok(Self {
            primary_color: require(raw.primary_color, "primary_color")?,
            secondary_color: require(raw.secondary_color, "secondary_color")?,
            border_radius: require(raw.border_radius, "border_radius")?,
            font_family: require(raw.font_family, "font_family")?,
            spacing: require(raw.spacing, "spacing")?,
        })
    }

    /// Load the token set from a JSON file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DesignSystemError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DesignSystemError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

fn require(value: Option<String>, key: &'static str) -> Result<String, DesignSystemError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DesignSystemError::MissingToken { key }),
    }
}
