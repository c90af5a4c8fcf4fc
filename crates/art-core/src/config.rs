//! Canvas and session configuration.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Configuration for a drawing session.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Color the surface is cleared to, and what the eraser paints.
    pub background: Color,
    /// Maximum number of retained history snapshots (including the oldest).
    pub history_limit: usize,
    /// Initial drawing color.
    pub default_color: Color,
    /// Initial tool size in pixels.
    pub default_size: u32,
    /// Filename handed to the download collaborator on export.
    pub export_filename: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::WHITE,
            history_limit: 50,
            default_color: Color::BLACK,
            default_size: 2,
            export_filename: "my-artwork.png".to_string(),
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON configuration object.
    ///
    /// # Errors
    /// Returns the JSON error message when the text is not a valid object.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let mut config: CanvasConfig =
            serde_json::from_str(text).map_err(|e| format!("Config parse error: {e}"))?;
        if config.history_limit == 0 {
            log::warn!("history_limit of 0 cannot hold the initial snapshot, using 1");
            config.history_limit = 1;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(CanvasConfig::from_json("{}").unwrap(), CanvasConfig::default());
    }

    #[test]
    fn partial_override() {
        let config =
            CanvasConfig::from_json(r##"{"width": 320, "background": "#000", "history_limit": 5}"##)
                .unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.history_limit, 5);
    }

    #[test]
    fn zero_history_limit_is_raised() {
        let config = CanvasConfig::from_json(r#"{"history_limit": 0}"#).unwrap();
        assert_eq!(config.history_limit, 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = CanvasConfig::from_json("not json").unwrap_err();
        assert!(err.starts_with("Config parse error"));
    }
}
