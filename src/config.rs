//! # Configuration
//!
//! Settings the host hands to the generator: the markers appended to the last
//! line of a stanza and of the whole poem, and the placeholder shown as context
//! before the first line.
//!
//! Settings are read from YAML using the host's key names:
//!
//! ```yaml
//! endOfTextMarker: " ■"
//! endOfStanzaMarker: " ▪"
//! beginningLine: "[البداية]"
//! ```
//!
//! Every key is optional. Missing markers default to the empty string. Keys
//! the generator does not use are ignored, so the host can keep its other
//! settings in the same mapping.

use crate::error::{LpcgError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Placeholder used as context for the first position of a poem.
pub const DEFAULT_BEGINNING_LINE: &str = "[البداية]";

/// Resolved generator settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub end_of_text_marker: String,
    pub end_of_stanza_marker: String,
    pub beginning_line: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            end_of_text_marker: String::new(),
            end_of_stanza_marker: String::new(),
            beginning_line: DEFAULT_BEGINNING_LINE.to_string(),
        }
    }
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    end_of_text_marker: Option<String>,
    end_of_stanza_marker: Option<String>,
    beginning_line: Option<String>,
}

impl Config {
    /// Build a config with the given markers and the default placeholder.
    pub fn with_markers(end_of_text: &str, end_of_stanza: &str) -> Self {
        Self {
            end_of_text_marker: end_of_text.to_string(),
            end_of_stanza_marker: end_of_stanza.to_string(),
            ..Self::default()
        }
    }

    /// Parse settings from a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| LpcgError::Config(e.to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            end_of_text_marker: raw.end_of_text_marker.unwrap_or(defaults.end_of_text_marker),
            end_of_stanza_marker: raw
                .end_of_stanza_marker
                .unwrap_or(defaults.end_of_stanza_marker),
            beginning_line: raw.beginning_line.unwrap_or(defaults.beginning_line),
        })
    }

    /// Read and parse a YAML settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LpcgError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_yaml(&content)
    }
}
