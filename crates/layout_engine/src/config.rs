//! Layout configuration and settings persistence
//!
//! The constants here were tuned by eye on a 960x680 two-color panel. They
//! are kept as configuration rather than derived.

use crate::{CanvasGeometry, FontSizes, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use text_engine::{calculate_line_height, DEFAULT_LEADING};

/// Tuning constants for quote layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Line height as a multiple of the font size
    pub leading: f32,
    /// Vertical usage above which the size search stops early
    pub target_usage: f32,
    /// Fewest lines a quote block needs to count as a better fit
    pub min_line_count: usize,
    /// Initial caption size as a fraction of the quote size
    pub caption_scale: f32,
    /// Minimum accent size as a multiple of the quote size
    pub accent_scale: f32,
    /// Marker appended to a truncated caption
    pub ellipsis: String,
    /// Text placed before the caption's title
    pub caption_prefix: String,
    /// Distance from the standalone time's baseline to the footer band
    pub standalone_time_gap: u32,
    /// Whether to draw the title/author caption at all
    pub show_caption: bool,
    /// Whether to emit layout guides for debugging
    pub debug_guides: bool,
    /// Spacing of the debug grid in pixels
    pub grid_spacing: u32,
}

impl LayoutConfig {
    pub fn line_height(&self, font_size: u32) -> u32 {
        calculate_line_height(font_size, self.leading)
    }

    pub fn with_caption(mut self, show_caption: bool) -> Self {
        self.show_caption = show_caption;
        self
    }

    pub fn with_debug_guides(mut self, debug_guides: bool) -> Self {
        self.debug_guides = debug_guides;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            leading: DEFAULT_LEADING,
            target_usage: 0.85,
            min_line_count: 3,
            caption_scale: 0.5,
            accent_scale: 1.2,
            ellipsis: "…".to_string(),
            caption_prefix: "—".to_string(),
            standalone_time_gap: 20,
            show_caption: true,
            debug_guides: false,
            grid_spacing: 100,
        }
    }
}

/// Everything the engine needs besides the quote and the metrics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub geometry: CanvasGeometry,
    pub fonts: FontSizes,
    pub layout: LayoutConfig,
}

impl EngineSettings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a file.
    ///
    /// A missing file yields the defaults. So does a file that fails to
    /// parse, after logging a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match Self::from_json(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse settings file {}, using defaults: {}",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save settings as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
