//! Text metric calculations

use crate::{FontRole, Result};
use unicode_segmentation::UnicodeSegmentation;

/// Leading factor applied to the font size to get a line height
pub const DEFAULT_LEADING: f32 = 1.2;

/// Average advance of a glyph as a fraction of the em size
pub const DEFAULT_ADVANCE_RATIO: f32 = 0.6;

/// Text measurement capability.
///
/// Implementations must be deterministic: the same role, size and text always
/// measure the same. Render calls may share one implementation across
/// threads, in which case it must also be `Sync`.
pub trait TextMetrics {
    /// Advance width of `text` set in the `role` font at `font_size` pixels
    fn measure(&self, role: FontRole, font_size: u32, text: &str) -> Result<f32>;

    /// Line height for a font size
    fn line_height(&self, font_size: u32) -> u32 {
        calculate_line_height(font_size, DEFAULT_LEADING)
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn measure(&self, role: FontRole, font_size: u32, text: &str) -> Result<f32> {
        (**self).measure(role, font_size, text)
    }

    fn line_height(&self, font_size: u32) -> u32 {
        (**self).line_height(font_size)
    }
}

/// Calculate line height from a font size and a leading factor
pub fn calculate_line_height(font_size: u32, leading: f32) -> u32 {
    (font_size as f32 * leading).round() as u32
}

/// Calculate text width (simple approximation)
pub fn estimate_text_width(text: &str, font_size: u32, advance_ratio: f32) -> f32 {
    text.graphemes(true).count() as f32 * font_size as f32 * advance_ratio
}

/// Fixed-advance metrics: every grapheme is `advance_ratio` em wide.
///
/// Never fails. Useful for previews and as a stand-in for a font backend in
/// tests, since widths are easy to compute by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMetrics {
    advance_ratio: f32,
}

impl HeuristicMetrics {
    pub fn new(advance_ratio: f32) -> Self {
        Self { advance_ratio }
    }

    pub fn advance_ratio(&self) -> f32 {
        self.advance_ratio
    }
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_RATIO)
    }
}

impl TextMetrics for HeuristicMetrics {
    fn measure(&self, _role: FontRole, font_size: u32, text: &str) -> Result<f32> {
        Ok(estimate_text_width(text, font_size, self.advance_ratio))
    }
}
