//! Canvas geometry

use crate::{LayoutError, Rect, Result};
use serde::{Deserialize, Serialize};

/// Pixel size of the panel and the blank margin kept on every side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl CanvasGeometry {
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Check the canvas is non-empty and the padding leaves room to draw
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let margins = self.padding as u64 * 2;
        if margins >= self.width as u64 || margins >= self.height as u64 {
            return Err(LayoutError::InvalidGeometry(format!(
                "padding {} leaves no room on a {}x{} canvas",
                self.padding, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Width between the left and right padding
    pub fn available_width(&self) -> u32 {
        self.width.saturating_sub(self.padding.saturating_mul(2))
    }

    /// Height left for the quote once the footer band is reserved
    pub fn available_height(&self, footer_height: u32) -> u32 {
        self.height
            .saturating_sub(self.padding.saturating_mul(2))
            .saturating_sub(footer_height)
    }

    /// Area the quote block is laid out in
    pub fn quote_area(&self, footer_height: u32) -> Rect {
        Rect::new(
            self.padding as f32,
            self.padding as f32,
            self.available_width() as f32,
            self.available_height(footer_height) as f32,
        )
    }

    /// Footer band at the bottom of the padded area
    pub fn footer_area(&self, footer_height: u32) -> Rect {
        let top = self.height.saturating_sub(self.padding.saturating_add(footer_height));
        Rect::new(
            self.padding as f32,
            top as f32,
            self.available_width() as f32,
            footer_height as f32,
        )
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self::new(960, 680, 40)
    }
}
