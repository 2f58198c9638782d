//! Scene item types

use layout_engine::{Plane, Rect, TextAnchor};
use serde::{Deserialize, Serialize};
use text_engine::FontRole;

/// A glyph run at an absolute canvas position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRun {
    /// The text to render
    pub text: String,
    /// Face to draw with
    pub role: FontRole,
    /// Font size in pixels
    pub font_size: u32,
    /// Position of the anchor point
    pub x: f32,
    pub y: f32,
    pub anchor: TextAnchor,
}

/// Render item types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderItem {
    /// A glyph run (text)
    GlyphRun(GlyphRun),
    /// An outlined rectangle
    Rectangle { bounds: Rect, stroke_width: f32 },
    /// A line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
}

impl RenderItem {
    pub fn as_glyph_run(&self) -> Option<&GlyphRun> {
        match self {
            RenderItem::GlyphRun(run) => Some(run),
            _ => None,
        }
    }
}

/// Draw lists for the two bitmaps of one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneScene {
    pub width: u32,
    pub height: u32,
    /// Items for the foreground bitmap
    pub normal: Vec<RenderItem>,
    /// Items for the accent bitmap
    pub accent: Vec<RenderItem>,
}

impl PlaneScene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            normal: Vec::new(),
            accent: Vec::new(),
        }
    }

    pub fn items(&self, plane: Plane) -> &[RenderItem] {
        match plane {
            Plane::Normal => &self.normal,
            Plane::Accent => &self.accent,
        }
    }

    pub fn push(&mut self, plane: Plane, item: RenderItem) {
        match plane {
            Plane::Normal => self.normal.push(item),
            Plane::Accent => self.accent.push(item),
        }
    }

    /// Text drawn into one plane, in drawing order
    pub fn glyph_runs(&self, plane: Plane) -> impl Iterator<Item = &GlyphRun> + '_ {
        self.items(plane).iter().filter_map(RenderItem::as_glyph_run)
    }

    /// Whether nothing is drawn into the plane, so its bitmap stays blank
    pub fn is_blank(&self, plane: Plane) -> bool {
        self.items(plane).is_empty()
    }
}
