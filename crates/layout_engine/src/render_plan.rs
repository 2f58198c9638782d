//! Render plan: the position-resolved output of a layout call
//!
//! A plan describes what to draw and where. It holds no pixels and no device
//! commands; a rasterizer draws each run into its plane.

use crate::CanvasGeometry;
use serde::{Deserialize, Serialize};
use text_engine::FontRole;

/// A point in canvas pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in canvas pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// One of the two monochrome bitmaps the panel composites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    #[default]
    Normal,
    Accent,
}

impl Plane {
    /// Font role used for text drawn in this plane
    pub fn font_role(&self) -> FontRole {
        match self {
            Plane::Normal => FontRole::Normal,
            Plane::Accent => FontRole::Accent,
        }
    }
}

/// Which point of the text a position refers to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    /// Top-left corner of the line box
    #[default]
    TopLeft,
    /// Right edge, vertically centered
    RightMiddle,
    /// Horizontal center, on the baseline
    MiddleBaseline,
}

/// A contiguous piece of one output line drawn in one plane at one size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledRun {
    pub plane: Plane,
    pub text: String,
    pub font_size: u32,
    /// Horizontal offset from the start of the line
    pub x_advance_start: f32,
    /// Measured advance width of `text`
    pub width: f32,
    /// Vertical shift from the line origin (negative is up)
    pub y_offset: f32,
}

impl StyledRun {
    pub fn x_advance_end(&self) -> f32 {
        self.x_advance_start + self.width
    }
}

/// Runs sharing one line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    /// Top-left corner of the line box
    pub origin: Point,
    pub runs: Vec<StyledRun>,
}

impl LineLayout {
    pub fn new(runs: Vec<StyledRun>) -> Self {
        Self {
            origin: Point::default(),
            runs,
        }
    }

    /// The line's text with all runs concatenated
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn width(&self) -> f32 {
        self.runs
            .iter()
            .map(StyledRun::x_advance_end)
            .fold(0.0, f32::max)
    }

    pub fn has_accent(&self) -> bool {
        self.runs.iter().any(|run| run.plane == Plane::Accent)
    }
}

/// The author/title caption after fitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionLayout {
    /// Caption text, ending in an ellipsis if it was truncated
    pub text: String,
    pub font_size: u32,
    /// False only when even the bare ellipsis is wider than the band
    pub fits: bool,
    pub truncated: bool,
    pub width: f32,
    pub line_height: u32,
}

/// An item pinned to a canvas position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchored<T> {
    pub item: T,
    pub position: Point,
    pub anchor: TextAnchor,
}

impl<T> Anchored<T> {
    pub fn new(item: T, position: Point, anchor: TextAnchor) -> Self {
        Self {
            item,
            position,
            anchor,
        }
    }
}

/// Complete layout of one quote on one canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub geometry: CanvasGeometry,
    pub quote_font_size: u32,
    pub accent_font_size: u32,
    pub line_height: u32,
    /// Height of the band reserved for the caption (0 without one)
    pub footer_height: u32,
    /// Share of the available height the quote block uses
    pub usage: f32,
    /// True when no size fit and the smallest one was used anyway
    pub fallback: bool,
    pub quote_lines: Vec<LineLayout>,
    pub caption: Option<Anchored<CaptionLayout>>,
    /// The time, when it could not be highlighted inside the quote
    pub standalone_time: Option<Anchored<StyledRun>>,
    pub debug_guides: bool,
}

impl RenderPlan {
    /// Whether the time was found and highlighted inside the quote
    pub fn time_highlighted(&self) -> bool {
        self.quote_lines.iter().any(LineLayout::has_accent)
    }

    /// Quote runs drawn into one plane, with their line origins
    pub fn runs_in(&self, plane: Plane) -> impl Iterator<Item = (Point, &StyledRun)> + '_ {
        self.quote_lines.iter().flat_map(move |line| {
            line.runs
                .iter()
                .filter(move |run| run.plane == plane)
                .map(move |run| (line.origin, run))
        })
    }

    /// The wrapped quote text, one line per entry
    pub fn quote_text(&self) -> Vec<String> {
        self.quote_lines.iter().map(LineLayout::text).collect()
    }

    /// Height of the laid-out quote block
    pub fn quote_block_height(&self) -> u32 {
        self.quote_lines.len() as u32 * self.line_height
    }
}
