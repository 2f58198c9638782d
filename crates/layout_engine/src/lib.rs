//! Layout Engine - Font size search, word wrapping, time highlighting, and captions
//!
//! This crate turns a quote record into a render plan: the largest font size
//! that fills the canvas, the wrapped lines split into normal and accent
//! runs, and a caption fitted into the footer band.

mod caption;
mod config;
mod engine;
mod error;
mod geometry;
mod highlight;
mod render_plan;
mod size_selector;
mod sizes;
mod word_wrap;

pub use caption::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use highlight::*;
pub use render_plan::*;
pub use size_selector::*;
pub use sizes::*;
pub use word_wrap::*;
