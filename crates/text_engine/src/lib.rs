//! Text Engine - Text measurement for the quote layout engine
//!
//! The layout engine never rasterizes; all it needs is the advance width of
//! a candidate string at a given size. This crate defines that capability and
//! ships a few implementations of it.
//!
//! # Modules
//!
//! - `font`: Font roles (normal, accent, caption)
//! - `metrics`: The `TextMetrics` capability and a heuristic implementation
//! - `shaper`: Metrics backed by real font faces, shaped with rustybuzz
//! - `cache`: A thread-safe memo in front of any `TextMetrics`

mod cache;
mod error;
mod font;
mod metrics;
mod shaper;

pub use cache::*;
pub use error::*;
pub use font::*;
pub use metrics::*;
pub use shaper::*;
