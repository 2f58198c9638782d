//! Render Model - Render plan to plane scene conversion
//!
//! This crate flattens a render plan into one draw list per panel bitmap,
//! with every item at an absolute canvas position.

mod converter;
mod render_item;

pub use converter::*;
pub use render_item::*;
