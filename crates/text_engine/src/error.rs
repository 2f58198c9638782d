//! Error types for text engine

use crate::FontRole;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TextError {
    #[error("No font loaded for role {0}")]
    FontNotLoaded(FontRole),

    #[error("Unsupported glyph {ch:?} in {role} font")]
    UnsupportedGlyph { ch: char, role: FontRole },

    #[error("Invalid font data: {0}")]
    InvalidFontData(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
