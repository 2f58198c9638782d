//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Invalid canvas geometry: {0}")]
    InvalidGeometry(String),

    #[error("Font size set is empty")]
    EmptySizeSet,

    #[error("Invalid font size set: {0}")]
    InvalidSizeSet(String),

    #[error("Quote text is empty")]
    EmptyQuote,

    #[error("Text measurement failed: {0}")]
    Measurement(#[from] text_engine::TextError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
