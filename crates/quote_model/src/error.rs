//! Error types for quote records

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Invalid time key (expected HH:MM): {0}")]
    InvalidTimeKey(String),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
