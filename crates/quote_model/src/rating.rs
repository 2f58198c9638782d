//! Content ratings and rating-based filtering

use crate::{QuoteError, QuoteRecord};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Content rating of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Safe for work (also assumed when the corpus omits the column)
    #[default]
    Sfw,
    /// Not safe for work
    Nsfw,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Sfw => "sfw",
            Rating::Nsfw => "nsfw",
        }
    }

    /// Parse a corpus column, treating an empty column as `Sfw`
    pub fn from_column(column: &str) -> crate::Result<Self> {
        let column = column.trim();
        if column.is_empty() {
            return Ok(Rating::Sfw);
        }
        column.parse()
    }
}

impl FromStr for Rating {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sfw" => Ok(Rating::Sfw),
            "nsfw" => Ok(Rating::Nsfw),
            _ => Err(QuoteError::InvalidRating(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which ratings a quote store may hand to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFilter {
    #[default]
    All,
    #[serde(alias = "sfw")]
    SfwOnly,
    #[serde(alias = "nsfw")]
    NsfwOnly,
}

impl ContentFilter {
    /// Check whether a quote passes this filter
    pub fn allows(&self, quote: &QuoteRecord) -> bool {
        match self {
            ContentFilter::All => true,
            ContentFilter::SfwOnly => quote.rating == Rating::Sfw,
            ContentFilter::NsfwOnly => quote.rating == Rating::Nsfw,
        }
    }

    /// Keep only the candidates that pass this filter
    pub fn filter<'a>(&self, candidates: &'a [QuoteRecord]) -> Vec<&'a QuoteRecord> {
        candidates.iter().filter(|q| self.allows(q)).collect()
    }

    /// Like [`filter`](Self::filter), but hands back every candidate when
    /// none pass, so a minute with only other-rated quotes still shows one
    pub fn filter_or_all<'a>(&self, candidates: &'a [QuoteRecord]) -> Vec<&'a QuoteRecord> {
        let passing = self.filter(candidates);
        if passing.is_empty() {
            candidates.iter().collect()
        } else {
            passing
        }
    }
}
