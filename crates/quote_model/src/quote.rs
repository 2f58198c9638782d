//! Quote records

use crate::{QuoteError, Rating, Result};
use serde::{Deserialize, Serialize};

/// A literary quote for one time of day.
///
/// `display_time` is the phrase inside `quote` that names the time (for
/// example "ten o'clock"); the renderer highlights it when it can find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuoteRecord")]
pub struct QuoteRecord {
    /// Time of day this quote belongs to, as `HH:MM`
    pub time_key: String,
    /// The time phrase as it appears in the quote
    pub display_time: String,
    /// Quote body
    pub quote: String,
    /// Title of the work
    pub title: String,
    /// Author of the work
    pub author: String,
    /// Content rating
    pub rating: Rating,
}

impl QuoteRecord {
    /// Create a new quote record, validating the time key
    pub fn new(
        time_key: impl Into<String>,
        display_time: impl Into<String>,
        quote: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self> {
        let time_key = time_key.into();
        if !is_valid_time_key(&time_key) {
            return Err(QuoteError::InvalidTimeKey(time_key));
        }

        Ok(Self {
            time_key,
            display_time: display_time.into(),
            quote: quote.into(),
            title: title.into(),
            author: author.into(),
            rating: Rating::Sfw,
        })
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// Hour and minute of the time key
    pub fn hour_minute(&self) -> Option<(u8, u8)> {
        parse_time_key(&self.time_key)
    }

    /// Whether the record has both a title and an author to credit
    pub fn has_attribution(&self) -> bool {
        !self.title.trim().is_empty() && !self.author.trim().is_empty()
    }
}

/// Quote record as read from the corpus, before the time key is checked
#[derive(Deserialize)]
struct RawQuoteRecord {
    time_key: String,
    display_time: String,
    quote: String,
    title: String,
    author: String,
    #[serde(default)]
    rating: Rating,
}

impl TryFrom<RawQuoteRecord> for QuoteRecord {
    type Error = QuoteError;

    fn try_from(raw: RawQuoteRecord) -> Result<Self> {
        Ok(QuoteRecord::new(
            raw.time_key,
            raw.display_time,
            raw.quote,
            raw.title,
            raw.author,
        )?
        .with_rating(raw.rating))
    }
}

/// Check that a key is a 24-hour `HH:MM` time
pub fn is_valid_time_key(key: &str) -> bool {
    parse_time_key(key).is_some()
}

fn parse_time_key(key: &str) -> Option<(u8, u8)> {
    let (hh, mm) = key.split_once(':')?;
    if hh.len() != 2 || mm.len() != 2 {
        return None;
    }
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u8 = hh.parse().ok()?;
    let minute: u8 = mm.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}
