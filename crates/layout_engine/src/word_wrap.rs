//! Greedy word wrapping
//!
//! Text is split on whitespace and words are added to the current line while
//! the line still fits. There is no hyphenation: a single word wider than the
//! line gets a line of its own and overflows it.

use crate::Result;
use serde::{Deserialize, Serialize};
use text_engine::{FontRole, TextMetrics};

/// Text wrapped at one font size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapResult {
    pub size: u32,
    /// Never empty
    pub lines: Vec<String>,
    pub line_height: u32,
}

impl WrapResult {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_height(&self) -> u32 {
        self.lines.len() as u32 * self.line_height
    }

    /// Lines joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Wraps text to a pixel width using a text measurement capability
pub struct WordWrapper<'a, M: ?Sized> {
    metrics: &'a M,
    role: FontRole,
}

impl<'a, M: TextMetrics + ?Sized> WordWrapper<'a, M> {
    /// Wrap measuring with the normal (quote body) font
    pub fn new(metrics: &'a M) -> Self {
        Self {
            metrics,
            role: FontRole::Normal,
        }
    }

    pub fn with_role(mut self, role: FontRole) -> Self {
        self.role = role;
        self
    }

    /// Wrap `text` into lines no wider than `max_width` at `font_size`.
    ///
    /// Original newlines are not preserved. Always returns at least one line,
    /// which is empty for blank input.
    pub fn wrap(&self, text: &str, font_size: u32, max_width: f32) -> Result<Vec<String>> {
        Ok(self.wrap_lines(text, font_size, max_width)?.lines)
    }

    /// Like [`wrap`](Self::wrap), also reporting whether a word overflowed
    pub fn wrap_lines(&self, text: &str, font_size: u32, max_width: f32) -> Result<WrappedLines> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut overflow = false;

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            let width = self.metrics.measure(self.role, font_size, &candidate)?;
            if width <= max_width {
                current = candidate;
            } else if current.is_empty() {
                tracing::trace!(
                    "Word {:?} is {}px wide, over {}px at size {}",
                    word,
                    width,
                    max_width,
                    font_size
                );
                overflow = true;
                current = candidate;
            } else {
                let finished = std::mem::take(&mut current);
                lines.push(finished);
                let width = self.metrics.measure(self.role, font_size, word)?;
                overflow |= width > max_width;
                current = word.to_string();
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }

        Ok(WrappedLines { lines, overflow })
    }
}

/// Lines from one wrap, plus whether any single word was wider than the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLines {
    pub lines: Vec<String>,
    pub overflow: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use text_engine::HeuristicMetrics;

    // 1 grapheme = 10px at size 10
    fn metrics() -> HeuristicMetrics {
        HeuristicMetrics::new(1.0)
    }

    #[test]
    fn test_wraps_greedily() {
        let metrics = metrics();
        let wrapper = WordWrapper::new(&metrics);
        let lines = wrapper
            .wrap("the quick brown fox jumps", 10, 110.0)
            .unwrap();
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_exact_fit_is_kept() {
        let metrics = metrics();
        let wrapper = WordWrapper::new(&metrics);
        let lines = wrapper.wrap("abc def", 10, 70.0).unwrap();
        assert_eq!(lines, vec!["abc def"]);
    }

    #[test]
    fn test_empty_input_gives_one_line() {
        let metrics = metrics();
        let wrapper = WordWrapper::new(&metrics);
        assert_eq!(wrapper.wrap("", 10, 100.0).unwrap(), vec![""]);
        assert_eq!(wrapper.wrap("   \n\t ", 10, 100.0).unwrap(), vec![""]);
    }

    #[test]
    fn test_newlines_are_not_preserved() {
        let metrics = metrics();
        let wrapper = WordWrapper::new(&metrics);
        let lines = wrapper.wrap("one\ntwo\n\nthree", 10, 1000.0).unwrap();
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn test_overlong_word_gets_its_own_line() {
        let metrics = metrics();
        let wrapper = WordWrapper::new(&metrics);

        let lines = wrapper.wrap("supercalifragilistic", 10, 50.0).unwrap();
        assert_eq!(lines, vec!["supercalifragilistic"]);

        let lines = wrapper.wrap("a supercalifragilistic b", 10, 50.0).unwrap();
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_overflow_is_reported() {
        let metrics = metrics();
        let wrapper = WordWrapper::new(&metrics);

        let wrapped = wrapper.wrap_lines("a supercalifragilistic b", 10, 50.0).unwrap();
        assert!(wrapped.overflow);

        let wrapped = wrapper.wrap_lines("supercalifragilistic", 10, 50.0).unwrap();
        assert!(wrapped.overflow);

        let wrapped = wrapper.wrap_lines("short words only", 10, 50.0).unwrap();
        assert!(!wrapped.overflow);
        assert_eq!(wrapped.lines, vec!["short", "words", "only"]);
    }

    #[test]
    fn test_measurement_failure_propagates() {
        struct Failing;
        impl TextMetrics for Failing {
            fn measure(&self, role: FontRole, _: u32, _: &str) -> text_engine::Result<f32> {
                Err(text_engine::TextError::FontNotLoaded(role))
            }
        }

        let wrapper = WordWrapper::new(&Failing);
        assert!(matches!(
            wrapper.wrap("hello", 10, 100.0),
            Err(crate::LayoutError::Measurement(_))
        ));
        // Nothing to measure, nothing to fail
        assert_eq!(wrapper.wrap("", 10, 100.0).unwrap(), vec![""]);
    }

    proptest! {
        #[test]
        fn prop_lines_fit_when_words_fit(
            words in prop::collection::vec("[a-z]{1,8}", 0..30),
            size in 8u32..64,
            extra in 0.0f32..400.0,
        ) {
            let metrics = HeuristicMetrics::default();
            let wrapper = WordWrapper::new(&metrics);
            let text = words.join(" ");

            let widest = words
                .iter()
                .map(|w| metrics.measure(FontRole::Normal, size, w).unwrap())
                .fold(0.0, f32::max);
            let max_width = widest + extra;

            let lines = wrapper.wrap(&text, size, max_width).unwrap();
            for line in &lines {
                prop_assert!(metrics.measure(FontRole::Normal, size, line).unwrap() <= max_width);
            }
        }

        #[test]
        fn prop_wrapping_keeps_every_word(
            text in "[a-z \n]{0,120}",
            size in 8u32..64,
            max_width in 1.0f32..600.0,
        ) {
            let metrics = HeuristicMetrics::default();
            let wrapper = WordWrapper::new(&metrics);

            let lines = wrapper.wrap(&text, size, max_width).unwrap();
            prop_assert!(!lines.is_empty());

            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rejoined, original);
        }
    }
}
