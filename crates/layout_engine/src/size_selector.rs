//! Font size search
//!
//! Wrapped height does not grow smoothly with the font size: line breaks move
//! in jumps, so a smaller size can need more lines than a larger one. Instead
//! of solving for a size, the selector scans the candidate sizes from the
//! largest down and keeps the best fit.

use crate::{LayoutConfig, Result, SizeCandidates, WordWrapper, WrapResult};
use text_engine::{calculate_line_height, TextMetrics, DEFAULT_LEADING};

/// Knobs for the size search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionParams {
    /// A fit only beats an earlier one with at least this many lines
    pub min_line_count: usize,
    /// Usage above which the scan stops at the current size
    pub target_usage: f32,
    pub leading: f32,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            min_line_count: 3,
            target_usage: 0.85,
            leading: DEFAULT_LEADING,
        }
    }
}

impl From<&LayoutConfig> for SelectionParams {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            min_line_count: config.min_line_count,
            target_usage: config.target_usage,
            leading: config.leading,
        }
    }
}

/// Outcome of a size search
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSelection {
    pub wrap: WrapResult,
    /// Block height over available height; above 1.0 only for a fallback
    pub usage: f32,
    /// No size fit; the smallest one was used and the block overflows
    pub fallback: bool,
}

impl SizeSelection {
    pub fn size(&self) -> u32 {
        self.wrap.size
    }
}

/// Picks the quote font size
pub struct FontSizeSelector<'a, M: ?Sized> {
    wrapper: WordWrapper<'a, M>,
    sizes: &'a SizeCandidates,
    params: SelectionParams,
}

impl<'a, M: TextMetrics + ?Sized> FontSizeSelector<'a, M> {
    pub fn new(metrics: &'a M, sizes: &'a SizeCandidates, params: SelectionParams) -> Self {
        Self {
            wrapper: WordWrapper::new(metrics),
            sizes,
            params,
        }
    }

    /// Find the size that best fills `available_width` x `available_height`.
    ///
    /// A size is too large when the block is taller than the available height
    /// or when a single word is wider than the line. Among fitting sizes a
    /// higher usage wins, but only if it also reaches the minimum line count; the first fitting size is always recorded. The
    /// scan stops at the first size that reaches both the target usage and
    /// the minimum line count. If nothing fits, the smallest size is returned
    /// with `fallback` set rather than failing.
    pub fn select(
        &self,
        quote_text: &str,
        available_width: f32,
        available_height: u32,
    ) -> Result<SizeSelection> {
        tracing::debug!(
            "Selecting quote size for {}x{}px",
            available_width,
            available_height
        );

        let mut best: Option<(WrapResult, f32)> = None;
        let mut last: Option<WrapResult> = None;

        for size in self.sizes.iter() {
            let wrapped = self.wrapper.wrap_lines(quote_text, size, available_width)?;
            let lines = wrapped.lines;
            let line_height = calculate_line_height(size, self.params.leading);
            let wrap = WrapResult {
                size,
                lines,
                line_height,
            };
            let line_count = wrap.line_count();
            let total_height = wrap.total_height();

            if wrapped.overflow {
                tracing::trace!("Font size {}px too large (a word overflows the line)", size);
                last = Some(wrap);
                continue;
            }
            if available_height == 0 || total_height > available_height {
                tracing::trace!(
                    "Font size {}px too large (height {}px > available {}px)",
                    size,
                    total_height,
                    available_height
                );
                last = Some(wrap);
                continue;
            }

            let usage = total_height as f32 / available_height as f32;
            tracing::trace!(
                "Font size {}px fits: {} lines, {:.1}% usage",
                size,
                line_count,
                usage * 100.0
            );

            let better = match &best {
                None => true,
                Some((_, best_usage)) => {
                    usage > *best_usage && line_count >= self.params.min_line_count
                }
            };

            if usage > self.params.target_usage && line_count >= self.params.min_line_count {
                tracing::debug!(
                    "Selected font size {}px ({:.1}% usage, {} lines)",
                    size,
                    usage * 100.0,
                    line_count
                );
                return Ok(SizeSelection {
                    wrap,
                    usage,
                    fallback: false,
                });
            }

            if better {
                best = Some((wrap, usage));
            }
        }

        if let Some((wrap, usage)) = best {
            tracing::debug!(
                "Selected best font size {}px ({:.1}% usage)",
                wrap.size,
                usage * 100.0
            );
            return Ok(SizeSelection {
                wrap,
                usage,
                fallback: false,
            });
        }

        let smallest = self.sizes.smallest();
        let wrap = match last {
            Some(wrap) if wrap.size == smallest => wrap,
            _ => WrapResult {
                size: smallest,
                lines: self.wrapper.wrap(quote_text, smallest, available_width)?,
                line_height: calculate_line_height(smallest, self.params.leading),
            },
        };
        let usage = wrap.total_height() as f32 / available_height.max(1) as f32;
        tracing::info!(
            "No font size fits {}px; using smallest size {}px",
            available_height,
            smallest
        );

        Ok(SizeSelection {
            wrap,
            usage,
            fallback: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use text_engine::{FontRole, HeuristicMetrics};

    fn select(
        metrics: &HeuristicMetrics,
        sizes: &SizeCandidates,
        text: &str,
        width: f32,
        height: u32,
    ) -> SizeSelection {
        FontSizeSelector::new(metrics, sizes, SelectionParams::default())
            .select(text, width, height)
            .unwrap()
    }

    #[test]
    fn test_early_exit_prefers_larger_size() {
        // 10 graphemes per line at size 10 with a 100px line
        let metrics = HeuristicMetrics::new(1.0);
        let sizes = SizeCandidates::new(vec![10, 8]).unwrap();

        // Three lines of 10 glyphs at size 10: 3 * 12 = 36 of 40 = 90%
        let text = "aaaaaaaaaa bbbbbbbbbb cccccccccc";
        let selection = select(&metrics, &sizes, text, 100.0, 40);
        assert_eq!(selection.size(), 10);
        assert_eq!(selection.wrap.line_count(), 3);
        assert!(!selection.fallback);
        assert!((selection.usage - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_first_fit_kept_without_enough_lines() {
        let metrics = HeuristicMetrics::new(1.0);
        let sizes = SizeCandidates::new(vec![20, 10, 5]).unwrap();

        // One short line fits at every size; never reaches three lines, so the
        // first (largest) fit stays best.
        let selection = select(&metrics, &sizes, "hi", 1000.0, 100);
        assert_eq!(selection.size(), 20);
        assert_eq!(selection.wrap.lines, vec!["hi"]);
        assert!(!selection.fallback);
    }

    #[test]
    fn test_better_usage_needs_min_lines() {
        let metrics = HeuristicMetrics::new(1.0);
        let sizes = SizeCandidates::new(vec![30, 20, 10]).unwrap();

        // width 60: size 30 -> 2 glyphs/line, size 20 -> 3, size 10 -> 6.
        // "aa bb cc": size 30 = 3 lines * 36 = 108 > 100 (too big)
        //             size 20 = "aa" "bb" "cc" -> "aa bb" is 100px > 60, 3 lines * 24 = 72 -> 72%
        //             size 10 = "aa bb" "cc" -> 2 lines * 12 = 24 -> 24%
        let selection = select(&metrics, &sizes, "aa bb cc", 60.0, 100);
        assert_eq!(selection.size(), 20);
        assert_eq!(selection.wrap.line_count(), 3);
        assert!((selection.usage - 0.72).abs() < 1e-6);
    }

    #[test]
    fn test_fallback_to_smallest() {
        let metrics = HeuristicMetrics::new(1.0);
        let sizes = SizeCandidates::new(vec![40, 30, 20]).unwrap();

        let word = "x".repeat(500);
        let text = format!("{word} {word} {word} {word} {word}");
        let selection = select(&metrics, &sizes, &text, 100.0, 50);

        assert!(selection.fallback);
        assert_eq!(selection.size(), 20);
        assert_eq!(selection.wrap.line_count(), 5);
        assert!(selection.usage > 1.0);
    }

    #[test]
    fn test_unbroken_word_falls_back_with_one_line() {
        let metrics = HeuristicMetrics::default();
        let sizes = SizeCandidates::default();

        // 400 * 0.6 * 16 = 3840px, wider than the line at every size
        let word = "a".repeat(400);
        let selection = select(&metrics, &sizes, &word, 880.0, 600);

        assert_eq!(selection.wrap.lines, vec![word]);
        assert!(selection.fallback);
        assert_eq!(selection.size(), 16);
    }

    #[test]
    fn test_overflowing_word_pushes_size_down() {
        let metrics = HeuristicMetrics::new(1.0);
        let sizes = SizeCandidates::new(vec![20, 10]).unwrap();

        // "abcdefgh" is 160px at 20 and 80px at 10
        let selection = select(&metrics, &sizes, "abcdefgh", 100.0, 100);
        assert_eq!(selection.size(), 10);
        assert!(!selection.fallback);
    }

    #[test]
    fn test_single_long_word_takes_widest_fitting_size() {
        let metrics = HeuristicMetrics::default();
        let sizes = SizeCandidates::default();

        // 13 graphemes: 873.6px at 112, 904.8px at 116
        let selection = select(&metrics, &sizes, "Extraordinary", 880.0, 600);
        assert_eq!(selection.size(), 112);
        assert_eq!(selection.wrap.line_count(), 1);
        assert!(!selection.fallback);
    }

    #[test]
    fn test_zero_height_falls_back() {
        let metrics = HeuristicMetrics::default();
        let sizes = SizeCandidates::default();
        let selection = select(&metrics, &sizes, "a quote", 880.0, 0);
        assert!(selection.fallback);
        assert_eq!(selection.size(), 16);
    }

    #[test]
    fn test_params_from_config() {
        let config = LayoutConfig {
            min_line_count: 5,
            target_usage: 0.5,
            ..LayoutConfig::default()
        };
        let params = SelectionParams::from(&config);
        assert_eq!(params.min_line_count, 5);
        assert_eq!(params.target_usage, 0.5);
    }

    proptest! {
        #[test]
        fn prop_selection_fits_unless_fallback(
            words in prop::collection::vec("[a-z]{1,12}", 1..60),
            width in 200u32..1000,
            height in 50u32..800,
        ) {
            let metrics = HeuristicMetrics::default();
            let sizes = SizeCandidates::default();
            let text = words.join(" ");
            let selection = select(&metrics, &sizes, &text, width as f32, height);

            // recompute the block height independently of the selector
            let lines = WordWrapper::new(&metrics)
                .wrap(&text, selection.size(), width as f32)
                .unwrap();
            prop_assert_eq!(&lines, &selection.wrap.lines);
            let total = lines.len() as u32 * calculate_line_height(selection.size(), DEFAULT_LEADING);

            if selection.fallback {
                prop_assert_eq!(selection.size(), sizes.smallest());
            } else {
                prop_assert!(total <= height);
            }
            prop_assert!(sizes.contains(selection.size()));
            prop_assert!(metrics.measure(FontRole::Normal, selection.size(), "").is_ok());
        }

        #[test]
        fn prop_selection_is_idempotent(
            text in "[a-z ]{1,200}",
            width in 100u32..1000,
            height in 20u32..800,
        ) {
            let metrics = HeuristicMetrics::default();
            let sizes = SizeCandidates::default();
            let first = select(&metrics, &sizes, &text, width as f32, height);
            let second = select(&metrics, &sizes, &text, width as f32, height);
            prop_assert_eq!(first, second);
        }
    }
}
