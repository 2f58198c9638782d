//! Caption fitting
//!
//! The caption credits the work as "—{title}, {author}" on a single line in
//! the footer band. It starts at a fraction of the quote size, steps down
//! through the caption sizes while it is too wide, and is truncated with an
//! ellipsis as a last resort.

use crate::{CaptionLayout, LayoutConfig, Result, SizeCandidates};
use text_engine::{calculate_line_height, FontRole, TextMetrics};
use unicode_segmentation::UnicodeSegmentation;

/// Compose the caption text, or `None` unless both title and author are given
pub fn compose_caption(prefix: &str, title: &str, author: &str) -> Option<String> {
    let title = title.trim();
    let author = author.trim();
    if title.is_empty() || author.is_empty() {
        return None;
    }
    Some(format!("{}{}, {}", prefix, title, author))
}

/// Sizes and truncates the caption
pub struct CaptionFitter<'a, M: ?Sized> {
    metrics: &'a M,
    sizes: &'a SizeCandidates,
    config: &'a LayoutConfig,
}

impl<'a, M: TextMetrics + ?Sized> CaptionFitter<'a, M> {
    pub fn new(metrics: &'a M, sizes: &'a SizeCandidates, config: &'a LayoutConfig) -> Self {
        Self {
            metrics,
            sizes,
            config,
        }
    }

    /// Fit the caption for `title` and `author` into `max_width`.
    ///
    /// Returns `None` when there is nothing to credit.
    pub fn fit(
        &self,
        title: &str,
        author: &str,
        quote_font_size: u32,
        max_width: f32,
    ) -> Result<Option<CaptionLayout>> {
        match compose_caption(&self.config.caption_prefix, title, author) {
            Some(text) => Ok(Some(self.fit_text(&text, quote_font_size, max_width)?)),
            None => Ok(None),
        }
    }

    /// Fit already composed caption text into `max_width`
    pub fn fit_text(&self, text: &str, quote_font_size: u32, max_width: f32) -> Result<CaptionLayout> {
        let initial = (quote_font_size as f32 * self.config.caption_scale).round() as u32;
        let mut size = self.sizes.snap_down(initial);
        let mut width = self.measure(size, text)?;

        while width > max_width {
            let Some(smaller) = self.sizes.next_smaller(size) else {
                break;
            };
            size = smaller;
            width = self.measure(size, text)?;
            tracing::debug!(
                "Reduced caption size to {}px (width {}px, max {}px)",
                size,
                width,
                max_width
            );
        }

        let line_height = calculate_line_height(size, self.config.leading);
        if width <= max_width {
            return Ok(CaptionLayout {
                text: text.to_string(),
                font_size: size,
                fits: true,
                truncated: false,
                width,
                line_height,
            });
        }

        tracing::info!(
            "Caption too wide even at {}px, truncating with ellipsis",
            size
        );
        let ellipsis = self.config.ellipsis.as_str();
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        for keep in (0..graphemes.len()).rev() {
            let candidate = format!("{}{}", graphemes[..keep].concat(), ellipsis);
            let candidate_width = self.measure(size, &candidate)?;
            if candidate_width <= max_width {
                tracing::debug!("Truncated caption to {:?}", candidate);
                return Ok(CaptionLayout {
                    text: candidate,
                    font_size: size,
                    fits: true,
                    truncated: true,
                    width: candidate_width,
                    line_height,
                });
            }
        }

        // not even the ellipsis fits; still hand it over to be drawn
        tracing::warn!(
            "Caption ellipsis does not fit in {}px at {}px",
            max_width,
            size
        );
        Ok(CaptionLayout {
            text: ellipsis.to_string(),
            font_size: size,
            fits: false,
            truncated: true,
            width: self.measure(size, ellipsis)?,
            line_height,
        })
    }

    fn measure(&self, size: u32, text: &str) -> Result<f32> {
        Ok(self.metrics.measure(FontRole::Caption, size, text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use text_engine::HeuristicMetrics;

    fn fitter<'a>(
        metrics: &'a HeuristicMetrics,
        sizes: &'a SizeCandidates,
        config: &'a LayoutConfig,
    ) -> CaptionFitter<'a, HeuristicMetrics> {
        CaptionFitter::new(metrics, sizes, config)
    }

    #[test]
    fn test_compose() {
        assert_eq!(
            compose_caption("—", "A Tale of Two Cities", "Charles Dickens").as_deref(),
            Some("—A Tale of Two Cities, Charles Dickens")
        );
        assert_eq!(compose_caption("—", "", "Charles Dickens"), None);
        assert_eq!(compose_caption("—", "Title", "  "), None);
    }

    #[test]
    fn test_no_caption_without_attribution() {
        let metrics = HeuristicMetrics::default();
        let sizes = SizeCandidates::default();
        let config = LayoutConfig::default();
        let caption = fitter(&metrics, &sizes, &config).fit("", "Anon", 80, 880.0).unwrap();
        assert!(caption.is_none());
    }

    #[test]
    fn test_half_quote_size_snapped_down() {
        let metrics = HeuristicMetrics::default();
        let sizes = SizeCandidates::default();
        let config = LayoutConfig::default();
        let fitter = fitter(&metrics, &sizes, &config);

        // 76 * 0.5 = 38, not a candidate, so 36
        let caption = fitter.fit("Title", "Author", 76, 880.0).unwrap().unwrap();
        assert_eq!(caption.font_size, 36);
        assert!(caption.fits);
        assert!(!caption.truncated);
        assert_eq!(caption.text, "—Title, Author");
        assert_eq!(caption.line_height, 43);

        // 20 * 0.5 = 10, below every candidate, so the smallest
        let caption = fitter.fit("Title", "Author", 20, 880.0).unwrap().unwrap();
        assert_eq!(caption.font_size, 16);
    }

    #[test]
    fn test_steps_down_until_it_fits() {
        let metrics = HeuristicMetrics::new(1.0);
        let sizes = SizeCandidates::new(vec![40, 30, 20, 10]).unwrap();
        let config = LayoutConfig::default();
        let fitter = fitter(&metrics, &sizes, &config);

        // "—ab, cd" is 7 graphemes: 280px at 40, 210 at 30, 140 at 20
        let caption = fitter.fit("ab", "cd", 80, 150.0).unwrap().unwrap();
        assert_eq!(caption.font_size, 20);
        assert_eq!(caption.width, 140.0);
        assert!(caption.fits);
        assert!(!caption.truncated);
    }

    #[test]
    fn test_truncates_at_smallest_size() {
        let metrics = HeuristicMetrics::default();
        let sizes = SizeCandidates::default();
        let config = LayoutConfig::default();
        let fitter = fitter(&metrics, &sizes, &config);

        let text = "—Very Long Title Exceeding The Canvas Width By A Lot, Some Author Name";
        // 71 graphemes * 16 * 0.6 = 681.6px, so squeeze into 300px
        let caption = fitter.fit_text(text, 100, 300.0).unwrap();
        assert_eq!(caption.font_size, 16);
        assert!(caption.fits);
        assert!(caption.truncated);
        assert!(caption.text.ends_with('…'));
        assert!(caption.width <= 300.0);
        // 70 graphemes; 30 of them plus the ellipsis is 297.6px
        assert_eq!(caption.text.graphemes(true).count(), 31);
    }

    #[test]
    fn test_ellipsis_that_does_not_fit() {
        let metrics = HeuristicMetrics::default();
        let sizes = SizeCandidates::default();
        let config = LayoutConfig::default();
        let fitter = fitter(&metrics, &sizes, &config);

        let caption = fitter.fit("Title", "Author", 100, 5.0).unwrap().unwrap();
        assert!(!caption.fits);
        assert_eq!(caption.text, "…");
        assert_eq!(caption.font_size, 16);
    }

    #[test]
    fn test_caption_role_is_measured() {
        struct CaptionOnly;
        impl TextMetrics for CaptionOnly {
            fn measure(&self, role: FontRole, size: u32, text: &str) -> text_engine::Result<f32> {
                match role {
                    FontRole::Caption => Ok(text.chars().count() as f32 * size as f32),
                    other => Err(text_engine::TextError::FontNotLoaded(other)),
                }
            }
        }

        let sizes = SizeCandidates::default();
        let config = LayoutConfig::default();
        let caption = CaptionFitter::new(&CaptionOnly, &sizes, &config)
            .fit("T", "A", 40, 880.0)
            .unwrap()
            .unwrap();
        assert_eq!(caption.font_size, 20);
    }

    proptest! {
        #[test]
        fn prop_caption_never_wider_than_band(
            title in "[A-Za-z ]{1,60}",
            author in "[A-Za-z ]{1,40}",
            quote_size in 16u32..200,
            max_width in 1.0f32..900.0,
        ) {
            prop_assume!(!title.trim().is_empty() && !author.trim().is_empty());
            let metrics = HeuristicMetrics::default();
            let sizes = SizeCandidates::default();
            let config = LayoutConfig::default();

            let caption = fitter(&metrics, &sizes, &config)
                .fit(&title, &author, quote_size, max_width)
                .unwrap()
                .unwrap();

            if caption.fits {
                prop_assert!(caption.width <= max_width);
            } else {
                prop_assert_eq!(caption.text.as_str(), "…");
                prop_assert!(caption.width > max_width);
            }
            prop_assert!(sizes.contains(caption.font_size));
        }
    }
}
