//! Time highlighting
//!
//! The time phrase is searched for case-insensitively in the wrapped quote.
//! Lines touching the match are split into runs so the phrase can be drawn in
//! the accent plane at a larger size while the rest stays in the normal plane.

use crate::{LineLayout, Plane, Result, SizeCandidates, StyledRun};
use text_engine::{calculate_line_height, TextMetrics};

/// Styled lines for a wrapped quote
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightResult {
    pub lines: Vec<LineLayout>,
    /// Set when the time was not found in the quote
    pub standalone_time: Option<StyledRun>,
}

impl HighlightResult {
    pub fn is_highlighted(&self) -> bool {
        self.lines.iter().any(LineLayout::has_accent)
    }
}

/// Accent size for a quote size: the smallest accent candidate at least
/// `scale` times the quote size, never smaller than the quote size itself
pub fn accent_size_for(normal_size: u32, accent_sizes: &SizeCandidates, scale: f32) -> u32 {
    // f32 products like 40 * 1.2 land a hair above the integer
    let target = (normal_size as f64 * scale as f64 - 1e-4).ceil().max(0.0) as u32;
    accent_sizes.smallest_at_least(target).max(normal_size)
}

/// Splits wrapped lines into normal and accent runs
pub struct HighlightSplitter<'a, M: ?Sized> {
    metrics: &'a M,
    /// Line spacing used to center accent runs; the metrics' own when unset
    leading: Option<f32>,
}

impl<'a, M: TextMetrics + ?Sized> HighlightSplitter<'a, M> {
    pub fn new(metrics: &'a M) -> Self {
        Self {
            metrics,
            leading: None,
        }
    }

    /// Center accent runs using the line spacing the quote is laid out with
    pub fn with_leading(mut self, leading: f32) -> Self {
        self.leading = Some(leading);
        self
    }

    fn line_height(&self, font_size: u32) -> u32 {
        match self.leading {
            Some(leading) => calculate_line_height(font_size, leading),
            None => self.metrics.line_height(font_size),
        }
    }

    /// Split `wrapped_lines` around the first occurrence of `time_string`.
    ///
    /// When the time is not found, each line becomes one normal run and the
    /// time is returned as a standalone accent run for the caller to place.
    pub fn split(
        &self,
        wrapped_lines: &[String],
        time_string: &str,
        normal_size: u32,
        accent_size: u32,
    ) -> Result<HighlightResult> {
        // line breaks count as one space so a phrase wrapped across lines
        // still matches
        let joined = wrapped_lines.join(" ");
        let span = find_ignore_case(&joined, time_string);

        let accent_offset = if accent_size == normal_size {
            0.0
        } else {
            let normal_height = self.line_height(normal_size) as f32;
            let accent_height = self.line_height(accent_size) as f32;
            -(accent_height - normal_height) / 2.0
        };

        let Some((start, end)) = span else {
            tracing::debug!("Time {:?} not found in quote", time_string);
            let lines = wrapped_lines
                .iter()
                .map(|line| {
                    let run = self.run(Plane::Normal, line, normal_size, 0.0, 0.0)?;
                    Ok(LineLayout::new(vec![run]))
                })
                .collect::<Result<Vec<_>>>()?;

            let standalone_time = if time_string.trim().is_empty() {
                None
            } else {
                Some(self.run(Plane::Accent, time_string, accent_size, 0.0, 0.0)?)
            };

            return Ok(HighlightResult {
                lines,
                standalone_time,
            });
        };

        tracing::debug!(
            "Time {:?} found in quote at {}..{}",
            time_string,
            start,
            end
        );

        let mut lines = Vec::with_capacity(wrapped_lines.len());
        let mut pos = 0;
        for line in wrapped_lines {
            let line_end = pos + line.len();
            let mut runs = Vec::new();

            if start >= pos && start <= line_end {
                // match starts here
                let time_start = start - pos;
                let time_end = end.min(line_end) - pos;
                let mut x = 0.0;
                self.push_run(&mut runs, Plane::Normal, &line[..time_start], normal_size, &mut x, 0.0)?;
                self.push_run(&mut runs, Plane::Accent, &line[time_start..time_end], accent_size, &mut x, accent_offset)?;
                self.push_run(&mut runs, Plane::Normal, &line[time_end..], normal_size, &mut x, 0.0)?;
            } else if start < pos && pos < end {
                // match continues from the previous line
                let time_end = end.min(line_end) - pos;
                let mut x = 0.0;
                self.push_run(&mut runs, Plane::Accent, &line[..time_end], accent_size, &mut x, accent_offset)?;
                self.push_run(&mut runs, Plane::Normal, &line[time_end..], normal_size, &mut x, 0.0)?;
            }

            if runs.is_empty() {
                runs.push(self.run(Plane::Normal, line, normal_size, 0.0, 0.0)?);
            }

            lines.push(LineLayout::new(runs));
            pos = line_end + 1;
        }

        Ok(HighlightResult {
            lines,
            standalone_time: None,
        })
    }

    fn run(
        &self,
        plane: Plane,
        text: &str,
        font_size: u32,
        x_advance_start: f32,
        y_offset: f32,
    ) -> Result<StyledRun> {
        let width = self.metrics.measure(plane.font_role(), font_size, text)?;
        Ok(StyledRun {
            plane,
            text: text.to_string(),
            font_size,
            x_advance_start,
            width,
            y_offset,
        })
    }

    fn push_run(
        &self,
        runs: &mut Vec<StyledRun>,
        plane: Plane,
        text: &str,
        font_size: u32,
        x: &mut f32,
        y_offset: f32,
    ) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let run = self.run(plane, text, font_size, *x, y_offset)?;
        *x = run.x_advance_end();
        runs.push(run);
        Ok(())
    }
}

/// Byte range of the first case-insensitive occurrence of `needle`.
///
/// Lowercasing can change byte lengths, so the search runs on a folded copy
/// and the match is mapped back to whole characters of `haystack`. A blank
/// needle never matches.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.trim().is_empty() {
        return None;
    }

    let mut folded = String::with_capacity(haystack.len());
    // source character span for every byte of `folded`
    let mut spans: Vec<(usize, usize)> = Vec::with_capacity(haystack.len());
    for (i, ch) in haystack.char_indices() {
        let source = (i, i + ch.len_utf8());
        for lower in ch.to_lowercase() {
            folded.push(lower);
            spans.resize(folded.len(), source);
        }
    }

    let folded_needle: String = needle.chars().flat_map(char::to_lowercase).collect();
    let start = folded.find(&folded_needle)?;
    let end = start + folded_needle.len();
    Some((spans[start].0, spans[end - 1].1))
}
