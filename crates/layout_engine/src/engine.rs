//! Layout orchestration
//!
//! The caption's height depends on the quote size and the quote's room
//! depends on the caption's height. The engine breaks the cycle with two
//! passes: an optimistic size search without a footer sizes the caption, then
//! a second search runs with the caption's real footer band reserved.

use crate::{
    accent_size_for, compose_caption, Anchored, CanvasGeometry, CaptionFitter, CaptionLayout,
    EngineSettings, FontSizeSelector, FontSizes, HighlightSplitter, LayoutConfig, LayoutError,
    LineLayout, Point, RenderPlan, Result, SelectionParams, TextAnchor,
};
use quote_model::QuoteRecord;
use text_engine::TextMetrics;

/// Lays out quote records for a canvas
pub struct LayoutEngine<'a, M: ?Sized> {
    metrics: &'a M,
    fonts: FontSizes,
    config: LayoutConfig,
}

impl<'a, M: TextMetrics + ?Sized> LayoutEngine<'a, M> {
    pub fn new(metrics: &'a M, fonts: FontSizes, config: LayoutConfig) -> Self {
        Self {
            metrics,
            fonts,
            config,
        }
    }

    /// Engine with the default size sets and tuning
    pub fn with_defaults(metrics: &'a M) -> Self {
        Self::new(metrics, FontSizes::default(), LayoutConfig::default())
    }

    /// Engine using the font sizes and tuning from loaded settings
    pub fn from_settings(metrics: &'a M, settings: &EngineSettings) -> Self {
        Self::new(metrics, settings.fonts.clone(), settings.layout.clone())
    }

    pub fn fonts(&self) -> &FontSizes {
        &self.fonts
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out `record` on a canvas of the given geometry.
    ///
    /// Oversized quotes and captions degrade (overflow, truncation) instead
    /// of failing. Errors are reserved for invalid input and for metrics that
    /// cannot measure the text.
    pub fn layout(&self, record: &QuoteRecord, geometry: &CanvasGeometry) -> Result<RenderPlan> {
        geometry.validate()?;
        if record.quote.trim().is_empty() {
            return Err(LayoutError::EmptyQuote);
        }

        tracing::debug!(
            "Laying out quote for {} on {}x{}px canvas",
            record.time_key,
            geometry.width,
            geometry.height
        );

        let available_width = geometry.available_width() as f32;
        let selector = FontSizeSelector::new(
            self.metrics,
            &self.fonts.normal,
            SelectionParams::from(&self.config),
        );

        let caption = self.fit_caption(record, geometry, &selector)?;
        let footer_height = caption.as_ref().map_or(0, |caption| caption.line_height);

        let selection = selector.select(
            &record.quote,
            available_width,
            geometry.available_height(footer_height),
        )?;
        let quote_font_size = selection.size();
        let line_height = selection.wrap.line_height;
        let accent_font_size =
            accent_size_for(quote_font_size, &self.fonts.accent, self.config.accent_scale);

        let highlight = HighlightSplitter::new(self.metrics)
            .with_leading(self.config.leading)
            .split(
                &selection.wrap.lines,
                &record.display_time,
                quote_font_size,
                accent_font_size,
            )?;

        tracing::info!(
            "Quote laid out at {}px in {} lines ({:.1}% usage, time {})",
            quote_font_size,
            selection.wrap.line_count(),
            selection.usage * 100.0,
            if highlight.is_highlighted() {
                "highlighted"
            } else {
                "standalone"
            }
        );

        let padding = geometry.padding as f32;
        let quote_lines = highlight
            .lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| LineLayout {
                origin: Point::new(padding, padding + index as f32 * line_height as f32),
                ..line
            })
            .collect();

        let caption = caption.map(|caption| {
            Anchored::new(
                caption,
                caption_position(geometry, footer_height),
                TextAnchor::RightMiddle,
            )
        });

        let standalone_time = highlight.standalone_time.map(|run| {
            Anchored::new(
                run,
                self.standalone_time_position(geometry, footer_height),
                TextAnchor::MiddleBaseline,
            )
        });

        Ok(RenderPlan {
            geometry: *geometry,
            quote_font_size,
            accent_font_size,
            line_height,
            footer_height,
            usage: selection.usage,
            fallback: selection.fallback,
            quote_lines,
            caption,
            standalone_time,
            debug_guides: self.config.debug_guides,
        })
    }

    /// First pass: size the caption against a provisional quote size
    fn fit_caption(
        &self,
        record: &QuoteRecord,
        geometry: &CanvasGeometry,
        selector: &FontSizeSelector<'_, M>,
    ) -> Result<Option<CaptionLayout>> {
        if !self.config.show_caption {
            return Ok(None);
        }
        let Some(text) = compose_caption(&self.config.caption_prefix, &record.title, &record.author)
        else {
            tracing::debug!("No caption for {}", record.time_key);
            return Ok(None);
        };

        let available_width = geometry.available_width() as f32;
        let provisional = selector.select(
            &record.quote,
            available_width,
            geometry.available_height(0),
        )?;
        tracing::debug!("Provisional quote size {}px", provisional.size());

        let fitter = CaptionFitter::new(self.metrics, &self.fonts.caption, &self.config);
        let caption = fitter.fit_text(&text, provisional.size(), available_width)?;
        Ok(Some(caption))
    }

    fn standalone_time_position(&self, geometry: &CanvasGeometry, footer_height: u32) -> Point {
        let y = geometry
            .height
            .saturating_sub(geometry.padding)
            .saturating_sub(footer_height)
            .saturating_sub(self.config.standalone_time_gap);
        Point::new(geometry.width as f32 / 2.0, y as f32)
    }
}

/// Right edge of the padded area, centered in the footer band
fn caption_position(geometry: &CanvasGeometry, footer_height: u32) -> Point {
    let x = geometry.width.saturating_sub(geometry.padding);
    let y = geometry
        .height
        .saturating_sub(geometry.padding)
        .saturating_sub(footer_height / 2);
    Point::new(x as f32, y as f32)
}
