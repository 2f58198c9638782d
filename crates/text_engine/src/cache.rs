//! Measurement cache
//!
//! Shared across render calls. The layout engine only ever reads through it;
//! entries are filled on first measurement and never change afterwards.

use crate::{FontRole, Result, TextMetrics};
use std::collections::HashMap;
use std::sync::RwLock;

type CacheKey = (FontRole, u32, String);

/// Memoizes successful measurements of an inner `TextMetrics`.
///
/// Failed measurements are not cached, so a fixed font backend is retried on
/// the next call.
pub struct CachedMetrics<M> {
    inner: M,
    widths: RwLock<HashMap<CacheKey, f32>>,
}

impl<M: TextMetrics> CachedMetrics<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            widths: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of cached widths
    pub fn len(&self) -> usize {
        self.widths.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached width
    pub fn clear(&self) {
        self.widths
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl<M: TextMetrics> TextMetrics for CachedMetrics<M> {
    fn measure(&self, role: FontRole, font_size: u32, text: &str) -> Result<f32> {
        let key = (role, font_size, text.to_string());
        if let Some(&width) = self
            .widths
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
        {
            return Ok(width);
        }

        let width = self.inner.measure(role, font_size, text)?;
        self.widths
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, width);
        Ok(width)
    }

    fn line_height(&self, font_size: u32) -> u32 {
        self.inner.line_height(font_size)
    }
}
