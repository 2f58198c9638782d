//! Discrete font size sets
//!
//! Sizes are never computed freely: every size the engine picks comes from an
//! explicit, ordered set of candidates for the font role in question.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use text_engine::FontRole;

const DEFAULT_MIN_SIZE: u32 = 16;
const DEFAULT_MAX_SIZE: u32 = 200;
const DEFAULT_STEP: usize = 4;

/// A non-empty, strictly decreasing set of font sizes in pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct SizeCandidates {
    sizes: Vec<u32>,
}

impl SizeCandidates {
    /// Create a size set from sizes listed largest first
    pub fn new(sizes: Vec<u32>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(LayoutError::EmptySizeSet);
        }
        if sizes.contains(&0) {
            return Err(LayoutError::InvalidSizeSet("sizes must be positive".into()));
        }
        if sizes.windows(2).any(|pair| pair[0] <= pair[1]) {
            return Err(LayoutError::InvalidSizeSet(
                "sizes must be strictly decreasing".into(),
            ));
        }
        Ok(Self { sizes })
    }

    /// Every `step`-th size from `min` up to `max` (inclusive), largest first
    pub fn range(min: u32, max: u32, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(LayoutError::InvalidSizeSet("step must be positive".into()));
        }
        if min > max {
            return Err(LayoutError::EmptySizeSet);
        }
        let mut sizes: Vec<u32> = (min..=max).step_by(step).collect();
        sizes.reverse();
        Self::new(sizes)
    }

    pub fn largest(&self) -> u32 {
        self.sizes[0]
    }

    pub fn smallest(&self) -> u32 {
        self.sizes[self.sizes.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn contains(&self, size: u32) -> bool {
        self.sizes.contains(&size)
    }

    /// Sizes from largest to smallest
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.sizes
    }

    /// Largest candidate not above `value`, or the smallest candidate
    pub fn snap_down(&self, value: u32) -> u32 {
        self.iter()
            .find(|&size| size <= value)
            .unwrap_or_else(|| self.smallest())
    }

    /// Next candidate below `size`
    pub fn next_smaller(&self, size: u32) -> Option<u32> {
        self.iter().find(|&candidate| candidate < size)
    }

    /// Smallest candidate at or above `value`, or the largest candidate
    pub fn smallest_at_least(&self, value: u32) -> u32 {
        self.iter()
            .filter(|&size| size >= value)
            .last()
            .unwrap_or_else(|| self.largest())
    }
}

impl Default for SizeCandidates {
    fn default() -> Self {
        let mut sizes: Vec<u32> = (DEFAULT_MIN_SIZE..=DEFAULT_MAX_SIZE)
            .step_by(DEFAULT_STEP)
            .collect();
        sizes.reverse();
        Self { sizes }
    }
}

impl TryFrom<Vec<u32>> for SizeCandidates {
    type Error = LayoutError;

    fn try_from(sizes: Vec<u32>) -> Result<Self> {
        Self::new(sizes)
    }
}

impl From<SizeCandidates> for Vec<u32> {
    fn from(candidates: SizeCandidates) -> Self {
        candidates.sizes
    }
}

/// Available sizes for each font role
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub normal: SizeCandidates,
    pub accent: SizeCandidates,
    pub caption: SizeCandidates,
}

impl FontSizes {
    /// Use the same candidates for every role
    pub fn uniform(sizes: SizeCandidates) -> Self {
        Self {
            normal: sizes.clone(),
            accent: sizes.clone(),
            caption: sizes,
        }
    }

    pub fn for_role(&self, role: FontRole) -> &SizeCandidates {
        match role {
            FontRole::Normal => &self.normal,
            FontRole::Accent => &self.accent,
            FontRole::Caption => &self.caption,
        }
    }
}
