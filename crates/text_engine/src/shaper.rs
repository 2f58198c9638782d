//! Text measurement backed by real font faces
//!
//! Widths are taken from rustybuzz shaping output, so kerning and ligatures
//! the face applies by default are reflected in the advance. Font data is
//! borrowed; callers keep the bytes alive for as long as the metrics.

use crate::{FontRole, Result, TextError, TextMetrics};
use std::collections::HashMap;

/// Font faces keyed by role
pub struct FaceMetrics<'a> {
    faces: HashMap<FontRole, rustybuzz::Face<'a>>,
}

impl<'a> FaceMetrics<'a> {
    /// Create metrics with no faces loaded
    pub fn new() -> Self {
        Self {
            faces: HashMap::new(),
        }
    }

    /// Parse a face from font data and use it for `role`
    pub fn load_face(&mut self, role: FontRole, data: &'a [u8]) -> Result<()> {
        let face = rustybuzz::Face::from_slice(data, 0).ok_or_else(|| {
            TextError::InvalidFontData(format!("Failed to parse {} font", role))
        })?;
        self.faces.insert(role, face);
        Ok(())
    }

    /// Builder form of [`load_face`](Self::load_face)
    pub fn with_face(mut self, role: FontRole, data: &'a [u8]) -> Result<Self> {
        self.load_face(role, data)?;
        Ok(self)
    }

    /// Check if a face is loaded for a role
    pub fn has_face(&self, role: FontRole) -> bool {
        self.faces.contains_key(&role)
    }

    fn shape_width(
        face: &rustybuzz::Face<'_>,
        role: FontRole,
        font_size: u32,
        text: &str,
    ) -> Result<f32> {
        if text.is_empty() {
            return Ok(0.0);
        }

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(face, &[], buffer);

        let mut total_advance = 0i64;
        for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            if info.glyph_id == 0 {
                // .notdef: the face has no glyph for this cluster
                let ch = text
                    .get(info.cluster as usize..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                if !ch.is_whitespace() {
                    return Err(TextError::UnsupportedGlyph { ch, role });
                }
            }
            total_advance += pos.x_advance as i64;
        }

        let units_per_em = face.units_per_em() as f32;
        if units_per_em <= 0.0 {
            return Err(TextError::InvalidFontData(format!(
                "{} font has no units per em",
                role
            )));
        }

        Ok(total_advance as f32 * font_size as f32 / units_per_em)
    }
}

impl Default for FaceMetrics<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for FaceMetrics<'_> {
    fn measure(&self, role: FontRole, font_size: u32, text: &str) -> Result<f32> {
        let face = self.faces.get(&role).ok_or(TextError::FontNotLoaded(role))?;
        Self::shape_width(face, role, font_size, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Monospaced: every spacing glyph advances 1233 of 2048 units
    static MONO: &[u8] = include_bytes!("../testdata/DejaVuSansMono.ttf");
    const MONO_ADVANCE: f32 = 1233.0 / 2048.0;

    fn mono() -> FaceMetrics<'static> {
        FaceMetrics::new()
            .with_face(FontRole::Normal, MONO)
            .unwrap()
    }

    #[test]
    fn test_width_scales_with_size() {
        let metrics = mono();
        assert!(metrics.has_face(FontRole::Normal));

        let at_20 = metrics.measure(FontRole::Normal, 20, "abc").unwrap();
        let at_40 = metrics.measure(FontRole::Normal, 40, "abc").unwrap();
        assert!((at_20 - 3.0 * 20.0 * MONO_ADVANCE).abs() < 1e-3);
        assert!((at_40 - 2.0 * at_20).abs() < 1e-3);
        assert_eq!(metrics.measure(FontRole::Normal, 40, "").unwrap(), 0.0);
    }

    #[test]
    fn test_missing_glyph_is_reported() {
        let metrics = mono();
        assert_eq!(
            metrics.measure(FontRole::Normal, 20, "at 時 noon"),
            Err(TextError::UnsupportedGlyph {
                ch: '時',
                role: FontRole::Normal,
            })
        );
    }

    #[test]
    fn test_spaces_are_measured() {
        let metrics = mono();
        let spaced = metrics.measure(FontRole::Normal, 20, "a b").unwrap();
        assert!((spaced - 3.0 * 20.0 * MONO_ADVANCE).abs() < 1e-3);

        // the face has no ideographic space; whitespace never fails
        assert!(metrics.measure(FontRole::Normal, 20, "a\u{3000}b").is_ok());
    }

    #[test]
    fn test_faces_are_per_role() {
        let metrics = mono();
        assert_eq!(
            metrics.measure(FontRole::Caption, 20, "abc"),
            Err(TextError::FontNotLoaded(FontRole::Caption))
        );
    }

    #[test]
    fn test_missing_face_is_an_error() {
        let metrics = FaceMetrics::new();
        assert!(!metrics.has_face(FontRole::Normal));
        assert_eq!(
            metrics.measure(FontRole::Normal, 20, "hello"),
            Err(TextError::FontNotLoaded(FontRole::Normal))
        );
    }

    #[test]
    fn test_invalid_font_data() {
        let mut metrics = FaceMetrics::new();
        let result = metrics.load_face(FontRole::Accent, b"definitely not a font");
        assert!(matches!(result, Err(TextError::InvalidFontData(_))));
        assert!(!metrics.has_face(FontRole::Accent));
    }
}
