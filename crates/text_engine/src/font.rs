//! Font roles

use serde::{Deserialize, Serialize};

/// The role a font plays on the canvas.
///
/// Each role can map to a different face (for example a bold face for the
/// accent) and has its own set of available sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    /// Quote body text
    Normal,
    /// Highlighted time
    Accent,
    /// Title/author caption
    Caption,
}

impl FontRole {
    pub const ALL: [FontRole; 3] = [FontRole::Normal, FontRole::Accent, FontRole::Caption];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontRole::Normal => "normal",
            FontRole::Accent => "accent",
            FontRole::Caption => "caption",
        }
    }
}

impl std::fmt::Display for FontRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
