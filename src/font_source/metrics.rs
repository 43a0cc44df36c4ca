//! Font information
//!
//! Names and vertical metrics read from a parsed face, used for logging and
//! for the run summary.

use ttf_parser::{name_id, Face};

/// Font information
#[derive(Debug, Clone, Default)]
pub struct FontInfo {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: f64,
    pub ascender: f64,
    pub descender: f64,
    pub glyph_count: u16,
}

impl FontInfo {
    /// Extract font info from a ttf-parser face
    pub fn from_face(face: &Face<'_>) -> Self {
        Self {
            family_name: Self::extract_name(face, name_id::FAMILY, "Untitled"),
            style_name: Self::extract_name(face, name_id::SUBFAMILY, "Regular"),
            units_per_em: face.units_per_em() as f64,
            ascender: face.ascender() as f64,
            descender: face.descender() as f64,
            glyph_count: face.number_of_glyphs(),
        }
    }

    /// First Unicode-decodable entry of a name record, or `default`
    fn extract_name(face: &Face<'_>, id: u16, default: &str) -> String {
        face.names()
            .into_iter()
            .filter(|name| name.name_id == id && name.is_unicode())
            .find_map(|name| name.to_string())
            .unwrap_or_else(|| default.to_string())
    }

    /// Get a display name combining family and style names
    pub fn get_display_name(&self) -> String {
        let parts: Vec<&str> = [&self.family_name, &self.style_name]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect();

        if parts.is_empty() {
            "Untitled Font".to_string()
        } else {
            parts.join(" ")
        }
    }
}
