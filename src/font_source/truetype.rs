//! TrueType/OpenType font source backed by `ttf-parser`

use super::kerning::{KerningScript, KerningSource};
use super::outline::{design_to_canvas, OutlinePen};
use super::{FontInfo, FontSource, GlyphHandle, GlyphOutline};
use crate::core::errors::{FontCostumeError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use ttf_parser::{Face, GlyphId};

/// File extensions accepted as font input
pub const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Check that `path` exists and names a `.ttf` or `.otf` file
pub fn check_font_path(path: &Path) -> Result<()> {
    let has_font_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });

    if !has_font_extension {
        return Err(FontCostumeError::InvalidFontPath {
            path: path.to_path_buf(),
            reason: "The file must be a .ttf or .otf file".to_string(),
        });
    }
    if !path.is_file() {
        return Err(FontCostumeError::InvalidFontPath {
            path: path.to_path_buf(),
            reason: "Font file does not exist".to_string(),
        });
    }
    Ok(())
}

/// Read the raw bytes of a font file
pub fn read_font_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| FontCostumeError::io(path, source))
}

/// A parsed font face borrowing its file bytes
pub struct TrueTypeFont<'a> {
    face: Face<'a>,
    name: String,
    info: FontInfo,
    kerning: KerningSource,
}

impl<'a> TrueTypeFont<'a> {
    /// Parse the first face in `data`; `name` is used in messages only
    pub fn parse(data: &'a [u8], name: impl Into<String>) -> Result<Self> {
        Self::parse_with_script(data, name, KerningScript::default())
    }

    /// Like [`TrueTypeFont::parse`], choosing which GPOS script supplies kerning
    pub fn parse_with_script(
        data: &'a [u8],
        name: impl Into<String>,
        script: KerningScript,
    ) -> Result<Self> {
        let name = name.into();
        let face = Face::parse(data, 0).map_err(|source| FontCostumeError::FontParse {
            name: name.clone(),
            source,
        })?;

        let info = FontInfo::from_face(&face);
        let kerning = KerningSource::detect(&face, script);
        debug!(
            "Parsed {} ({} glyphs, {} units per em, kerning from {:?})",
            info.get_display_name(),
            info.glyph_count,
            info.units_per_em,
            kerning
        );

        Ok(Self {
            face,
            name,
            info,
            kerning,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    pub fn kerning_source(&self) -> &KerningSource {
        &self.kerning
    }
}

impl FontSource for TrueTypeFont<'_> {
    fn outline(&self, c: char, size: f64, x: f64, y: f64) -> GlyphOutline {
        let glyph = self.char_to_glyph(c);
        let mut pen = OutlinePen::new();
        if self
            .face
            .outline_glyph(GlyphId(glyph.id), &mut pen)
            .is_none()
        {
            debug!("Glyph {} for {:?} has no outline", glyph.id, c);
        }

        let scale = size / self.units_per_em();
        GlyphOutline::new(pen.finish(design_to_canvas(scale, x, y)))
    }

    fn advance_width(&self, c: char, scale: f64) -> f64 {
        let glyph = self.char_to_glyph(c);
        let advance = self.face.glyph_hor_advance(GlyphId(glyph.id)).unwrap_or(0) as f64;
        advance * (1.0 / self.units_per_em() * scale)
    }

    fn kerning_adjustment(&self, left: GlyphHandle, right: GlyphHandle) -> f64 {
        self.kerning
            .pair_value(&self.face, GlyphId(left.id), GlyphId(right.id)) as f64
    }

    fn units_per_em(&self) -> f64 {
        self.face.units_per_em() as f64
    }

    fn char_to_glyph(&self, c: char) -> GlyphHandle {
        match self.face.glyph_index(c) {
            Some(id) => GlyphHandle {
                id: id.0,
                mapped: true,
            },
            None => GlyphHandle::NOTDEF,
        }
    }
}
