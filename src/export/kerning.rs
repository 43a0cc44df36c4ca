//! Flattened pairwise kerning table
//!
//! For a charset of `n` characters the table holds `n * n` values, one per
//! (previous, current) pair with `previous` as the outer loop. A consumer
//! finds the advance after `previous` with
//! `values[previous * n + current] * size`.

use crate::charset::Charset;
use crate::core::errors::Result;
use crate::font_source::FontSource;
use crate::io::ArtifactSink;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

pub const KERNING_FILE: &str = "kerning.txt";

/// Advances are measured at font size 1 and scaled by the consumer
pub const REFERENCE_SCALE: f64 = 1.0;

/// Which character of a pair contributes the advance width
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceTerm {
    /// Width of the current character
    #[default]
    Current,
    /// Width of the previous character
    Previous,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KerningTable {
    size: usize,
    values: Vec<f64>,
}

impl KerningTable {
    /// Build the table with the advance taken from the current character
    pub fn build<F: FontSource + ?Sized>(charset: &Charset, font: &F) -> Self {
        Self::build_with(charset, font, AdvanceTerm::Current)
    }

    pub fn build_with<F: FontSource + ?Sized>(
        charset: &Charset,
        font: &F,
        advance_term: AdvanceTerm,
    ) -> Self {
        let chars = charset.chars();
        let size = chars.len();
        let units_per_em = font.units_per_em();

        let glyphs: Vec<_> = chars.iter().map(|&c| font.char_to_glyph(c)).collect();
        let advances: Vec<f64> = chars
            .iter()
            .map(|&c| font.advance_width(c, REFERENCE_SCALE))
            .collect();

        let mut values = Vec::with_capacity(size * size);
        for previous in 0..size {
            for current in 0..size {
                let advance = match advance_term {
                    AdvanceTerm::Current => advances[current],
                    AdvanceTerm::Previous => advances[previous],
                };
                let kerning = font.kerning_adjustment(glyphs[previous], glyphs[current]);
                values.push(advance + kerning / units_per_em);
            }
        }

        Self { size, values }
    }

    /// Number of characters the table was built for
    pub fn charset_len(&self) -> usize {
        self.size
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value for a pair of 0-based charset positions
    pub fn get(&self, previous: usize, current: usize) -> Option<f64> {
        if previous >= self.size || current >= self.size {
            return None;
        }
        self.values.get(previous * self.size + current).copied()
    }

    /// One value per line, in table order
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for value in &self.values {
            // writing to a String cannot fail
            let _ = writeln!(text, "{value}");
        }
        text
    }

    /// Write `kerning.txt` into `root`, creating the directory if needed
    pub fn write<S: ArtifactSink + ?Sized>(&self, sink: &S, root: &Path) -> Result<PathBuf> {
        sink.ensure_dir(root)?;
        let path = root.join(KERNING_FILE);
        sink.write_text(&path, &self.to_text())?;
        info!(
            "Wrote {} kerning values for {} characters to {:?}",
            self.values.len(),
            self.size,
            path
        );
        Ok(path)
    }
}
