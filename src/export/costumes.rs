//! Glyph costume export
//!
//! One SVG per charset entry, sorted into the uppercase or "all other"
//! bucket. The output root is wiped first so a run never leaves costumes
//! from an earlier charset behind.

use super::svg::{wrap_costume, COSTUME_FILL, GLYPH_SIZE, GLYPH_X, GLYPH_Y, SVG_EXTENSION};
use crate::charset::{Bucket, Charset, FilenamePolicy};
use crate::core::errors::Result;
use crate::font_source::FontSource;
use crate::io::{file_name, ArtifactSink};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Writes one costume per character of a charset
#[derive(Debug, Clone, Copy, Default)]
pub struct CostumeExporter {
    policy: FilenamePolicy,
}

impl CostumeExporter {
    pub fn new(policy: FilenamePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FilenamePolicy {
        self.policy
    }

    /// Reset `root` and write every costume below it.
    ///
    /// Characters are processed in charset order. A later character whose
    /// file name matches an earlier one in the same bucket replaces it.
    pub fn export<F, S>(&self, charset: &Charset, font: &F, sink: &S, root: &Path) -> Result<()>
    where
        F: FontSource + ?Sized,
        S: ArtifactSink + ?Sized,
    {
        sink.reset(root)?;
        for bucket in Bucket::all() {
            sink.ensure_dir(&root.join(bucket.dir_name()))?;
        }

        let mut written: HashSet<PathBuf> = HashSet::new();
        for (index, &c) in charset.chars().iter().enumerate() {
            if !font.char_to_glyph(c).mapped {
                warn!("{:?} is not mapped by the font, exporting .notdef", c);
            }

            let stem = self.policy.costume_stem(charset, index, c);
            let path = root
                .join(charset.bucket_of(c).dir_name())
                .join(file_name(&stem, SVG_EXTENSION)?);

            sink.write_text(&path, &costume_svg(font, c))?;

            if !written.insert(path.clone()) {
                debug!("Costume for {:?} overwrote {:?}", c, path);
            }
        }

        info!(
            "Wrote {} costumes ({} files) to {:?}",
            charset.len(),
            written.len(),
            root
        );
        Ok(())
    }
}

/// The complete costume document for one character
pub fn costume_svg<F: FontSource + ?Sized>(font: &F, c: char) -> String {
    let mut outline = font.outline(c, GLYPH_SIZE, GLYPH_X, GLYPH_Y);
    outline.set_fill(COSTUME_FILL);
    wrap_costume(&outline.to_svg())
}
