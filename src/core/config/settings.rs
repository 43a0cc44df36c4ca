//! Validated run configuration
//!
//! A [`RunConfig`] is assembled completely (from flags, the settings file
//! or prompts) before the export passes start. The passes only ever see
//! this value.

use super::cli::CliArgs;
use super::user_config::ConfigFile;
use crate::charset::{Charset, FilenamePolicy};
use crate::core::errors::{FontCostumeError, Result};
use crate::export::AdvanceTerm;
use crate::font_source::kerning::KerningScript;
use crate::font_source::truetype::check_font_path;
use std::path::{Path, PathBuf};

/// Suffix of the per-font output folder
pub const OUTPUT_SUFFIX: &str = "-Font-Data";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub font_path: PathBuf,
    /// File stem of the font, e.g. `Roboto-Regular`
    pub font_name: String,
    /// `<output dir>/<font name>-Font-Data`
    pub output_root: PathBuf,
    pub charset: Charset,
    pub generate_costumes: bool,
    pub generate_kerning: bool,
    pub filename_policy: FilenamePolicy,
    pub advance_term: AdvanceTerm,
    pub kerning_script: KerningScript,
}

impl RunConfig {
    /// Configuration with the default charset and both passes enabled.
    ///
    /// Fails if `font_path` is not an existing `.ttf`/`.otf` file.
    pub fn new(font_path: impl Into<PathBuf>, output_dir: &Path) -> Result<Self> {
        let font_path = font_path.into();
        check_font_path(&font_path)?;

        let font_name = font_name(&font_path)?;
        Ok(Self {
            output_root: output_root(output_dir, &font_name),
            font_name,
            font_path,
            charset: Charset::default_charset(),
            generate_costumes: true,
            generate_kerning: true,
            filename_policy: FilenamePolicy::default(),
            advance_term: AdvanceTerm::default(),
            kerning_script: KerningScript::default(),
        })
    }

    /// Build a configuration purely from command line flags
    pub fn from_cli(args: &CliArgs, config: Option<&ConfigFile>) -> Result<Self> {
        let font_path = args
            .font
            .clone()
            .ok_or_else(|| FontCostumeError::InvalidFontPath {
                path: PathBuf::new(),
                reason: "No font file given".to_string(),
            })?;

        let mut run = Self::new(font_path, &args.get_output_dir(config))?;
        if let Some(charset) = args.custom_charset() {
            run.charset = charset;
        }
        run.generate_costumes = !args.no_costumes;
        run.generate_kerning = !args.no_kerning;
        run.filename_policy = args.get_filename_policy(config);
        run.advance_term = args.get_advance_term(config);
        run.kerning_script = args.get_kerning_script(config);
        Ok(run)
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_passes(mut self, costumes: bool, kerning: bool) -> Self {
        self.generate_costumes = costumes;
        self.generate_kerning = kerning;
        self
    }
}

/// Font name used for the output folder: the file stem
pub fn font_name(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| FontCostumeError::InvalidFontPath {
            path: path.to_path_buf(),
            reason: "Font path has no file name".to_string(),
        })
}

pub fn output_root(output_dir: &Path, font_name: &str) -> PathBuf {
    output_dir.join(format!("{font_name}{OUTPUT_SUFFIX}"))
}
