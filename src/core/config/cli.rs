//! Command line interface for fontcostumes
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs. Many CLI options are documented with
//! examples to help users understand the expected format.

use super::user_config::ConfigFile;
use crate::charset::{Charset, FilenamePolicy};
use crate::export::AdvanceTerm;
use crate::font_source::kerning::KerningScript;
use crate::font_source::truetype::check_font_path;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::debug;

/// fontcostumes CLI arguments
///
/// Examples:
///   fontcostumes                                  # Ask for everything interactively
///   fontcostumes Roboto-Regular.ttf               # Default charset, both passes
///   fontcostumes Roboto-Regular.ttf -o out/       # Write Roboto-Regular-Font-Data/ into out/
///   fontcostumes Inter.otf -u abc -x "123!?"      # Custom charset: ABCabc123!?
///   fontcostumes Inter.otf --no-costumes          # Kerning table only
///   fontcostumes Inter.otf --filename-policy raw  # Name symbol costumes by the symbol itself
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "fontcostumes",
    version,
    about = "Turn a font into SVG glyph costumes and a pairwise kerning table",
    long_about = "fontcostumes converts a .ttf or .otf font into one SVG costume per character and a flattened kerning table, for runtimes that can only show pre-rendered images and need to know how far to advance after each character."
)]
pub struct CliArgs {
    /// Font file to convert
    ///
    /// If not specified, the font path is asked for interactively.
    #[clap(
        value_name = "FONT",
        help = "Font file to convert (.ttf or .otf)",
        long_help = "Path to the font file to convert. Must be an existing .ttf or .otf file. If omitted, fontcostumes asks for it interactively."
    )]
    pub font: Option<PathBuf>,

    /// Ask for the charset and the passes to run
    #[clap(
        long = "interactive",
        short = 'i',
        help = "Ask for charset and passes interactively",
        long_help = "Prompt for a custom charset and for which artifacts to generate, like running without a FONT argument. A FONT given on the command line is still used."
    )]
    pub interactive: bool,

    /// Letters of a custom charset
    ///
    /// Case does not matter; letters are upper-cased and their lowercase
    /// forms follow them in the charset.
    #[clap(
        long = "uppercase",
        short = 'u',
        value_name = "LETTERS",
        help = "Letters of a custom charset",
        long_help = "Letters of a custom charset. They are upper-cased, become the uppercase costume class, and are followed by their lowercase forms. Using this or --extras replaces the default charset."
    )]
    pub uppercase: Option<String>,

    /// Non-letter characters of a custom charset, in order
    #[clap(
        long = "extras",
        short = 'x',
        value_name = "CHARS",
        help = "Remaining characters of a custom charset",
        long_help = "Characters appended after the letters of a custom charset, digits first by convention. Using this or --uppercase replaces the default charset."
    )]
    pub extras: Option<String>,

    /// Skip generating costumes
    #[clap(long = "no-costumes", help = "Do not generate costumes")]
    pub no_costumes: bool,

    /// Skip generating the kerning table
    #[clap(long = "no-kerning", help = "Do not generate kerning data")]
    pub no_kerning: bool,

    /// Directory that receives the `<font>-Font-Data/` folder
    #[clap(
        long = "output-dir",
        short = 'o',
        value_name = "DIR",
        help = "Parent directory of the generated <font>-Font-Data folder",
        long_help = "Parent directory of the generated <font>-Font-Data folder. Defaults to the output_dir setting, then to the current directory."
    )]
    pub output_dir: Option<PathBuf>,

    /// Naming of costumes for symbols that are not filename-safe
    #[clap(
        long = "filename-policy",
        value_enum,
        help = "Name unsafe symbols by charset index or verbatim",
        long_help = "How to name costumes of characters outside letters, digits, space, '_' and '-'. 'index' uses the character's position in the charset; 'raw' uses the character itself and fails on characters the filesystem cannot hold."
    )]
    pub filename_policy: Option<FilenamePolicy>,

    /// Which character of a pair contributes the advance width
    #[clap(
        long = "advance-from",
        value_enum,
        help = "Take the kerning table's advance width from the current or previous character"
    )]
    pub advance_from: Option<AdvanceTerm>,

    /// GPOS script whose kerning is used
    #[clap(
        long = "kerning-script",
        value_enum,
        help = "Prefer the DFLT or the latn script's kerning",
        long_help = "Which GPOS script supplies kerning when a font has both. 'dflt' looks at DFLT first, then latn. 'latn' looks at latn first, for fonts that only kern Latin pairs under latn."
    )]
    pub kerning_script: Option<KerningScript>,

    /// Increase log verbosity (-v info, -vv debug)
    #[clap(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to ~/.config/fontcostumes/logs/
    #[clap(long = "log-file", help = "Also write logs to the config logs directory")]
    pub log_file: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/fontcostumes directory with a settings.json file and a logs directory, then exit."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures the font path exists and has a font extension before
    /// any work starts.
    pub fn validate(&self) -> Result<(), String> {
        if self.new_config {
            return Ok(());
        }

        if let Some(path) = &self.font {
            check_font_path(path).map_err(|e| {
                format!("{e}\nMake sure the path is correct and points to a .ttf or .otf file.")
            })?;
        }

        if self.no_costumes && self.no_kerning && !self.interactive {
            return Err(
                "Nothing to do: both --no-costumes and --no-kerning were given.".to_string(),
            );
        }

        Ok(())
    }

    /// Whether the configuration has to be completed by prompting
    pub fn needs_prompt(&self) -> bool {
        self.interactive || self.font.is_none()
    }

    /// The custom charset requested on the command line, if any
    pub fn custom_charset(&self) -> Option<Charset> {
        if self.uppercase.is_none() && self.extras.is_none() {
            return None;
        }
        let letters = self.uppercase.as_deref().unwrap_or_default();
        let extras = self.extras.as_deref().unwrap_or_default();
        Some(Charset::with_custom_charset(letters.chars(), extras.chars()))
    }

    /// Get the filename policy from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--filename-policy)
    /// 2. Config file setting (~/.config/fontcostumes/settings.json)
    /// 3. Built-in default (index)
    pub fn get_filename_policy(&self, config: Option<&ConfigFile>) -> FilenamePolicy {
        if let Some(policy) = self.filename_policy {
            debug!("Using filename policy from CLI: {:?}", policy);
            return policy;
        }
        if let Some(policy) = config.and_then(|c| c.filename_policy) {
            debug!("Using filename policy from config file: {:?}", policy);
            return policy;
        }
        FilenamePolicy::default()
    }

    /// Get the advance term with the same priority as the filename policy
    pub fn get_advance_term(&self, config: Option<&ConfigFile>) -> AdvanceTerm {
        self.advance_from
            .or_else(|| config.and_then(|c| c.advance_from))
            .unwrap_or_default()
    }

    /// Get the kerning script with the same priority as the filename policy
    pub fn get_kerning_script(&self, config: Option<&ConfigFile>) -> KerningScript {
        self.kerning_script
            .or_else(|| config.and_then(|c| c.kerning_script))
            .unwrap_or_default()
    }

    /// Get the output directory with the same priority as the filename policy
    pub fn get_output_dir(&self, config: Option<&ConfigFile>) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(|| config.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
