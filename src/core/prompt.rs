//! Interactive configuration
//!
//! Asks the operator for whatever the command line left open and returns a
//! complete [`RunConfig`]. Input and output are generic so the whole
//! conversation can be scripted in tests.

use crate::charset::Charset;
use crate::core::config::{CliArgs, ConfigFile, RunConfig};
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const FONT_PROMPT: &str =
    "Enter the font file you wish to create a font out of (e.g. 'Roboto-Regular.ttf'): ";
const CUSTOM_CHARSET_PROMPT: &str = "Enter a custom charset? (N/Y): ";
const LETTERS_PROMPT: &str = "Enter all lowercase letters: ";
const EXTRAS_PROMPT: &str =
    "Enter the rest of the charset, excluding any letters, numbers first: ";
const COSTUMES_PROMPT: &str = "Generate costumes? (Y/N): ";
const KERNING_PROMPT: &str = "Generate kerning data? (Y/N): ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the full conversation, skipping questions the CLI already answered
    pub fn collect(&mut self, args: &CliArgs, config: Option<&ConfigFile>) -> Result<RunConfig> {
        writeln!(self.output, "\nWelcome to the font costume tool!\n")?;

        let font_path = match &args.font {
            Some(path) => path.clone(),
            None => self.ask_font_path()?,
        };
        let mut run = RunConfig::new(font_path, &args.get_output_dir(config))?;
        run.filename_policy = args.get_filename_policy(config);
        run.advance_term = args.get_advance_term(config);
        run.kerning_script = args.get_kerning_script(config);

        run.charset = match args.custom_charset() {
            Some(charset) => charset,
            None => self.ask_charset()?.unwrap_or_default(),
        };

        run.generate_costumes = !args.no_costumes && self.ask_yes(COSTUMES_PROMPT)?;
        run.generate_kerning = !args.no_kerning && self.ask_yes(KERNING_PROMPT)?;
        Ok(run)
    }

    /// Ask until the answer names an existing `.ttf`/`.otf` file
    pub fn ask_font_path(&mut self) -> Result<PathBuf> {
        loop {
            let answer = self.ask(FONT_PROMPT)?;
            let path = PathBuf::from(answer.trim());
            match crate::font_source::truetype::check_font_path(&path) {
                Ok(()) => return Ok(path),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// `None` unless the operator opts into a custom charset
    pub fn ask_charset(&mut self) -> Result<Option<Charset>> {
        if first_letter(&self.ask(CUSTOM_CHARSET_PROMPT)?) != Some('y') {
            return Ok(None);
        }
        let letters = self.ask(LETTERS_PROMPT)?;
        let extras = self.ask(EXTRAS_PROMPT)?;
        Ok(Some(Charset::with_custom_charset(
            letters.chars(),
            extras.chars(),
        )))
    }

    /// Yes/no question where an empty answer means yes
    pub fn ask_yes(&mut self, message: &str) -> Result<bool> {
        let answer = self.ask(message)?;
        Ok(matches!(first_letter(&answer), None | Some('y')))
    }

    /// One line of input without its line ending
    fn ask(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            bail!("input ended while waiting for an answer to {:?}", message.trim());
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

fn first_letter(answer: &str) -> Option<char> {
    answer
        .trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
}
