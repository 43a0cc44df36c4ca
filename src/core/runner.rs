//! Application runner logic
//!
//! Turns CLI arguments into a [`RunConfig`], runs the enabled passes, and
//! prints the summary operators need to wire the output into a project.

use crate::core::config::{CliArgs, ConfigFile, RunConfig};
use crate::core::prompt::Prompter;
use crate::export::{CostumeExporter, KerningTable, KERNING_FILE};
use crate::font_source::truetype::read_font_file;
use crate::font_source::{FontSource, TrueTypeFont};
use crate::io::{ArtifactSink, DirectorySink};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;

/// Create and run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to the batch run.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args.validate().map_err(anyhow::Error::msg)?;
    let config_file = ConfigFile::load();

    let run = if cli_args.needs_prompt() {
        let stdin = io::stdin();
        Prompter::new(stdin.lock(), io::stdout()).collect(&cli_args, config_file.as_ref())?
    } else {
        RunConfig::from_cli(&cli_args, config_file.as_ref())?
    };

    run_batch(&run, &DirectorySink)?;
    write_summary(&mut io::stdout().lock(), &run)?;
    Ok(())
}

/// Load the font named by `run` and execute the enabled passes
pub fn run_batch<S: ArtifactSink + ?Sized>(run: &RunConfig, sink: &S) -> Result<()> {
    let data = read_font_file(&run.font_path)?;
    let font =
        TrueTypeFont::parse_with_script(&data, run.font_name.as_str(), run.kerning_script)?;
    info!(
        "Loaded {} from {:?}",
        font.info().get_display_name(),
        run.font_path
    );
    run_passes(run, &font, sink)
}

/// Execute the enabled passes against an already opened font
pub fn run_passes<F, S>(run: &RunConfig, font: &F, sink: &S) -> Result<()>
where
    F: FontSource + ?Sized,
    S: ArtifactSink + ?Sized,
{
    if run.generate_costumes {
        CostumeExporter::new(run.filename_policy)
            .export(&run.charset, font, sink, &run.output_root)
            .context("Failed to generate costumes")?;
    }

    if run.generate_kerning {
        KerningTable::build_with(&run.charset, font, run.advance_term)
            .write(sink, &run.output_root)
            .with_context(|| format!("Failed to write {KERNING_FILE}"))?;
    }
    Ok(())
}

/// Notes for importing the generated data
pub fn write_summary<W: Write>(out: &mut W, run: &RunConfig) -> io::Result<()> {
    let n = run.charset.len();
    writeln!(out)?;
    writeln!(out, "Font data written to {}", run.output_root.display())?;
    writeln!(out)?;
    writeln!(out, "Some things to keep in mind:")?;
    writeln!(out, "  • Your charset is:")?;
    writeln!(out)?;
    writeln!(out, "  {}", run.charset)?;
    writeln!(out)?;
    writeln!(out, "  • Ensure that your costumes correctly match the order of")?;
    writeln!(out, "    your charset.")?;
    writeln!(out, "  • Import the costumes from uppercase-costumes first.")?;
    writeln!(out, "  • Consider sorting by 'date modified' when importing")?;
    writeln!(out, "    costumes.")?;
    writeln!(out, "  • You're going to have to rename the costumes of all")?;
    writeln!(out, "    non-alphanumeric characters.")?;
    writeln!(out, "  • The kerning list stores how much each character has to")?;
    writeln!(out, "    move by based on the character before it, so there are")?;
    writeln!(out, "    {} values for the {}*{} character pairs.", n * n, n, n)?;
    writeln!(out, "  • You can access the kerning/width values by using this")?;
    writeln!(out, "    algorithm:")?;
    writeln!(out)?;
    writeln!(
        out,
        "    (item ((previousChar-1)*{n}+currentChar) of kerning)*size"
    )?;
    writeln!(out)?;
    writeln!(out, "    where previousChar and currentChar are the costume")?;
    writeln!(out, "    numbers of the previous and current character, and size")?;
    writeln!(out, "    is the size of the text. Adjust these values if the")?;
    writeln!(out, "    costumes don't start from the beginning.")?;
    Ok(())
}
