//! Turn a font into costumes and kerning data for image-based text.

use anyhow::Result;
use fontcostumes::{core, logging};

/// Run the application with the given CLI arguments.
fn run_app(cli_args: core::CliArgs) -> Result<()> {
    logging::init(cli_args.verbose, cli_args.log_file)?;
    core::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    match run_app(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
