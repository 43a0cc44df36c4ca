//! Process-level entry helpers and error reporting.

use std::io::{self, Write};

/// Report a failed run and exit.
///
/// Prints a generic failure banner followed by the error chain to stderr
/// and exits with code 1. Artifacts written before the failure are left
/// in place.
pub fn handle_error(error: anyhow::Error) {
    // exit code 1 still signals the failure if stderr is closed
    let _ = write_error_report(&mut io::stderr().lock(), &error);
    std::process::exit(1);
}

/// Failure banner and error chain, written once
pub fn write_error_report<W: Write>(out: &mut W, error: &anyhow::Error) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Something went wrong. Please try again.")?;
    writeln!(out, "{error:#}")?;
    writeln!(out)?;
    writeln!(out, "Try running with --help for usage information.")?;
    Ok(())
}

/// Parse command line arguments.
pub fn get_cli_args() -> crate::core::config::CliArgs {
    use clap::Parser;
    crate::core::config::CliArgs::parse()
}
