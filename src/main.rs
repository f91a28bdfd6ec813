//! nobg - make the near-white background of an image transparent.

mod cli;
mod image;
mod logger;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;

use crate::image::background::remove_background;

fn main() {
    let cli = parse_cli();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` keep clap's status 0.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            err.print().ok();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

/// Convert `cli.input` into `cli.output`.
///
/// A failure to create or write the output is an error too, so the process
/// exits 1 instead of reporting success without a file.
fn run(cli: &Cli) -> Result<()> {
    remove_background(&cli.input, &cli.output).context("failed to remove background")
}
