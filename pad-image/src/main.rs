//! Pads one image to a target aspect ratio and exits.
//!
//! Progress goes to stdout; diagnostics go through `tracing` on stderr,
//! filtered by `RUST_LOG`.

mod config;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use image_padder::{Dimensions, PadLayout, PadOptions, PadProgress, PadReport, pad_with_progress};

use config::{Cli, load_dotenv};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    let options = Cli::parse().into_options();

    let mut stdout = std::io::stdout();
    let result = run(&options, &mut stdout);
    report(&result, &mut stdout)
}

/// Prints one line per finished step.
struct LineProgress<'a, W: Write>(&'a mut W);

impl<W: Write> LineProgress<'_, W> {
    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.0, "{args}") {
            tracing::warn!("Failed to write progress: {e}");
        }
    }
}

impl<W: Write> PadProgress for LineProgress<'_, W> {
    fn decoded(&mut self, size: Dimensions) {
        self.line(format_args!("Original size: {size}"));
    }

    fn padded(&mut self, layout: &PadLayout) {
        self.line(format_args!("New canvas size: {}", layout.canvas));
    }

    fn saved(&mut self, path: &Path) {
        self.line(format_args!("Saved padded image to {}", path.display()));
    }
}

/// Pad the configured image, writing progress lines to `out`.
///
/// The output format is validated first, so a path like `out.jpg` fails
/// before the `Original size` and `New canvas size` lines are printed.
fn run<W: Write>(options: &PadOptions, out: &mut W) -> anyhow::Result<PadReport> {
    let padded = pad_with_progress(options, &mut LineProgress(out))
        .with_context(|| format!("Could not pad {}", options.input_path.display()))?;

    tracing::info!(ratio = %options.target_ratio, axis = ?padded.layout.axis, "Done");
    Ok(padded)
}

/// Turn the outcome into an exit code, printing `Error: ...` on failure.
fn report<W: Write>(result: &anyhow::Result<PadReport>, out: &mut W) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(write_err) = writeln!(out, "Error: {e:#}") {
                tracing::warn!("Failed to write error line: {write_err}");
            }
            tracing::error!("Padding failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}
