// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Nachtdruck — dark-mode PDF conversion for night reading.
//
// Entry point: initialises logging, validates arguments, and drives the
// document pipeline. User-facing output goes to stdout, diagnostics and
// logs to stderr.

mod cli;

use clap::Parser;
use tracing::debug;

use nachtdruck_core::human_errors::humanize_error;
use nachtdruck_core::{AppConfig, InversionParameters, NachtdruckError};
use nachtdruck_document::{DocumentPipeline, PdfiumRasterizer};

use cli::Cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(code) = run(cli) {
        std::process::exit(code);
    }
}

/// Validate arguments and run the pipeline; returns the exit code on failure.
fn run(cli: Cli) -> Result<(), i32> {
    // Parameters are validated before any document work happens.
    let params =
        InversionParameters::new(cli.intensity, cli.text_darkness).map_err(|err| report(&err))?;

    if !cli.input.exists() {
        eprintln!("Error: input file '{}' does not exist.", cli.input.display());
        return Err(2);
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli::default_output_path(&cli.input));
    debug!(output = %output.display(), "Output path resolved");

    let config = AppConfig {
        paper_size: cli.paper.into(),
        ..AppConfig::default()
    };
    let rasterizer = PdfiumRasterizer::new(config.raster_dpi);
    let pipeline = DocumentPipeline::new(rasterizer, config);

    println!("Processing '{}'...", cli.input.display());

    match pipeline.run(&cli.input, &output, cli.pages.as_deref(), params) {
        Ok(run_report) => {
            if cli.json {
                match serde_json::to_string_pretty(&run_report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        eprintln!("Error: could not serialise the run report: {err}");
                        return Err(1);
                    }
                }
            } else {
                println!("Successfully created modified PDF: '{}'", output.display());
            }
            Ok(())
        }
        Err(err) => Err(report(&err)),
    }
}

/// Print a human-readable error to stderr and return the exit code.
fn report(err: &NachtdruckError) -> i32 {
    let human = humanize_error(err);
    eprintln!("Error: {}", human.message);
    eprintln!("{}", human.suggestion);
    human.severity.exit_code()
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn out_of_range_intensity_exits_with_usage_code() {
        let cli = Cli::parse_from(["nachtdruck", "missing.pdf", "-i", "1.5"]);
        assert_eq!(run(cli), Err(2));
    }

    #[test]
    fn out_of_range_text_darkness_exits_with_usage_code() {
        let cli = Cli::parse_from(["nachtdruck", "missing.pdf", "-t", "1.2"]);
        assert_eq!(run(cli), Err(2));
    }

    #[test]
    fn missing_input_exits_with_usage_code() {
        let cli = Cli::parse_from(["nachtdruck", "definitely_not_here.pdf"]);
        assert_eq!(run(cli), Err(2));
    }
}
