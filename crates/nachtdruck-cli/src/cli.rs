// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line interface definition for the `nachtdruck` binary.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use nachtdruck_core::PaperSize;

/// Convert a PDF for night reading by inverting selected pages from
/// dark-on-light to light-on-dark.
#[derive(Debug, Parser)]
#[command(name = "nachtdruck", about, version)]
pub struct Cli {
    /// Path to the input PDF file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the output PDF (default: `<input>_inverted.pdf`)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pages to invert, e.g. "1-3,5,7-9"; every page when omitted
    #[arg(short, long, value_name = "PAGES")]
    pub pages: Option<String>,

    /// Inversion intensity, from 0.0 (no change) to 1.0 (full inversion)
    #[arg(short, long, default_value_t = 1.0)]
    pub intensity: f32,

    /// Text darkness, from 0.0 to 1.0; values below 1.0 dim inverted text
    #[arg(short, long, default_value_t = 0.8)]
    pub text_darkness: f32,

    /// Paper size of the composed output
    #[arg(long, value_enum, default_value_t = PaperChoice::A4)]
    pub paper: PaperChoice,

    /// Print the run report as JSON instead of the plain success line
    #[arg(long)]
    pub json: bool,
}

/// Paper sizes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaperChoice {
    /// ISO A4 (210 x 297 mm)
    A4,
    /// US Letter (216 x 279 mm)
    Letter,
    /// US Legal (216 x 356 mm)
    Legal,
}

impl From<PaperChoice> for PaperSize {
    fn from(choice: PaperChoice) -> Self {
        match choice {
            PaperChoice::A4 => PaperSize::A4,
            PaperChoice::Letter => PaperSize::Letter,
            PaperChoice::Legal => PaperSize::Legal,
        }
    }
}

/// Default output path: `<stem>_inverted<ext>` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("output");
    let name = match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_inverted.{ext}"),
        None => format!("{stem}_inverted"),
    };
    input.with_file_name(name)
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::parse_from(["nachtdruck", "scan.pdf"]);
        assert_eq!(cli.input, PathBuf::from("scan.pdf"));
        assert!(cli.output.is_none());
        assert!(cli.pages.is_none());
        assert_eq!(cli.intensity, 1.0);
        assert_eq!(cli.text_darkness, 0.8);
        assert_eq!(cli.paper, PaperChoice::A4);
        assert!(!cli.json);
    }

    #[test]
    fn every_flag_parses() {
        let cli = Cli::parse_from([
            "nachtdruck",
            "doc.pdf",
            "-o",
            "night.pdf",
            "-p",
            "1-3,5",
            "-i",
            "0.9",
            "-t",
            "0.7",
            "--paper",
            "letter",
            "--json",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("night.pdf")));
        assert_eq!(cli.pages.as_deref(), Some("1-3,5"));
        assert_eq!(cli.intensity, 0.9);
        assert_eq!(cli.text_darkness, 0.7);
        assert_eq!(cli.paper, PaperChoice::Letter);
        assert!(cli.json);
    }

    #[test]
    fn long_flags_parse_too() {
        let cli = Cli::parse_from([
            "nachtdruck",
            "doc.pdf",
            "--output",
            "night.pdf",
            "--pages",
            "2",
            "--intensity",
            "0.5",
            "--text-darkness",
            "1.0",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("night.pdf")));
        assert_eq!(cli.intensity, 0.5);
        assert_eq!(cli.text_darkness, 1.0);
    }

    #[test]
    fn default_output_name_appends_inverted() {
        assert_eq!(
            default_output_path(Path::new("doc.pdf")),
            PathBuf::from("doc_inverted.pdf")
        );
        assert_eq!(
            default_output_path(Path::new("dir/doc.pdf")),
            PathBuf::from("dir/doc_inverted.pdf")
        );
        assert_eq!(
            default_output_path(Path::new("notes")),
            PathBuf::from("notes_inverted")
        );
    }

    #[test]
    fn only_the_last_extension_moves() {
        assert_eq!(
            default_output_path(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar_inverted.gz")
        );
    }

    #[test]
    fn paper_choice_maps_to_paper_size() {
        assert_eq!(PaperSize::from(PaperChoice::A4), PaperSize::A4);
        assert_eq!(PaperSize::from(PaperChoice::Letter), PaperSize::Letter);
        assert_eq!(PaperSize::from(PaperChoice::Legal), PaperSize::Legal);
    }
}
