// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for terminal users.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity separates mistakes the user can fix on the command line from
// problems with the document or the machine, and drives the exit code.

use crate::error::NachtdruckError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The command line itself needs fixing (bad selection, bad parameter).
    UserInput,
    /// The input document cannot be processed.
    Document,
    /// Reading or writing files failed.
    Storage,
}

impl Severity {
    /// Process exit code for this class of failure. Usage mistakes exit
    /// with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UserInput => 2,
            Self::Document | Self::Storage => 1,
        }
    }
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (first line on stderr).
    pub message: String,
    /// What the user should try (second line).
    pub suggestion: String,
    /// Severity level (drives the exit code).
    pub severity: Severity,
}

/// Convert a `NachtdruckError` into a `HumanError` suitable for stderr.
pub fn humanize_error(err: &NachtdruckError) -> HumanError {
    match err {
        // -- Command-line mistakes --
        NachtdruckError::InvalidRangeFormat(detail) => HumanError {
            message: format!("The page selection could not be understood: {detail}."),
            suggestion: "Use comma-separated page numbers and ranges, for example \"1-3,5,7-9\"."
                .into(),
            severity: Severity::UserInput,
        },

        NachtdruckError::PageOutOfBounds(detail) => HumanError {
            message: format!("The page selection does not fit this document: {detail}."),
            suggestion: "Check the numbers against the document's page count and try again.".into(),
            severity: Severity::UserInput,
        },

        NachtdruckError::ParameterOutOfRange(detail) => HumanError {
            message: format!("A parameter is outside its valid range: {detail}."),
            suggestion: "Intensity and text darkness both take values from 0.0 to 1.0.".into(),
            severity: Severity::UserInput,
        },

        // -- Document problems --
        NachtdruckError::UnreadableDocument(detail) => {
            if detail.contains("PDFium") {
                HumanError {
                    message: "The PDF rendering library could not be loaded.".into(),
                    suggestion:
                        "Install the PDFium library for your platform, or place the library file next to the executable."
                            .into(),
                    severity: Severity::Document,
                }
            } else {
                HumanError {
                    message: "The input document could not be read.".into(),
                    suggestion: format!(
                        "Make sure the file is a PDF that opens in a normal viewer. ({detail})"
                    ),
                    severity: Severity::Document,
                }
            }
        }

        // -- Staging and output problems --
        NachtdruckError::EncodingFailure(detail) => HumanError {
            message: "Writing the converted document failed.".into(),
            suggestion: format!(
                "Check free disk space and that the output location is writable. ({detail})"
            ),
            severity: Severity::Storage,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_selection_is_user_input() {
        let err = NachtdruckError::InvalidRangeFormat("'abc' is not a page number or range".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::UserInput);
        assert_eq!(human.severity.exit_code(), 2);
    }

    #[test]
    fn out_of_bounds_selection_is_user_input() {
        let err = NachtdruckError::PageOutOfBounds("page(s) 9 outside the valid range 1-5".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::UserInput);
        assert!(human.message.contains("9"));
    }

    #[test]
    fn unreadable_document_exits_with_one() {
        let err = NachtdruckError::UnreadableDocument("bad xref table".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Document);
        assert_eq!(human.severity.exit_code(), 1);
        assert!(human.suggestion.contains("bad xref table"));
    }

    #[test]
    fn missing_pdfium_gets_an_install_hint() {
        let err = NachtdruckError::UnreadableDocument("PDFium library unavailable: not found".into());
        let human = humanize_error(&err);
        assert!(human.suggestion.contains("Install"));
    }

    #[test]
    fn encoding_failure_is_storage_class() {
        let err = NachtdruckError::EncodingFailure("No space left on device".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Storage);
        assert_eq!(human.severity.exit_code(), 1);
    }
}
