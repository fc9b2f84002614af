// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Nachtdruck.

use thiserror::Error;

/// Top-level error type for all Nachtdruck operations.
///
/// Every failure of a conversion run maps onto exactly one variant. I/O and
/// third-party errors are converted at the call site so the variant always
/// names the stage that failed, not the mechanism underneath it.
#[derive(Debug, Error)]
pub enum NachtdruckError {
    // -- Page selection errors --
    #[error("invalid page selection: {0}")]
    InvalidRangeFormat(String),

    #[error("page selection out of bounds: {0}")]
    PageOutOfBounds(String),

    // -- Parameter errors --
    #[error("parameter out of range: {0}")]
    ParameterOutOfRange(String),

    // -- Pipeline errors --
    #[error("cannot read document: {0}")]
    UnreadableDocument(String),

    #[error("encoding failed: {0}")]
    EncodingFailure(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NachtdruckError>;
