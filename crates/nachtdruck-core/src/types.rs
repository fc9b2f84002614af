// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Nachtdruck converter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::{NachtdruckError, Result};

/// Unique identifier for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standard paper sizes for the composed output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    Letter,
    Legal,
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
        }
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        Self::A4
    }
}

/// Tunable knobs of the inversion transform, validated at construction.
///
/// `intensity` blends between the original sample (0.0) and its inversion
/// (1.0). `text_darkness` dims near-white samples after the blend so that
/// inverted text strokes do not glare; 1.0 leaves them untouched. Both must
/// lie in [0.0, 1.0]; [`InversionParameters::new`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InversionParameters {
    intensity: f32,
    text_darkness: f32,
}

impl InversionParameters {
    /// Create a validated parameter pair.
    pub fn new(intensity: f32, text_darkness: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&intensity) {
            return Err(NachtdruckError::ParameterOutOfRange(format!(
                "intensity must be between 0.0 and 1.0, got {intensity}"
            )));
        }
        if !(0.0..=1.0).contains(&text_darkness) {
            return Err(NachtdruckError::ParameterOutOfRange(format!(
                "text darkness must be between 0.0 and 1.0, got {text_darkness}"
            )));
        }
        Ok(Self {
            intensity,
            text_darkness,
        })
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn text_darkness(&self) -> f32 {
        self.text_darkness
    }
}

impl Default for InversionParameters {
    /// Full inversion with slightly dimmed text, the settings most readable
    /// on a typical scan.
    fn default() -> Self {
        Self {
            intensity: 1.0,
            text_darkness: 0.8,
        }
    }
}

/// Summary of one completed conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Page count of the input document.
    pub total_pages: usize,
    /// How many of those pages were inverted.
    pub inverted_pages: usize,
    pub duration_ms: u64,
    pub completed_at: DateTime<Utc>,
}
