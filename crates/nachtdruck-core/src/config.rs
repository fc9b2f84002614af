// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Resolution used when rasterizing input pages, in dots per inch.
    pub raster_dpi: f32,
    /// JPEG quality (1-100) for staged page artifacts.
    pub jpeg_quality: u8,
    /// Paper size of the composed output document.
    pub paper_size: crate::PaperSize,
    /// Parent directory for per-run staging workspaces; `None` uses the
    /// system temporary directory.
    pub staging_root: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            raster_dpi: 200.0,
            jpeg_quality: 95,
            paper_size: crate::PaperSize::A4,
            staging_root: None,
        }
    }
}
