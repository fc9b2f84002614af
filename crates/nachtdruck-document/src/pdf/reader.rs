// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — open and inspect existing PDF documents using the `lopdf`
// crate.

use std::path::Path;

use lopdf::Document;
use tracing::{debug, info, instrument};

use nachtdruck_core::error::{NachtdruckError, Result};

/// Reads existing PDF files for inspection.
///
/// Wraps `lopdf::Document`. The converter uses this to check composed output
/// (page counts) without rasterizing it all over again.
#[derive(Debug)]
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfReader {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            NachtdruckError::UnreadableDocument(format!(
                "failed to open {}: {}",
                path_ref.display(),
                err
            ))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self { document })
    }

    /// Create a reader from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            NachtdruckError::UnreadableDocument(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self { document })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}

// -- Tests --------------------------------------------------------------------
