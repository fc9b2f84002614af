// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document rasterization — renders each page of an input PDF to an
// in-memory bitmap via the PDFium library.

use std::path::Path;

use image::DynamicImage;
use pdfium_render::prelude::*;
use tracing::{debug, info, instrument};

use nachtdruck_core::error::{NachtdruckError, Result};

/// Renders a whole document into an ordered sequence of raster pages.
///
/// The order of the returned vector is the document's own page order and is
/// the canonical ordering for everything downstream.
pub trait Rasterizer {
    fn rasterize(&self, document: &Path) -> Result<Vec<DynamicImage>>;
}

/// PDFium-backed rasterizer.
///
/// Binds the PDFium library at call time — first a bundled library next to
/// the executable, then the system library — and renders every page at the
/// configured resolution.
pub struct PdfiumRasterizer {
    /// Render resolution in dots per inch.
    dpi: f32,
}

impl PdfiumRasterizer {
    pub fn new(dpi: f32) -> Self {
        Self { dpi }
    }
}

impl Default for PdfiumRasterizer {
    fn default() -> Self {
        Self::new(200.0)
    }
}

impl Rasterizer for PdfiumRasterizer {
    #[instrument(skip(self), fields(document = %document.display(), dpi = self.dpi))]
    fn rasterize(&self, document: &Path) -> Result<Vec<DynamicImage>> {
        let pdfium = Pdfium::new(
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                .or_else(|_| Pdfium::bind_to_system_library())
                .map_err(|err| {
                    NachtdruckError::UnreadableDocument(format!(
                        "PDFium library unavailable: {}",
                        err
                    ))
                })?,
        );

        let loaded = pdfium.load_pdf_from_file(document, None).map_err(|err| {
            NachtdruckError::UnreadableDocument(format!(
                "failed to open {}: {}",
                document.display(),
                err
            ))
        })?;

        let page_count = loaded.pages().len();
        info!(pages = page_count, "Rasterizing document");

        let scale = self.dpi / 72.0; // PDF points are 72 per inch
        let mut rendered = Vec::with_capacity(page_count as usize);

        for (index, page) in loaded.pages().iter().enumerate() {
            let pixel_width = (page.width().value * scale) as i32;
            let pixel_height = (page.height().value * scale) as i32;

            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .set_target_width(pixel_width)
                        .set_target_height(pixel_height)
                        .render_form_data(true)
                        .render_annotations(true),
                )
                .map_err(|err| {
                    NachtdruckError::UnreadableDocument(format!(
                        "failed to render page {}: {}",
                        index, err
                    ))
                })?;

            rendered.push(bitmap.as_image());
            debug!(page = index, pixel_width, pixel_height, "Page rendered");
        }

        Ok(rendered)
    }
}
