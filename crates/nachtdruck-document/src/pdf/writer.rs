// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF composer — reassembles staged page images into a new multi-page PDF
// document using the `printpdf` crate.

use std::path::{Path, PathBuf};

use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, info, instrument};

use nachtdruck_core::PaperSize;
use nachtdruck_core::error::{NachtdruckError, Result};

/// Base resolution used to express image placement; the per-page scale
/// factor then stretches the image to the full page width.
const PLACEMENT_DPI: f32 = 150.0;

/// Composes staged page images into a multi-page PDF.
///
/// Every image becomes one portrait page: anchored at the page's top-left
/// corner and scaled to the full paper width, so an A4 output carries a
/// 210 mm wide image regardless of its pixel dimensions. Images taller than
/// the page overflow past the bottom edge rather than being shrunk.
pub struct PdfWriter {
    /// Paper size for page creation.
    paper_size: PaperSize,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    /// Create a new writer targeting the given paper size.
    pub fn new(paper_size: PaperSize) -> Self {
        Self {
            paper_size,
            title: None,
        }
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Paper dimensions in printpdf's Mm units.
    fn page_dimensions(&self) -> (Mm, Mm) {
        let (w_mm, h_mm) = self.paper_size.dimensions_mm();
        (Mm(w_mm as f32), Mm(h_mm as f32))
    }

    // -- Composition ----------------------------------------------------------

    /// Compose a PDF from staged page files, in exactly the order given.
    ///
    /// `artifacts` is the pipeline's staging manifest. The caller guarantees
    /// it is in ascending page order; this method never reorders it and
    /// never enumerates the staging directory itself.
    #[instrument(skip(self, artifacts), fields(pages = artifacts.len()))]
    pub fn create_from_pages(&self, artifacts: &[PathBuf]) -> Result<Vec<u8>> {
        let (page_w, page_h) = self.page_dimensions();
        let title = self.title.as_deref().unwrap_or("Nachtdruck Document");

        info!(paper = ?self.paper_size, pages = artifacts.len(), "Composing output PDF");

        let mut doc = PdfDocument::new(title);
        let mut pages: Vec<PdfPage> = Vec::with_capacity(artifacts.len());

        for (index, artifact) in artifacts.iter().enumerate() {
            let image_bytes = std::fs::read(artifact).map_err(|err| {
                NachtdruckError::EncodingFailure(format!(
                    "failed to read staged page {}: {}",
                    artifact.display(),
                    err
                ))
            })?;
            pages.push(compose_page(&mut doc, index, &image_bytes, page_w, page_h)?);
        }

        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);

        debug!(
            output_bytes = output.len(),
            warnings = warnings.len(),
            "Composition complete"
        );

        Ok(output)
    }

    // -- File output convenience ----------------------------------------------

    /// Compose and write directly to a file in a single write.
    pub fn write_to_file(&self, artifacts: &[PathBuf], path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.create_from_pages(artifacts)?;
        std::fs::write(path.as_ref(), &bytes).map_err(|err| {
            NachtdruckError::EncodingFailure(format!(
                "failed to write {}: {}",
                path.as_ref().display(),
                err
            ))
        })?;
        info!("Wrote composed PDF to {}", path.as_ref().display());
        Ok(())
    }
}

/// Build one full-width page from encoded image bytes.
fn compose_page(
    doc: &mut PdfDocument,
    index: usize,
    image_bytes: &[u8],
    page_w: Mm,
    page_h: Mm,
) -> Result<PdfPage> {
    // Decode the artifact to get its dimensions and pixel data.
    let dynamic_image = ::image::load_from_memory(image_bytes).map_err(|err| {
        NachtdruckError::EncodingFailure(format!("failed to decode staged page {}: {}", index, err))
    })?;

    let img_width = dynamic_image.width() as usize;
    let img_height = dynamic_image.height() as usize;

    // Convert to RGB8 for printpdf.
    let rgb_image = dynamic_image.to_rgb8();
    let raw = RawImage {
        pixels: RawImageData::U8(rgb_image.into_raw()),
        width: img_width,
        height: img_height,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };
    let xobject_id = doc.add_image(&raw);

    // Image native size at the placement DPI, then scaled so its width spans
    // the whole page. Upscaling is intentional here.
    let img_w_pt = img_width as f32 / PLACEMENT_DPI * 72.0;
    let img_h_pt = img_height as f32 / PLACEMENT_DPI * 72.0;
    let page_w_pt = page_w.into_pt().0;
    let page_h_pt = page_h.into_pt().0;

    let scale = page_w_pt / img_w_pt;
    let rendered_h_pt = img_h_pt * scale;

    // PDF origin is bottom-left; anchor the image's top edge to the page top.
    let ops = vec![Op::UseXobject {
        id: xobject_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(page_h_pt - rendered_h_pt)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(PLACEMENT_DPI),
            rotate: None,
        },
    }];

    debug!(index, img_width, img_height, scale, "Page placed");

    Ok(PdfPage::new(page_w, page_h, ops))
}

// -- Tests --------------------------------------------------------------------
