// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// nachtdruck-document — Document processing for the Nachtdruck converter.
//
// Provides the tunable grayscale inversion transform, per-page processing
// (invert or pass through), PDFium-backed rasterization, PDF composition from
// staged page images, and the pipeline that ties them together with scoped
// workspace cleanup.

pub mod image;
pub mod page;
pub mod pdf;
pub mod pipeline;
pub mod raster;

// Re-export the primary structs so callers can use `nachtdruck_document::DocumentPipeline` etc.
pub use image::invert::{invert_page, invert_sample};
pub use image::processor::ImageProcessor;
pub use page::PageProcessor;
pub use pdf::reader::PdfReader;
pub use pdf::writer::PdfWriter;
pub use pipeline::DocumentPipeline;
pub use raster::{PdfiumRasterizer, Rasterizer};
