// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-page processing — decides whether a raster page is inverted or passed
// through unchanged, and stages both kinds via the same JPEG encoding path.

use image::DynamicImage;
use tracing::{debug, instrument};

use nachtdruck_core::InversionParameters;
use nachtdruck_core::error::Result;

use crate::image::processor::ImageProcessor;

/// Applies the invert-or-pass-through decision to one raster page.
///
/// Carries the validated inversion parameters and the staging JPEG quality
/// for a whole run. `process` is pure per page: it can be called for the
/// pages of a document in any order and the results depend only on the page
/// pixels and the `selected` flag.
pub struct PageProcessor {
    params: InversionParameters,
    jpeg_quality: u8,
}

impl PageProcessor {
    pub fn new(params: InversionParameters, jpeg_quality: u8) -> Self {
        Self {
            params,
            jpeg_quality,
        }
    }

    /// Produce the staged JPEG bytes for one page.
    ///
    /// A selected page is converted to grayscale and inverted; an unselected
    /// page keeps its original full-colour pixels. Both branches leave
    /// through the same fixed-quality JPEG encoding, so every staged
    /// artifact has the same format regardless of branch.
    #[instrument(skip(self, page), fields(selected))]
    pub fn process(&self, page: &DynamicImage, selected: bool) -> Result<Vec<u8>> {
        let staged = if selected {
            ImageProcessor::from_dynamic(page.clone())
                .grayscale()
                .invert(&self.params)
        } else {
            ImageProcessor::from_dynamic(page.clone())
        };

        let bytes = staged.to_jpeg_bytes(self.jpeg_quality)?;
        debug!(selected, staged_bytes = bytes.len(), "Page staged");
        Ok(bytes)
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn processor() -> PageProcessor {
        PageProcessor::new(InversionParameters::new(1.0, 1.0).unwrap(), 95)
    }

    /// A selected page comes back grayscale with its shades inverted.
    #[test]
    fn selected_page_is_inverted_grayscale() {
        let page = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 40, Luma([40u8])));
        let bytes = processor().process(&page, true).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(matches!(decoded, DynamicImage::ImageLuma8(_)));

        // 255 - 40 = 215, within JPEG tolerance on a uniform image.
        let center = decoded.to_luma8().get_pixel(20, 20).0[0];
        assert!(
            (i16::from(center) - 215).abs() <= 3,
            "expected ~215, got {center}"
        );
    }

    /// An unselected page keeps its colour appearance.
    #[test]
    fn unselected_page_keeps_original_appearance() {
        let page = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 40, Rgb([200u8, 60, 60])));
        let bytes = processor().process(&page, false).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        let Rgb([r, g, b]) = *decoded.get_pixel(20, 20);
        assert!((i16::from(r) - 200).abs() <= 6, "red was {r}");
        assert!((i16::from(g) - 60).abs() <= 6, "green was {g}");
        assert!((i16::from(b) - 60).abs() <= 6, "blue was {b}");
    }

    /// Both branches emit JPEG data.
    #[test]
    fn both_branches_stage_as_jpeg() {
        let page = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([128u8])));
        for selected in [true, false] {
            let bytes = processor().process(&page, selected).unwrap();
            // JPEG start-of-image marker.
            assert_eq!(&bytes[..2], &[0xFF, 0xD8], "selected={selected}");
        }
    }

    /// Processing never changes the page dimensions.
    #[test]
    fn dimensions_survive_processing() {
        let page = DynamicImage::ImageRgb8(RgbImage::from_pixel(37, 53, Rgb([90u8, 90, 90])));
        for selected in [true, false] {
            let bytes = processor().process(&page, selected).unwrap();
            let decoded = image::load_from_memory(&bytes).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (37, 53));
        }
    }
}
