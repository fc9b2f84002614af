// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — grayscale conversion, inversion, and JPEG encoding for
// staged pages. Operates on in-memory images using the `image` crate.

use image::DynamicImage;
use tracing::{debug, info, instrument};

use nachtdruck_core::InversionParameters;
use nachtdruck_core::error::{NachtdruckError, Result};

use crate::image::invert;

/// Image processing pipeline operating on a single in-memory page.
///
/// All operations are non-destructive: each method consumes `self` and returns a
/// new `ImageProcessor` wrapping the transformed image, enabling method chaining.
///
/// ```ignore
/// let staged = ImageProcessor::from_dynamic(page)
///     .grayscale()
///     .invert(&params)
///     .to_jpeg_bytes(95)?;
/// ```
#[derive(Debug)]
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Create a processor from raw encoded bytes (JPEG, PNG, etc.).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data).map_err(|err| {
            NachtdruckError::EncodingFailure(format!("failed to decode image: {}", err))
        })?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Convert the image to grayscale (luma).
    #[instrument(skip(self))]
    pub fn grayscale(self) -> Self {
        info!("Converting to grayscale");
        Self {
            image: self.image.grayscale(),
        }
    }

    /// Apply the tunable inversion transform.
    ///
    /// The image is reduced to single-channel luma first; callers that need
    /// an explicit conversion step should chain [`Self::grayscale`] before
    /// this.
    #[instrument(skip(self), fields(intensity = params.intensity(), text_darkness = params.text_darkness()))]
    pub fn invert(self, params: &InversionParameters) -> Self {
        let gray = self.image.to_luma8();
        let inverted = invert::invert_page(&gray, params);
        Self {
            image: DynamicImage::ImageLuma8(inverted),
        }
    }

    // -- Encoding --------------------------------------------------------------

    /// Encode the current image as JPEG bytes with the given quality (1-100).
    ///
    /// Grayscale images are encoded as single-channel luma, everything else
    /// as RGB. Both page branches of the converter leave through this one
    /// path.
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
        match &self.image {
            DynamicImage::ImageLuma8(gray) => gray.write_with_encoder(encoder),
            other => other.to_rgb8().write_with_encoder(encoder),
        }
        .map_err(|err| NachtdruckError::EncodingFailure(format!("JPEG encoding failed: {}", err)))?;
        Ok(buffer)
    }
}

// -- Tests --------------------------------------------------------------------
