// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tunable grayscale inversion — the per-pixel transform that turns
// dark-on-light pages into light-on-dark ones.

use image::{GrayImage, Luma};
use tracing::debug;

use nachtdruck_core::InversionParameters;

/// Post-blend samples above this value count as near-white (they were dark
/// ink before inversion) and are dimmed by the text-darkness factor.
const NEAR_WHITE_THRESHOLD: f32 = 200.0;

/// Transform one grayscale sample.
///
/// The sample is inverted, blended with the original according to
/// `intensity`, then dimmed by `text_darkness` when the blend lands strictly
/// above the near-white threshold. The result is clamped to [0, 255] and
/// truncated back to an integer sample. With both parameters at 1.0 this is
/// exact inversion, `255 - value`.
#[inline]
pub fn invert_sample(value: u8, intensity: f32, text_darkness: f32) -> u8 {
    let original = f32::from(value);
    let inverted = 255.0 - original;

    let mut sample = if intensity < 1.0 {
        (1.0 - intensity) * original + intensity * inverted
    } else {
        inverted
    };

    if text_darkness < 1.0 && sample > NEAR_WHITE_THRESHOLD {
        sample *= text_darkness;
    }

    sample.clamp(0.0, 255.0) as u8
}

/// Apply the inversion transform to every pixel of a grayscale page.
///
/// Pure and deterministic: the output depends only on the input pixels and
/// the parameters, and no output pixel depends on any other.
pub fn invert_page(page: &GrayImage, params: &InversionParameters) -> GrayImage {
    let (width, height) = page.dimensions();
    let intensity = params.intensity();
    let text_darkness = params.text_darkness();

    let mut output = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let value = page.get_pixel(x, y).0[0];
            output.put_pixel(x, y, Luma([invert_sample(value, intensity, text_darkness)]));
        }
    }

    debug!(width, height, intensity, text_darkness, "Inversion applied");
    output
}

// -- Tests --------------------------------------------------------------------
