// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — grayscale conversion, tunable inversion, and JPEG staging.

pub mod invert;
pub mod processor;

pub use invert::{invert_page, invert_sample};
pub use processor::ImageProcessor;
