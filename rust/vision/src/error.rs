// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the detection pipeline

use thiserror::Error;

/// Errors raised while validating or processing a pixel buffer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VisionError {
    #[error("unsupported channel count {0}, expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannels(u8),

    #[error("image has zero width or height")]
    EmptyImage,

    #[error("row stride {stride} is smaller than the {required} bytes one row needs")]
    StrideTooSmall { stride: usize, required: usize },

    #[error("pixel data is {len} bytes but the buffer shape requires at least {required}")]
    TruncatedData { len: usize, required: usize },

    #[error("invalid detector config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}
