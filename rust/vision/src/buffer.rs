// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pixel buffer abstraction over rasterizer output
//!
//! Rasterizers hand over raw interleaved bytes with an explicit row
//! stride. `PixelBuffer` validates the shape once at construction so
//! the rest of the pipeline can assume a well-formed image.

use crate::error::VisionError;
use image::{GrayImage, Luma};

/// An immutable RGB or RGBA pixel grid with explicit row stride
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    stride: usize,
}

impl PixelBuffer {
    /// Wrap raw interleaved pixel data, validating the shape.
    ///
    /// The final row may omit stride padding; every other row must be
    /// `stride` bytes long.
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
    ) -> Result<Self, VisionError> {
        if width == 0 || height == 0 {
            return Err(VisionError::EmptyImage);
        }
        if channels != 3 && channels != 4 {
            return Err(VisionError::UnsupportedChannels(channels));
        }
        let row_bytes = width as usize * channels as usize;
        if stride < row_bytes {
            return Err(VisionError::StrideTooSmall {
                stride,
                required: row_bytes,
            });
        }
        let required = stride * (height as usize - 1) + row_bytes;
        if data.len() < required {
            return Err(VisionError::TruncatedData {
                len: data.len(),
                required,
            });
        }

        Ok(Self {
            data,
            width,
            height,
            channels,
            stride,
        })
    }

    /// Wrap tightly packed RGBA data (stride = width * 4)
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, VisionError> {
        let stride = width as usize * 4;
        Self::new(data, width, height, 4, stride)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert to a single-channel intensity image.
    ///
    /// Uses the ITU-R BT.601 luminance weights; the alpha channel of
    /// RGBA input is ignored.
    pub fn to_grayscale(&self) -> GrayImage {
        let channels = self.channels as usize;
        let mut gray = GrayImage::new(self.width, self.height);

        for y in 0..self.height {
            let row_start = y as usize * self.stride;
            for x in 0..self.width {
                let i = row_start + x as usize * channels;
                let r = f32::from(self.data[i]);
                let g = f32::from(self.data[i + 1]);
                let b = f32::from(self.data[i + 2]);
                let luma = (0.299 * r + 0.587 * g + 0.114 * b) as u8;
                gray.put_pixel(x, y, Luma([luma]));
            }
        }

        gray
    }
}
