// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Image processing stages for the room detection pipeline
//!
//! Each stage is a pure `GrayImage -> GrayImage` function so the
//! intermediate results can be unit-tested against synthetic buffers.

use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::morphology;

/// Apply Gaussian blur for noise reduction.
///
/// Sigma is derived from the kernel size (kernel / 3), matching the
/// filter-size-driven behavior of a fixed 5x5 smoothing kernel.
pub fn gaussian_blur(image: &GrayImage, kernel_size: u32) -> GrayImage {
    let sigma = kernel_size as f32 / 3.0;
    imageproc::filter::gaussian_blur_f32(image, sigma)
}

/// Adaptive mean thresholding with inverted polarity.
///
/// For each pixel the threshold is the mean of the surrounding
/// `block_size` x `block_size` neighborhood minus `offset`; pixels at
/// or below it (dark ink) become white (255), everything else black.
/// `imageproc::contrast::adaptive_threshold` supports neither the
/// offset nor the inversion, so this is built on an integral image.
pub fn adaptive_threshold_inv(image: &GrayImage, block_size: u32, offset: f64) -> GrayImage {
    let width = image.width();
    let height = image.height();
    let radius = (block_size / 2) as i64;

    let integral = integral_image(image);
    let row = width as usize + 1;

    let mut result = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let x0 = (x as i64 - radius).max(0) as usize;
            let y0 = (y as i64 - radius).max(0) as usize;
            let x1 = (x as i64 + radius).min(width as i64 - 1) as usize;
            let y1 = (y as i64 + radius).min(height as i64 - 1) as usize;

            let sum = integral[(y1 + 1) * row + x1 + 1] + integral[y0 * row + x0]
                - integral[y0 * row + x1 + 1]
                - integral[(y1 + 1) * row + x0];
            let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as f64;
            let mean = sum as f64 / count;

            let pixel = f64::from(image.get_pixel(x, y).0[0]);
            let value = if pixel <= mean - offset { 255 } else { 0 };
            result.put_pixel(x, y, Luma([value]));
        }
    }

    result
}

/// Summed-area table with a zero row and column prepended
fn integral_image(image: &GrayImage) -> Vec<u64> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let row = width + 1;

    let mut integral = vec![0u64; row * (height + 1)];
    for y in 0..height {
        let mut row_sum = 0u64;
        for x in 0..width {
            row_sum += u64::from(image.get_pixel(x as u32, y as u32).0[0]);
            integral[(y + 1) * row + x + 1] = integral[y * row + x + 1] + row_sum;
        }
    }

    integral
}

/// Morphological closing (dilate then erode) with a square structuring
/// element, repeated `iterations` times.
///
/// Bridges small gaps in wall outlines so room boundaries form closed
/// loops. A kernel of size `2r + 1` maps to radius `r` under the
/// L-infinity norm.
pub fn morphological_close(image: &GrayImage, kernel_size: u32, iterations: u32) -> GrayImage {
    let radius = (kernel_size / 2) as u8;

    let mut result = image.clone();
    for _ in 0..iterations {
        result = morphology::dilate(&result, Norm::LInf, radius);
    }
    for _ in 0..iterations {
        result = morphology::erode(&result, Norm::LInf, radius);
    }
    result
}
