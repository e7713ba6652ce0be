// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for room detection and material estimation

use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in pixel coordinates (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bounding box area in square pixels
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// A detected room together with its material estimates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoomEstimate {
    /// Bounding box of the detected room in pixel coordinates
    pub rect: Rect,
    /// Flooring area in square feet (2 decimal places)
    pub flooring_sqft: f64,
    /// Wall surface area in square feet (2 decimal places)
    pub drywall_sqft: f64,
    /// Minimum stud count along the perimeter (always >= 1)
    pub studs: u32,
}

/// Plan-level totals over all detected rooms
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub flooring_sqft: f64,
    pub drywall_sqft: f64,
    pub studs: u64,
}

/// Configuration for the room detection pipeline
///
/// All tunables live here rather than as scattered literals so a
/// different scan resolution or plan scale only needs a different
/// config, not pipeline changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Gaussian blur kernel size (must be odd)
    pub blur_kernel_size: u32,
    /// Adaptive threshold block size (must be odd)
    pub threshold_block_size: u32,
    /// Constant subtracted from the local mean before comparison
    pub threshold_offset: f64,
    /// Morphological closing kernel size (must be odd)
    pub morph_kernel_size: u32,
    /// Morphological closing iterations
    pub morph_iterations: u32,
    /// Minimum bounding-box area as a fraction of total image area
    pub min_area_fraction: f64,
    /// Absolute floor for the minimum bounding-box area (square pixels)
    pub min_area_px: f64,
    /// Bounding boxes covering at least this fraction of both image
    /// dimensions are treated as the page frame and discarded
    pub frame_fraction: f64,
    /// Plan scale: feet per pixel
    pub pixel_to_feet: f64,
    /// Wall height used for drywall surface area (feet)
    pub wall_height_ft: f64,
    /// On-center stud spacing (feet)
    pub stud_spacing_ft: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            blur_kernel_size: 5,
            threshold_block_size: 25,
            threshold_offset: 5.0,
            morph_kernel_size: 5,
            morph_iterations: 2,
            min_area_fraction: 0.0005,
            min_area_px: 2000.0,
            frame_fraction: 0.95,
            pixel_to_feet: 0.1,
            wall_height_ft: 8.0,
            stud_spacing_ft: 16.0 / 12.0,
        }
    }
}

impl DetectorConfig {
    /// Check the config for values the pipeline cannot work with
    pub fn validate(&self) -> Result<(), crate::error::VisionError> {
        use crate::error::VisionError;

        if self.blur_kernel_size == 0 || self.blur_kernel_size % 2 == 0 {
            return Err(VisionError::InvalidConfig {
                field: "blur_kernel_size",
                reason: "must be a positive odd number",
            });
        }
        if self.threshold_block_size == 0 || self.threshold_block_size % 2 == 0 {
            return Err(VisionError::InvalidConfig {
                field: "threshold_block_size",
                reason: "must be a positive odd number",
            });
        }
        if self.morph_kernel_size == 0 || self.morph_kernel_size % 2 == 0 {
            return Err(VisionError::InvalidConfig {
                field: "morph_kernel_size",
                reason: "must be a positive odd number",
            });
        }
        if self.pixel_to_feet <= 0.0 {
            return Err(VisionError::InvalidConfig {
                field: "pixel_to_feet",
                reason: "must be positive",
            });
        }
        if self.wall_height_ft <= 0.0 {
            return Err(VisionError::InvalidConfig {
                field: "wall_height_ft",
                reason: "must be positive",
            });
        }
        if self.stud_spacing_ft <= 0.0 {
            return Err(VisionError::InvalidConfig {
                field: "stud_spacing_ft",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}
