// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room detection and material estimation for floor plan pages
//!
//! This crate provides the core pipeline for:
//! 1. Wrapping rasterizer output in a validated pixel buffer
//! 2. Detecting room-like regions via classical image processing
//!    (blur, adaptive thresholding, morphological closing, contours)
//! 3. Converting detected bounding boxes to construction material
//!    estimates (flooring, drywall, studs)
//! 4. Aggregating per-room estimates into plan-level totals
//!
//! # Usage
//!
//! ```rust,ignore
//! use planest_vision::{aggregate, detect, DetectorConfig, PixelBuffer};
//!
//! let buffer = PixelBuffer::from_rgba(rgba_data, width, height)?;
//! let rooms = detect(&buffer, &DetectorConfig::default())?;
//! let totals = aggregate(&rooms);
//! ```

pub mod buffer;
pub mod contour;
pub mod detector;
pub mod error;
pub mod estimate;
pub mod image_ops;
pub mod types;

// Re-export commonly used types and functions
pub use buffer::PixelBuffer;
pub use detector::detect;
pub use error::VisionError;
pub use estimate::{aggregate, estimate_room};
pub use types::{DetectorConfig, Rect, RoomEstimate, Totals};
