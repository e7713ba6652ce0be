// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room detection pipeline
//!
//! Converts a rendered plan page into an ordered list of room
//! estimates: grayscale -> blur -> adaptive threshold -> morphological
//! closing -> external contours -> filtering -> unit conversion.

use crate::buffer::PixelBuffer;
use crate::contour::{bounding_rect, outer_contours};
use crate::error::VisionError;
use crate::estimate::estimate_room;
use crate::image_ops::{adaptive_threshold_inv, gaussian_blur, morphological_close};
use crate::types::{DetectorConfig, Rect, RoomEstimate};

/// Detect room-like regions in a rendered plan page.
///
/// Deterministic for identical input; a page with no detected rooms
/// returns an empty list, not an error. The result is sorted by
/// flooring area, largest room first, with ties keeping discovery
/// order.
pub fn detect(buffer: &PixelBuffer, config: &DetectorConfig) -> Result<Vec<RoomEstimate>, VisionError> {
    config.validate()?;

    let width = buffer.width();
    let height = buffer.height();

    let gray = buffer.to_grayscale();
    let blurred = gaussian_blur(&gray, config.blur_kernel_size);
    let binary = adaptive_threshold_inv(&blurred, config.threshold_block_size, config.threshold_offset);
    let closed = morphological_close(&binary, config.morph_kernel_size, config.morph_iterations);

    let contours = outer_contours(&closed);
    tracing::debug!(contours = contours.len(), width, height, "extracted outer contours");

    let mut estimates: Vec<RoomEstimate> = contours
        .iter()
        .filter_map(|contour| bounding_rect(contour))
        .filter(|rect| is_room_candidate(*rect, width, height, config))
        .map(|rect| estimate_room(rect, config))
        .collect();

    // Stable sort: ties keep discovery order
    estimates.sort_by(|a, b| b.flooring_sqft.total_cmp(&a.flooring_sqft));

    tracing::debug!(rooms = estimates.len(), "room detection finished");
    Ok(estimates)
}

/// Filtering policy for candidate bounding boxes.
///
/// Rejects noise specks below the area floor and boxes spanning nearly
/// the whole page (the sheet frame misread as a room).
fn is_room_candidate(rect: Rect, image_width: u32, image_height: u32, config: &DetectorConfig) -> bool {
    let image_area = f64::from(image_width) * f64::from(image_height);
    let min_area = (image_area * config.min_area_fraction).max(config.min_area_px);

    if (rect.area() as f64) < min_area {
        return false;
    }

    let spans_width = f64::from(rect.width) >= f64::from(image_width) * config.frame_fraction;
    let spans_height = f64::from(rect.height) >= f64::from(image_height) * config.frame_fraction;
    !(spans_width && spans_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::round2;
    use approx::assert_relative_eq;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [20, 20, 20, 255];

    fn solid_canvas(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        color
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect()
    }

    fn put(data: &mut [u8], width: u32, x: u32, y: u32, color: [u8; 4]) {
        let i = ((y * width + x) * 4) as usize;
        data[i..i + 4].copy_from_slice(&color);
    }

    /// Draw a rectangle outline with the given wall thickness
    fn draw_outline(data: &mut [u8], canvas_width: u32, rect: Rect, thickness: u32) {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                let on_border = dx < thickness
                    || dy < thickness
                    || dx >= rect.width - thickness
                    || dy >= rect.height - thickness;
                if on_border {
                    put(data, canvas_width, rect.x + dx, rect.y + dy, BLACK);
                }
            }
        }
    }

    fn buffer_from(data: Vec<u8>, width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_rgba(data, width, height).unwrap()
    }

    #[test]
    fn test_solid_color_yields_no_rooms() {
        let buffer = buffer_from(solid_canvas(200, 150, WHITE), 200, 150);
        let rooms = detect(&buffer, &DetectorConfig::default()).unwrap();
        assert!(rooms.is_empty());
    }

    #[test]
    fn test_single_outline_detected() {
        let (width, height) = (400, 300);
        let drawn = Rect::new(60, 50, 120, 100);
        let mut data = solid_canvas(width, height, WHITE);
        draw_outline(&mut data, width, drawn, 4);

        let buffer = buffer_from(data, width, height);
        let rooms = detect(&buffer, &DetectorConfig::default()).unwrap();

        assert_eq!(rooms.len(), 1);
        let room = &rooms[0];

        // Thresholding and blur may grow the box by a few pixels
        assert!(room.rect.width.abs_diff(drawn.width) <= 8, "width {}", room.rect.width);
        assert!(room.rect.height.abs_diff(drawn.height) <= 8, "height {}", room.rect.height);

        // Flooring derives exactly from the reported rect
        let expected = round2((f64::from(room.rect.width) * 0.1) * (f64::from(room.rect.height) * 0.1));
        assert_relative_eq!(room.flooring_sqft, expected);
        assert!(room.studs >= 1);
    }

    #[test]
    fn test_results_sorted_by_flooring_desc() {
        let (width, height) = (500, 400);
        let mut data = solid_canvas(width, height, WHITE);
        draw_outline(&mut data, width, Rect::new(40, 40, 80, 80), 4);
        draw_outline(&mut data, width, Rect::new(250, 100, 120, 100), 4);

        let buffer = buffer_from(data, width, height);
        let rooms = detect(&buffer, &DetectorConfig::default()).unwrap();

        assert_eq!(rooms.len(), 2);
        for pair in rooms.windows(2) {
            assert!(pair[0].flooring_sqft >= pair[1].flooring_sqft);
        }
        // Largest room first
        assert!(rooms[0].rect.width > rooms[1].rect.width);
    }

    #[test]
    fn test_detect_is_idempotent() {
        let (width, height) = (400, 300);
        let mut data = solid_canvas(width, height, WHITE);
        draw_outline(&mut data, width, Rect::new(100, 80, 120, 100), 4);

        let buffer = buffer_from(data, width, height);
        let config = DetectorConfig::default();

        let first = detect(&buffer, &config).unwrap();
        let second = detect(&buffer, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_page_frame_rejected() {
        // Outline covering 96% of both dimensions is the sheet frame,
        // not a room
        let (width, height) = (400, 300);
        let mut data = solid_canvas(width, height, WHITE);
        draw_outline(&mut data, width, Rect::new(8, 6, 384, 288), 4);

        let buffer = buffer_from(data, width, height);
        let rooms = detect(&buffer, &DetectorConfig::default()).unwrap();

        assert!(rooms.is_empty());
    }

    #[test]
    fn test_speck_below_area_floor_rejected() {
        let (width, height) = (400, 300);
        let mut data = solid_canvas(width, height, WHITE);
        // 30x30 = 900 px^2, under the 2000 px^2 floor
        draw_outline(&mut data, width, Rect::new(50, 50, 30, 30), 3);

        let buffer = buffer_from(data, width, height);
        let rooms = detect(&buffer, &DetectorConfig::default()).unwrap();

        assert!(rooms.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let buffer = buffer_from(solid_canvas(100, 100, WHITE), 100, 100);
        let config = DetectorConfig {
            threshold_block_size: 24,
            ..Default::default()
        };

        assert!(detect(&buffer, &config).is_err());
    }

    #[test]
    fn test_candidate_filter_thresholds() {
        let config = DetectorConfig::default();

        // Below the absolute floor
        assert!(!is_room_candidate(Rect::new(0, 0, 40, 40), 1000, 800, &config));
        // Comfortably above it
        assert!(is_room_candidate(Rect::new(0, 0, 120, 100), 1000, 800, &config));
        // Spans 96% of both dimensions
        assert!(!is_room_candidate(Rect::new(0, 0, 960, 768), 1000, 800, &config));
        // Spans 96% of width only: still a candidate
        assert!(is_room_candidate(Rect::new(0, 0, 960, 100), 1000, 800, &config));
    }
}
