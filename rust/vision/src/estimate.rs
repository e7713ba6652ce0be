// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Material estimation from detected room bounding boxes
//!
//! Pure arithmetic over (x, y, w, h); no image types so the numbers
//! can be tested without any pixel data.

use crate::types::{DetectorConfig, Rect, RoomEstimate, Totals};

/// Round to 2 decimal places (the reporting precision for areas)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build a material estimate for one room bounding box.
///
/// Flooring covers the bounding box footprint; drywall covers the
/// perimeter walls at the configured wall height; studs are the
/// perimeter divided by on-center spacing, rounded up, never below 1.
pub fn estimate_room(rect: Rect, config: &DetectorConfig) -> RoomEstimate {
    let width_ft = f64::from(rect.width) * config.pixel_to_feet;
    let height_ft = f64::from(rect.height) * config.pixel_to_feet;

    let area_sqft = width_ft * height_ft;
    let perimeter_ft = 2.0 * (width_ft + height_ft);
    let drywall_sqft = perimeter_ft * config.wall_height_ft;
    let studs = ((perimeter_ft / config.stud_spacing_ft).ceil() as u32).max(1);

    RoomEstimate {
        rect,
        flooring_sqft: round2(area_sqft),
        drywall_sqft: round2(drywall_sqft),
        studs,
    }
}

/// Sum per-room metrics into plan-level totals.
///
/// Empty input yields all-zero totals. Recomputed on demand; nothing
/// is cached between calls.
pub fn aggregate(estimates: &[RoomEstimate]) -> Totals {
    let flooring: f64 = estimates.iter().map(|e| e.flooring_sqft).sum();
    let drywall: f64 = estimates.iter().map(|e| e.drywall_sqft).sum();
    let studs: u64 = estimates.iter().map(|e| u64::from(e.studs)).sum();

    Totals {
        flooring_sqft: round2(flooring),
        drywall_sqft: round2(drywall),
        studs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_estimate_known_rect() {
        // 120x100 px at 0.1 ft/px: 12ft x 10ft room
        let estimate = estimate_room(Rect::new(0, 0, 120, 100), &DetectorConfig::default());

        assert_relative_eq!(estimate.flooring_sqft, 120.0);
        // Perimeter 44ft * 8ft walls
        assert_relative_eq!(estimate.drywall_sqft, 352.0);
        // 44ft / (16/12)ft on-center
        assert_eq!(estimate.studs, 33);
    }

    #[test]
    fn test_studs_never_below_one() {
        let estimate = estimate_room(Rect::new(0, 0, 1, 1), &DetectorConfig::default());
        assert_eq!(estimate.studs, 1);
    }

    #[test]
    fn test_areas_are_rounded() {
        let config = DetectorConfig {
            pixel_to_feet: 0.033,
            ..Default::default()
        };
        let estimate = estimate_room(Rect::new(0, 0, 7, 11), &config);

        // 0.231 * 0.363 = 0.083853 -> 0.08
        assert_relative_eq!(estimate.flooring_sqft, 0.08);
        assert_relative_eq!(estimate.flooring_sqft * 100.0, (estimate.flooring_sqft * 100.0).round());
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let totals = aggregate(&[]);

        assert_eq!(totals.flooring_sqft, 0.0);
        assert_eq!(totals.drywall_sqft, 0.0);
        assert_eq!(totals.studs, 0);
    }

    #[test]
    fn test_aggregate_sums_fields() {
        let config = DetectorConfig::default();
        let a = estimate_room(Rect::new(0, 0, 120, 100), &config);
        let b = estimate_room(Rect::new(200, 10, 80, 80), &config);

        let totals = aggregate(&[a, b]);

        assert_relative_eq!(totals.flooring_sqft, a.flooring_sqft + b.flooring_sqft);
        assert_relative_eq!(totals.drywall_sqft, a.drywall_sqft + b.drywall_sqft);
        assert_eq!(totals.studs, u64::from(a.studs) + u64::from(b.studs));
    }

    #[test]
    fn test_aggregate_is_additive_across_splits() {
        let config = DetectorConfig::default();
        let rooms: Vec<_> = [(120, 100), (80, 80), (55, 43), (200, 31)]
            .iter()
            .map(|&(w, h)| estimate_room(Rect::new(0, 0, w, h), &config))
            .collect();

        let whole = aggregate(&rooms);
        let left = aggregate(&rooms[..2]);
        let right = aggregate(&rooms[2..]);

        assert_relative_eq!(
            whole.flooring_sqft,
            left.flooring_sqft + right.flooring_sqft,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            whole.drywall_sqft,
            left.drywall_sqft + right.drywall_sqft,
            epsilon = 1e-9
        );
        assert_eq!(whole.studs, left.studs + right.studs);
    }
}
