// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! External contour extraction from binary images

use crate::types::Rect;
use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

/// Find the outer contours of a binary image.
///
/// Only top-level outer borders are kept; holes and borders nested
/// inside them are ignored. Each contour is reduced to its
/// direction-change vertices.
pub fn outer_contours(binary: &GrayImage) -> Vec<Vec<Point<u32>>> {
    find_contours::<u32>(binary)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
        .map(|contour| chain_approx(&contour.points))
        .collect()
}

/// Compress a contour to the vertices where the chain direction
/// changes. Collinear runs along the border collapse to their
/// endpoints; the bounding box is unaffected.
fn chain_approx(points: &[Point<u32>]) -> Vec<Point<u32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point<u32>, b: Point<u32>| {
        (
            i64::from(b.x) - i64::from(a.x),
            i64::from(b.y) - i64::from(a.y),
        )
    };

    let mut simplified = Vec::new();
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let current = points[i];
        let next = points[(i + 1) % n];

        if step(prev, current) != step(current, next) {
            simplified.push(current);
        }
    }

    if simplified.is_empty() {
        // Degenerate chain (e.g. a straight back-and-forth run)
        simplified.push(points[0]);
    }

    simplified
}

/// Smallest axis-aligned rectangle enclosing a contour
pub fn bounding_rect(points: &[Point<u32>]) -> Option<Rect> {
    let first = points.first()?;

    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;

    for point in &points[1..] {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Some(Rect::new(
        min_x,
        min_y,
        max_x - min_x + 1,
        max_y - min_y + 1,
    ))
}
