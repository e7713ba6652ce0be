// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page orchestration: rasterize, detect, aggregate, report
//!
//! This is the only layer that turns detection failures into something
//! user-facing. A failed detection degrades to zero rooms so the
//! rendered page remains usable; file and document errors abort.

use crate::{RasterError, Rasterizer};
use planest_vision::{aggregate, detect, DetectorConfig, RoomEstimate, Totals};
use serde::Serialize;
use std::path::Path;

/// Full per-page analysis: estimates plus the derived summary fields
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    /// 1-based page number that was analyzed
    pub page_number: u32,
    /// Rendered page size in pixels, `[width, height]`
    pub image_size: [u32; 2],
    /// Detected rooms, largest flooring area first
    pub rooms: Vec<RoomEstimate>,
    /// Plan-level material totals
    pub totals: Totals,
}

/// Program-level summary export shape
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub page_number: u32,
    pub image_size: [u32; 2],
    pub room_count: usize,
    pub totals: Totals,
}

impl From<&PlanReport> for PlanSummary {
    fn from(report: &PlanReport) -> Self {
        Self {
            page_number: report.page_number,
            image_size: report.image_size,
            room_count: report.rooms.len(),
            totals: report.totals,
        }
    }
}

/// Render page 1 of `path`, detect rooms and aggregate materials.
///
/// The path is checked before any rendering happens; a missing file
/// never reaches the rasterizer. Detection failures are logged and
/// reported as zero rooms rather than propagated.
pub fn analyze(
    rasterizer: &impl Rasterizer,
    path: impl AsRef<Path>,
    config: &DetectorConfig,
) -> Result<PlanReport, RasterError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RasterError::FileNotFound(path.to_path_buf()));
    }

    let page = rasterizer.rasterize(path)?;
    let rooms = match detect(&page.buffer, config) {
        Ok(rooms) => rooms,
        Err(err) => {
            tracing::warn!(error = %err, "room detection failed, reporting zero rooms");
            Vec::new()
        }
    };
    let totals = aggregate(&rooms);

    Ok(PlanReport {
        page_number: page.page_number,
        image_size: [page.buffer.width(), page.buffer.height()],
        rooms,
        totals,
    })
}

/// [`analyze`], reduced to the summary export shape
pub fn summarize(
    rasterizer: &impl Rasterizer,
    path: impl AsRef<Path>,
    config: &DetectorConfig,
) -> Result<PlanSummary, RasterError> {
    analyze(rasterizer, path, config).map(|report| PlanSummary::from(&report))
}
