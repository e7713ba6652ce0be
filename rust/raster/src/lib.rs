// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PDF page rasterization and plan summary orchestration
//!
//! The detection core consumes a pixel buffer and knows nothing about
//! PDFs. This crate supplies that buffer: the [`Rasterizer`] trait is
//! the boundary, [`PdfiumRasterizer`] the production implementation
//! (pdfium, Chromium's PDF library), and [`summarize`] the
//! orchestration that ties rendering, detection and aggregation into
//! the program-level summary.

pub mod error;
pub mod pdfium;
pub mod summary;

pub use error::RasterError;
pub use pdfium::PdfiumRasterizer;
pub use summary::{analyze, summarize, PlanReport, PlanSummary};

use planest_vision::PixelBuffer;
use std::path::Path;

/// One rendered PDF page, ready for detection
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 1-based page number that was rendered
    pub page_number: u32,
    /// RGBA pixel data of the rendered page
    pub buffer: PixelBuffer,
}

/// Boundary to the external PDF renderer.
///
/// Implementations render page 1 of the document at a fixed zoom and
/// hand back the pixels. Documents with zero pages are an
/// [`RasterError::EmptyDocument`]; pages beyond the first are ignored.
pub trait Rasterizer {
    fn rasterize(&self, path: &Path) -> Result<RenderedPage, RasterError>;
}
