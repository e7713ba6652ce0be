// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pdfium-backed rasterizer
//!
//! Requires the pdfium dynamic library on the system; binding happens
//! lazily on the first `rasterize` call.

use crate::{RasterError, Rasterizer, RenderedPage};
use pdfium_render::prelude::*;
use planest_vision::PixelBuffer;
use std::path::Path;

/// Renders page 1 of a PDF to an RGBA buffer via pdfium
#[derive(Debug, Clone)]
pub struct PdfiumRasterizer {
    /// Zoom factor applied when rendering (2.0 doubles the page's
    /// point size in pixels)
    zoom: f32,
}

impl PdfiumRasterizer {
    pub fn new(zoom: f32) -> Self {
        Self { zoom }
    }
}

impl Default for PdfiumRasterizer {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn rasterize(&self, path: &Path) -> Result<RenderedPage, RasterError> {
        let pdfium = Pdfium::default();
        let document = pdfium.load_pdf_from_file(path, None)?;

        let pages = document.pages();
        if pages.len() == 0 {
            return Err(RasterError::EmptyDocument);
        }

        let page = pages.first()?;
        let render_config = PdfRenderConfig::new().scale_page_by_factor(self.zoom);
        let bitmap = page.render_with_config(&render_config)?;

        let image = bitmap.as_image().into_rgba8();
        let (width, height) = (image.width(), image.height());
        tracing::debug!(width, height, zoom = self.zoom, "rendered PDF page 1");

        let buffer = PixelBuffer::from_rgba(image.into_raw(), width, height)?;
        Ok(RenderedPage {
            page_number: 1,
            buffer,
        })
    }
}
