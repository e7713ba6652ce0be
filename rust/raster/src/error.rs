// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for rasterization and orchestration

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering a plan PDF or summarizing a page
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("PDF file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("the provided PDF does not contain any pages")]
    EmptyDocument,

    #[error("failed to render PDF page: {0}")]
    Pdf(#[from] pdfium_render::prelude::PdfiumError),

    #[error(transparent)]
    Vision(#[from] planest_vision::VisionError),
}
