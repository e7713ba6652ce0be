// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planest CLI - material estimates from a floor plan PDF.
//!
//! Renders page 1 of the given PDF via pdfium, detects room-like
//! regions and prints one row per room (flooring, drywall, studs)
//! plus plan totals. `--json` emits the summary export shape instead.
//!
//! Requires the pdfium dynamic library on the system.

use anyhow::Context;
use clap::Parser;
use planest_raster::{analyze, PdfiumRasterizer, PlanSummary};
use planest_vision::DetectorConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "planest", version, about = "Material estimation from floor plan PDFs")]
struct Args {
    /// Path to the floor plan PDF (page 1 is analyzed)
    pdf: PathBuf,

    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Render zoom factor applied to the page
    #[arg(long, default_value_t = 2.0)]
    zoom: f32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = DetectorConfig::default();
    let rasterizer = PdfiumRasterizer::new(args.zoom);
    tracing::info!(pdf = %args.pdf.display(), zoom = args.zoom, "analyzing floor plan");

    let report = analyze(&rasterizer, &args.pdf, &config)
        .with_context(|| format!("failed to analyze {}", args.pdf.display()))?;

    if args.json {
        let summary = PlanSummary::from(&report);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Page {} ({}x{} px): {} room(s) detected",
        report.page_number,
        report.image_size[0],
        report.image_size[1],
        report.rooms.len()
    );
    println!(
        "{:>6}  {:>16}  {:>15}  {:>6}",
        "Room #", "Flooring (sqft)", "Drywall (sqft)", "Studs"
    );
    for (index, room) in report.rooms.iter().enumerate() {
        println!(
            "{:>6}  {:>16.2}  {:>15.2}  {:>6}",
            index + 1,
            room.flooring_sqft,
            room.drywall_sqft,
            room.studs
        );
    }
    println!(
        "{:>6}  {:>16.2}  {:>15.2}  {:>6}",
        "Total", report.totals.flooring_sqft, report.totals.drywall_sqft, report.totals.studs
    );

    Ok(())
}
