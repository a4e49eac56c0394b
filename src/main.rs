//! Generates every pumpkin app icon required for packaging.
//!
//! Bare entry point, no arguments: renders the stock manifest into the
//! conventional Android/iOS/web icon directories relative to the current
//! directory.

use std::process::ExitCode;

use pumpkin_icons::{icon_manifest, BatchExporter, IconRenderer};

fn main() -> ExitCode {
    println!("Generating pumpkin app icons...");

    let exporter = BatchExporter::new(IconRenderer::default());
    if let Err(err) = exporter.export_all(&icon_manifest()) {
        eprintln!("icon generation failed: {err}");
        return ExitCode::FAILURE;
    }

    println!("All icons generated successfully.");
    ExitCode::SUCCESS
}
