//! pumpkin-icons: procedural app icon rendering and export
//!
//! This crate draws a stylized pumpkin icon and exports it as PNG files at
//! every size required for mobile/web app packaging (Android mipmaps, iOS
//! appiconset, web icons, maskable PWA icons).
//!
//! # Example
//!
//! ```no_run
//! use pumpkin_icons::{icon_manifest, BatchExporter, IconRenderer, PumpkinStyle};
//!
//! // Render a single icon in memory.
//! let renderer = IconRenderer::new(PumpkinStyle::default());
//! let canvas = renderer.render(192, false);
//! assert_eq!(canvas.size(), 192);
//!
//! // Or export the full packaging manifest to disk.
//! let exporter = BatchExporter::new(renderer);
//! exporter.export_all(&icon_manifest()).unwrap();
//! ```
//!
//! # Styles
//!
//! The artwork is fully parameterized by [`PumpkinStyle`]: every color,
//! offset, and shape dimension is a named field, and styles serialize to
//! JSON for storage. Two presets ship with the crate, the detailed default
//! and the simpler [`PumpkinStyle::flat`] variant.

mod canvas;
mod export;
mod layer;
mod renderer;
mod style;

pub use canvas::Canvas;
pub use export::{
    icon_manifest, pad_for_mask, BatchExporter, ExportError, IconSpec, MASKABLE_ACCENT,
    MASKABLE_PADDING_RATIO,
};
pub use layer::{BodyBounds, Geometry, PaintLayer, RenderContext};
pub use renderer::IconRenderer;
pub use style::{
    AccentDot, AccentSettings, BackgroundSettings, BodySettings, Color, PumpkinStyle,
    RidgeSettings, StemSettings, CREAM, HIGHLIGHT_AMBER, LEAF_GREEN, ORANGE_DEEP, ORANGE_MID,
    ORANGE_PRIMARY, STEM_GREEN,
};
