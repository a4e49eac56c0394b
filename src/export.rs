//! Batch export of the icon manifest to PNG files.
//!
//! [`BatchExporter`] walks an ordered list of [`IconSpec`]s, renders each
//! one, applies maskable safe-zone padding where flagged, and writes PNGs,
//! creating parent directories as needed. The stock manifest in
//! [`icon_manifest`] reproduces the path and size table the app packaging
//! toolchains expect; those strings are an external contract and must not
//! be reworded.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::canvas::Canvas;
use crate::renderer::IconRenderer;
use crate::style::{Color, ORANGE_PRIMARY};

/// Fraction of each edge reserved as the maskable safe zone.
pub const MASKABLE_PADDING_RATIO: f32 = 0.1;

/// Opaque accent filling the maskable safe zone.
pub const MASKABLE_ACCENT: Color = ORANGE_PRIMARY;

// ============================================================================
// IconSpec
// ============================================================================

/// One unit of export work: a path, a pixel size, and style flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Output path, relative to the exporter root.
    pub path: PathBuf,

    /// Side length of the output image in pixels.
    pub size: u32,

    /// Pad the icon into an accent-colored safe zone for platform masks.
    pub maskable: bool,

    /// Render on the opaque page fill instead of transparency.
    pub solid_background: bool,
}

impl IconSpec {
    /// Creates a spec for a transparent-background icon.
    pub fn new(path: impl Into<PathBuf>, size: u32) -> Self {
        Self {
            path: path.into(),
            size,
            maskable: false,
            solid_background: false,
        }
    }

    /// Marks this icon as maskable.
    pub fn maskable(mut self) -> Self {
        self.maskable = true;
        self
    }

    /// Renders this icon on the opaque page fill.
    pub fn with_solid_background(mut self) -> Self {
        self.solid_background = true;
        self
    }
}

/// The stock manifest: every icon the app packaging toolchains require.
///
/// Paths and sizes follow the Android mipmap, iOS appiconset, and web icon
/// conventions exactly.
pub fn icon_manifest() -> Vec<IconSpec> {
    let mut specs = Vec::new();

    // Android launcher icons, one per density bucket.
    for (bucket, size) in [
        ("mdpi", 48),
        ("hdpi", 72),
        ("xhdpi", 96),
        ("xxhdpi", 144),
        ("xxxhdpi", 192),
    ] {
        specs.push(IconSpec::new(
            format!("android/app/src/main/res/mipmap-{bucket}/ic_launcher.png"),
            size,
        ));
    }

    // iOS appiconset entries: (point size label, scale, pixel size).
    for (label, scale, size) in [
        ("20x20", 1, 20),
        ("20x20", 2, 40),
        ("20x20", 3, 60),
        ("29x29", 1, 29),
        ("29x29", 2, 58),
        ("29x29", 3, 87),
        ("40x40", 1, 40),
        ("40x40", 2, 80),
        ("40x40", 3, 120),
        ("60x60", 2, 120),
        ("60x60", 3, 180),
        ("76x76", 1, 76),
        ("76x76", 2, 152),
        ("83.5x83.5", 2, 167),
        ("1024x1024", 1, 1024),
    ] {
        specs.push(IconSpec::new(
            format!(
                "ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-{label}@{scale}x.png"
            ),
            size,
        ));
    }

    // Web icons, PWA maskable variants, and the favicon.
    specs.push(IconSpec::new("web/icons/Icon-192.png", 192));
    specs.push(IconSpec::new("web/icons/Icon-512.png", 512));
    specs.push(IconSpec::new("web/icons/Icon-maskable-192.png", 192).maskable());
    specs.push(IconSpec::new("web/icons/Icon-maskable-512.png", 512).maskable());
    specs.push(IconSpec::new("web/favicon.png", 32));

    // Base assets consumed by the launcher-icon tooling.
    specs.push(IconSpec::new("assets/icon/app_icon.png", 1024).with_solid_background());
    specs.push(IconSpec::new("assets/icon/app_icon_foreground.png", 1024));

    specs
}

// ============================================================================
// ExportError
// ============================================================================

/// An export failure, tagged with the path that caused it.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

// ============================================================================
// BatchExporter
// ============================================================================

/// Renders and writes a list of icon specs.
///
/// Specs are processed in order; the first failure aborts the batch, so a
/// broken path is never silently skipped. Each spec is independent, so a
/// rerun after fixing the problem simply overwrites what was already
/// written.
pub struct BatchExporter {
    renderer: IconRenderer,
    root: PathBuf,
}

impl BatchExporter {
    /// Creates an exporter writing relative to the current directory.
    pub fn new(renderer: IconRenderer) -> Self {
        Self::with_root(renderer, ".")
    }

    /// Creates an exporter writing relative to `root`.
    pub fn with_root(renderer: IconRenderer, root: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            root: root.into(),
        }
    }

    /// Renders and writes every spec, printing one progress line per file.
    pub fn export_all(&self, specs: &[IconSpec]) -> Result<(), ExportError> {
        for spec in specs {
            println!("creating {} ({}x{})", spec.path.display(), spec.size, spec.size);
            self.export_one(spec)?;
        }
        Ok(())
    }

    fn export_one(&self, spec: &IconSpec) -> Result<(), ExportError> {
        let path = self.root.join(&spec.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
        }

        let mut canvas = self.renderer.render(spec.size, !spec.solid_background);
        if spec.maskable {
            canvas = pad_for_mask(&canvas, MASKABLE_PADDING_RATIO, MASKABLE_ACCENT);
        }

        save_png(&canvas, &path)
    }
}

/// Pads a rendered icon into an accent-colored maskable safe zone.
///
/// The icon is downscaled by `ratio` per edge and alpha-composited centered
/// onto a fresh canvas filled with `accent`, so the outer border is solid
/// accent at full opacity.
pub fn pad_for_mask(icon: &Canvas, ratio: f32, accent: Color) -> Canvas {
    let size = icon.size();
    let padding = (size as f32 * ratio) as u32;
    let inner = size.saturating_sub(2 * padding).max(1);

    let mut padded = Canvas::filled(size, accent.into());
    padded.composite_centered(&icon.resized(inner));
    padded
}

fn save_png(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    canvas.as_image().save(path).map_err(|source| ExportError::Image {
        path: path.to_path_buf(),
        source,
    })
}
