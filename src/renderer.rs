//! The icon renderer: turns a [`PumpkinStyle`] into pixels.

use crate::canvas::Canvas;
use crate::layer::{Geometry, PaintLayer, RenderContext};
use crate::style::PumpkinStyle;

/// Renders pumpkin icons at arbitrary pixel sizes.
///
/// Rendering is a pure function of the style and the arguments: the same
/// `(size, foreground_only)` pair always produces a pixel-identical canvas.
///
/// # Example
///
/// ```
/// use pumpkin_icons::IconRenderer;
///
/// let renderer = IconRenderer::default();
/// let canvas = renderer.render(192, false);
/// assert_eq!(canvas.size(), 192);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    style: PumpkinStyle,
}

impl IconRenderer {
    /// Creates a renderer for the given style.
    pub fn new(style: PumpkinStyle) -> Self {
        Self { style }
    }

    /// Returns the style this renderer paints.
    pub fn style(&self) -> &PumpkinStyle {
        &self.style
    }

    /// Renders the pumpkin at `size` x `size` pixels.
    ///
    /// With `foreground_only` the page fill is suppressed and the artwork
    /// sits on full transparency; otherwise the canvas is backed by the
    /// style's opaque page color.
    ///
    /// Sizes below roughly 8 px still render, but shapes smaller than a
    /// pixel collapse and are simply not painted.
    pub fn render(&self, size: u32, foreground_only: bool) -> Canvas {
        let geom = Geometry::new(size, self.style.reference_size);
        let mut ctx = RenderContext::new(geom, foreground_only);

        // Fixed z-order; later layers occlude earlier ones.
        self.style.background.paint(&mut ctx);
        self.style.body.paint(&mut ctx);
        self.style.stem.paint(&mut ctx);
        if let Some(ridges) = &self.style.ridges {
            ridges.paint(&mut ctx);
        }
        if let Some(accents) = &self.style.accents {
            accents.paint(&mut ctx);
        }

        ctx.canvas
    }
}
