//! Paint layers for the pumpkin artwork.
//!
//! Rendering is a fixed pipeline of layers, each owning one part of the
//! drawing: background, body, stem, ridges, accents. Layers paint in
//! z-order onto the shared [`RenderContext`]; a later layer occludes an
//! earlier one wherever their shapes overlap.
//!
//! Layers communicate downstream through the context: the body layer
//! records its silhouette as [`BodyBounds`], which the stem and ridge
//! layers anchor themselves to.

pub mod accents;
pub mod background;
pub mod body;
pub mod ridges;
pub mod stem;

use crate::canvas::Canvas;

// ============================================================================
// Geometry
// ============================================================================

/// Scaling information for one render.
///
/// All shape dimensions in a [`PumpkinStyle`](crate::PumpkinStyle) are
/// design units on a reference canvas; `Geometry` converts them to pixels
/// for the actual output size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Output side length in pixels.
    pub size: u32,

    /// `size / reference_size`.
    pub scale: f32,

    /// Canvas midpoint in pixels (both axes).
    pub center: f32,
}

impl Geometry {
    /// Creates the geometry for rendering at `size` pixels against a
    /// `reference_size` design.
    pub fn new(size: u32, reference_size: u32) -> Self {
        Self {
            size,
            scale: size as f32 / reference_size.max(1) as f32,
            center: size as f32 / 2.0,
        }
    }

    /// Converts a length in design units to pixels.
    pub fn px(&self, design_units: f32) -> f32 {
        design_units * self.scale
    }
}

// ============================================================================
// Inter-layer properties
// ============================================================================

/// The body silhouette, in pixels, recorded by the body layer.
///
/// Downstream layers position themselves relative to these bounds: the stem
/// sits on `top`, ridge lines stay inside the widest segment ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyBounds {
    /// Top edge of the body.
    pub top: f32,

    /// Bottom edge of the body.
    pub bottom: f32,

    /// Half the total body width.
    pub half_width: f32,
}

impl BodyBounds {
    /// Vertical midpoint of the body.
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Half the body height.
    pub fn half_height(&self) -> f32 {
        (self.bottom - self.top) / 2.0
    }
}

// ============================================================================
// Render context
// ============================================================================

/// Mutable state threaded through the paint pipeline.
pub struct RenderContext {
    /// The canvas being painted.
    pub canvas: Canvas,

    /// Scaling for this render.
    pub geom: Geometry,

    /// When true, the background layer leaves the page transparent and only
    /// the artwork itself is painted.
    pub foreground_only: bool,

    /// Set by the body layer; `None` until it has painted.
    pub body: Option<BodyBounds>,
}

impl RenderContext {
    /// Creates a context with a transparent canvas of `geom.size` pixels.
    pub fn new(geom: Geometry, foreground_only: bool) -> Self {
        Self {
            canvas: Canvas::transparent(geom.size),
            geom,
            foreground_only,
            body: None,
        }
    }
}

// ============================================================================
// PaintLayer
// ============================================================================

/// A self-contained step of the paint pipeline.
///
/// Implementations read their own settings plus whatever upstream layers
/// recorded on the context, and draw onto `ctx.canvas`. Painting must be a
/// pure function of the settings and the context so renders stay
/// deterministic.
pub trait PaintLayer {
    fn paint(&self, ctx: &mut RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_scale_and_center() {
        let geom = Geometry::new(256, 512);
        assert_eq!(geom.scale, 0.5);
        assert_eq!(geom.center, 128.0);
        assert_eq!(geom.px(160.0), 80.0);
    }

    #[test]
    fn geometry_survives_zero_reference() {
        let geom = Geometry::new(64, 0);
        assert!(geom.scale.is_finite());
    }

    #[test]
    fn body_bounds_derived_values() {
        let bounds = BodyBounds {
            top: 20.0,
            bottom: 100.0,
            half_width: 30.0,
        };
        assert_eq!(bounds.center_y(), 60.0);
        assert_eq!(bounds.half_height(), 40.0);
    }

    #[test]
    fn fresh_context_has_no_body() {
        let ctx = RenderContext::new(Geometry::new(32, 512), true);
        assert!(ctx.body.is_none());
        assert_eq!(ctx.canvas.size(), 32);
    }
}
