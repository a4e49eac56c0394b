//! Body layer: the segmented pumpkin body.

use super::{BodyBounds, PaintLayer, RenderContext};
use crate::style::BodySettings;

impl PaintLayer for BodySettings {
    /// Paints the body as overlapping vertical segment ellipses.
    ///
    /// Each segment is drawn in concentric passes, outermost shade first,
    /// shrinking by `inset_step` per pass; the overwrite semantics of the
    /// canvas turn the passes into a stepped gradient. Records
    /// [`BodyBounds`] on the context for the stem and ridge layers.
    fn paint(&self, ctx: &mut RenderContext) {
        let geom = ctx.geom;
        let center = geom.center;

        let segments = self.segments.max(1);
        let seg_w = self.width / segments as f32;
        let top = center - geom.px(self.height) / 2.0;
        let bottom = center + geom.px(self.height) / 2.0 - geom.px(self.bottom_trim);

        for i in 0..segments {
            let x_offset = (i as f32 - (segments - 1) as f32 / 2.0) * seg_w;
            let seg_center = center + geom.px(x_offset);
            let seg_rx = geom.px(seg_w) / 2.0;

            for (pass, shade) in self.shades.iter().enumerate() {
                let inset = geom.px(pass as f32 * self.inset_step);
                let rx = seg_rx - inset;
                let ry = (bottom - top) / 2.0 - inset;
                let cy = (top + bottom) / 2.0;
                ctx.canvas.fill_ellipse(
                    seg_center,
                    cy,
                    rx,
                    ry,
                    shade.with_alpha(self.shade_alpha).into(),
                );
            }
        }

        ctx.body = Some(BodyBounds {
            top,
            bottom,
            half_width: geom.px(self.width) / 2.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Geometry;
    use crate::style::PumpkinStyle;

    fn painted(size: u32) -> RenderContext {
        let style = PumpkinStyle::default();
        let mut ctx = RenderContext::new(Geometry::new(size, style.reference_size), true);
        style.body.paint(&mut ctx);
        ctx
    }

    #[test]
    fn records_body_bounds() {
        let ctx = painted(512);
        let bounds = ctx.body.expect("body layer records its bounds");
        assert_eq!(bounds.top, 256.0 - 90.0);
        assert_eq!(bounds.bottom, 256.0 + 90.0 - 20.0);
        assert_eq!(bounds.half_width, 80.0);
    }

    #[test]
    fn paints_center_with_shade_alpha() {
        let ctx = painted(512);
        // The innermost pass of the middle segment covers the body center.
        let pixel = ctx.canvas.pixel(256, 246);
        assert_eq!(pixel.0[3], 200);
    }

    #[test]
    fn tiny_canvas_does_not_panic() {
        let ctx = painted(4);
        assert_eq!(ctx.canvas.size(), 4);
    }

    #[test]
    fn single_segment_body_is_centered() {
        let style = PumpkinStyle::flat();
        let mut ctx = RenderContext::new(Geometry::new(512, style.reference_size), true);
        style.body.paint(&mut ctx);

        assert_eq!(ctx.canvas.pixel(256, 246).0[3], 255);
        // A single 160-unit-wide segment leaves pixels past its radius bare.
        assert_eq!(ctx.canvas.pixel(256 - 85, 246).0[3], 0);
    }
}
