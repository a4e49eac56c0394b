//! Accent layer: highlight ramp and decorative dots.

use super::{PaintLayer, RenderContext};
use crate::style::AccentSettings;

impl PaintLayer for AccentSettings {
    /// Paints the faked radial highlight and the accent dots.
    ///
    /// The highlight is a stack of concentric ellipses whose alpha ramps
    /// down toward the center, one ring per pixel of radius. With occluding
    /// draw semantics this reproduces the reference gradient exactly,
    /// including the nearly transparent innermost rings.
    fn paint(&self, ctx: &mut RenderContext) {
        let geom = ctx.geom;
        let center = geom.center;

        let diameter = geom.px(self.highlight_size);
        let steps = (diameter / 2.0) as u32;
        if steps > 0 {
            let cx = center + geom.px(self.highlight_offset.0) + diameter / 2.0;
            let cy = center + geom.px(self.highlight_offset.1) + diameter / 2.0;

            for ring in 0..steps {
                let alpha = (100.0 * (1.0 - ring as f32 / steps as f32)) as u8;
                if alpha == 0 {
                    continue;
                }
                let radius = diameter / 2.0 - ring as f32;
                ctx.canvas.fill_ellipse(
                    cx,
                    cy,
                    radius,
                    radius,
                    self.highlight_color.with_alpha(alpha).into(),
                );
            }
        }

        for dot in &self.dots {
            let cx = center + geom.px(dot.offset.0);
            let cy = center + geom.px(dot.offset.1);
            let radius = geom.px(dot.radius);
            ctx.canvas.fill_ellipse(cx, cy, radius, radius, dot.color.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Geometry;
    use crate::style::PumpkinStyle;

    fn accents() -> AccentSettings {
        PumpkinStyle::default()
            .accents
            .expect("default style has accents")
    }

    fn painted(size: u32) -> RenderContext {
        let style = PumpkinStyle::default();
        let mut ctx = RenderContext::new(Geometry::new(size, style.reference_size), true);
        accents().paint(&mut ctx);
        ctx
    }

    #[test]
    fn highlight_alpha_ramps_down_toward_center() {
        let ctx = painted(512);
        // Highlight occupies [196, 176] .. [276, 256]; its center is (236, 216).
        let rim = ctx.canvas.pixel(236, 177);
        let inner = ctx.canvas.pixel(236, 216);
        assert!(rim.0[3] > 90);
        assert!(inner.0[3] < 10);
    }

    #[test]
    fn dots_carry_their_configured_alpha() {
        let ctx = painted(512);
        let style = accents();

        // First dot: offset (90, -80), radius 8.
        assert_eq!(ctx.canvas.pixel(256 + 90, 256 - 80), style.dots[0].color.into());
        // Third dot: offset (85, 20), radius 5, alpha 120.
        assert_eq!(ctx.canvas.pixel(256 + 85, 256 + 20).0[3], 120);
    }

    #[test]
    fn tiny_render_skips_the_highlight() {
        // At 8 px the highlight diameter is 1.25 px, so no rings fit.
        let ctx = painted(8);
        assert_eq!(ctx.canvas.size(), 8);
    }
}
