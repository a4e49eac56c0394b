//! Ridge layer: vertical ridge lines on the body.

use super::{PaintLayer, RenderContext};
use crate::style::RidgeSettings;

impl PaintLayer for RidgeSettings {
    /// Paints `count` vertical lines spread symmetrically about the body's
    /// horizontal center. Each line is shortened by the elliptical profile
    /// of the body at its horizontal offset, so ridges never poke outside
    /// the silhouette. Requires [`BodyBounds`](super::BodyBounds).
    fn paint(&self, ctx: &mut RenderContext) {
        let Some(body) = ctx.body else {
            return;
        };
        let geom = ctx.geom;
        let half_w = geom.px(self.width).max(1.0) / 2.0;

        for i in 0..self.count {
            // Fractions in (-1, 1), mirrored around zero.
            let fraction = (i + 1) as f32 / (self.count + 1) as f32 * 2.0 - 1.0;
            let x = geom.center + fraction * body.half_width;

            let profile = (1.0 - fraction * fraction).max(0.0).sqrt();
            let half_len = body.half_height() * profile * 0.9;
            if half_len < 1.0 {
                continue;
            }

            let cy = body.center_y();
            ctx.canvas.fill_rect(
                x - half_w,
                cy - half_len,
                x + half_w,
                cy + half_len,
                self.color.into(),
            );
        }
    }
}
