//! Stem layer: stem rectangle and leaf ellipse.

use super::{PaintLayer, RenderContext};
use crate::style::StemSettings;

impl PaintLayer for StemSettings {
    /// Paints the stem sitting on top of the body, plus the small leaf
    /// hanging off its right side. Requires [`BodyBounds`](super::BodyBounds)
    /// on the context; without a body there is nothing to anchor to, so the
    /// layer paints nothing.
    fn paint(&self, ctx: &mut RenderContext) {
        let Some(body) = ctx.body else {
            return;
        };
        let geom = ctx.geom;
        let center = geom.center;

        let half_w = geom.px(self.width) / 2.0;
        let stem_top = body.top - geom.px(self.height);
        ctx.canvas.fill_rect(
            center - half_w,
            stem_top,
            center + half_w,
            body.top,
            self.color.into(),
        );

        let leaf = geom.px(self.leaf_size);
        if leaf >= 1.0 {
            // Bounding box [center + leaf/2, stem_top] .. [center + 2*leaf, stem_top + leaf].
            let cx = center + leaf * 1.25;
            let cy = stem_top + leaf / 2.0;
            ctx.canvas
                .fill_ellipse(cx, cy, leaf * 0.75, leaf / 2.0, self.leaf_color.into());
        }
    }
}
