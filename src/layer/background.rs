//! Background layer: page fill and halo disc.

use super::{PaintLayer, RenderContext};
use crate::style::BackgroundSettings;

impl PaintLayer for BackgroundSettings {
    /// Paints the opaque page fill (skipped for foreground-only renders)
    /// and the circular halo the pumpkin sits on.
    fn paint(&self, ctx: &mut RenderContext) {
        if !ctx.foreground_only {
            ctx.canvas.fill(self.page.into());
        }

        let radius = ctx.geom.px(self.halo_radius);
        let center = ctx.geom.center;
        ctx.canvas
            .fill_ellipse(center, center, radius, radius, self.halo.into());
    }
}
