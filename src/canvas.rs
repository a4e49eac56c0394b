//! Square RGBA pixel buffer with simple shape primitives.
//!
//! [`Canvas`] is the surface the paint layers draw onto. Primitives use
//! *occluding* semantics: a later draw replaces the pixels it covers,
//! including their alpha, rather than blending over them. This is what the
//! reference artwork was designed against, and it keeps rendering trivially
//! deterministic.
//!
//! Alpha compositing does exist in one place: [`Canvas::composite_centered`],
//! which the exporter uses to paste a downscaled icon onto the maskable
//! safe-zone background using the icon's own alpha as the mask.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// A square, mutable RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent canvas of `size` x `size` pixels.
    pub fn transparent(size: u32) -> Self {
        Self {
            image: RgbaImage::new(size, size),
        }
    }

    /// Creates a canvas filled with a solid color.
    pub fn filled(size: u32, color: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, color),
        }
    }

    /// Returns the side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Returns the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Borrows the underlying image buffer.
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the canvas, returning the underlying image buffer.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // ---- Primitives ----

    /// Fills the entire canvas with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Fills the axis-aligned ellipse centered at `(cx, cy)` with radii
    /// `(rx, ry)`.
    ///
    /// Coordinates are in pixels; a pixel is covered when its center lies
    /// inside the ellipse. Degenerate radii (smaller than half a pixel)
    /// paint nothing, so shapes collapse cleanly at tiny output sizes.
    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgba<u8>) {
        if rx < 0.5 || ry < 0.5 {
            return;
        }

        let size = self.size() as i64;
        let x0 = ((cx - rx).floor() as i64).max(0);
        let x1 = ((cx + rx).ceil() as i64).min(size - 1);
        let y0 = ((cy - ry).floor() as i64).max(0);
        let y1 = ((cy + ry).ceil() as i64).min(size - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x as f32 + 0.5 - cx) / rx;
                let dy = (y as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Fills the axis-aligned rectangle spanning `[x0, x1) x [y0, y1)`.
    ///
    /// The span is clamped to the canvas; an empty or inverted span paints
    /// nothing.
    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
        let size = self.size() as i64;
        let x0 = (x0.round() as i64).max(0);
        let y0 = (y0.round() as i64).max(0);
        let x1 = (x1.round() as i64).min(size);
        let y1 = (y1.round() as i64).min(size);

        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    // ---- Compositing ----

    /// Returns a copy of this canvas resized to `size` x `size` pixels,
    /// using Lanczos3 resampling.
    pub fn resized(&self, size: u32) -> Self {
        Self {
            image: imageops::resize(&self.image, size, size, FilterType::Lanczos3),
        }
    }

    /// Alpha-composites `other` onto this canvas, centered.
    ///
    /// Unlike the shape primitives this is a real source-over blend, so the
    /// transparent parts of `other` let this canvas show through.
    pub fn composite_centered(&mut self, other: &Canvas) {
        let offset = (self.size() as i64 - other.size() as i64) / 2;
        imageops::overlay(&mut self.image, &other.image, offset, offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn transparent_canvas_dimensions() {
        let canvas = Canvas::transparent(48);
        assert_eq!(canvas.size(), 48);
        assert_eq!(canvas.pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(canvas.pixel(47, 47).0, [0, 0, 0, 0]);
    }

    #[test]
    fn filled_canvas_is_solid() {
        let canvas = Canvas::filled(10, RED);
        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(9, 9), RED);
    }

    #[test]
    fn ellipse_covers_center_not_corners() {
        let mut canvas = Canvas::transparent(100);
        canvas.fill_ellipse(50.0, 50.0, 40.0, 30.0, BLUE);

        assert_eq!(canvas.pixel(50, 50), BLUE);
        // Along the axes, just inside the radii.
        assert_eq!(canvas.pixel(85, 50), BLUE);
        assert_eq!(canvas.pixel(50, 75), BLUE);
        // Bounding-box corners stay untouched.
        assert_eq!(canvas.pixel(11, 21).0, [0, 0, 0, 0]);
        assert_eq!(canvas.pixel(89, 79).0, [0, 0, 0, 0]);
    }

    #[test]
    fn degenerate_ellipse_paints_nothing() {
        let mut canvas = Canvas::transparent(8);
        canvas.fill_ellipse(4.0, 4.0, 0.2, 0.2, BLUE);
        canvas.fill_ellipse(4.0, 4.0, -3.0, 2.0, BLUE);
        assert_eq!(canvas, Canvas::transparent(8));
    }

    #[test]
    fn ellipse_clamps_to_canvas_bounds() {
        let mut canvas = Canvas::transparent(16);
        // Mostly off-canvas; must not panic.
        canvas.fill_ellipse(-4.0, 8.0, 10.0, 10.0, RED);
        assert_eq!(canvas.pixel(0, 8), RED);
        assert_eq!(canvas.pixel(15, 8).0, [0, 0, 0, 0]);
    }

    #[test]
    fn rect_is_half_open_and_clamped() {
        let mut canvas = Canvas::transparent(10);
        canvas.fill_rect(2.0, 3.0, 5.0, 6.0, RED);

        assert_eq!(canvas.pixel(2, 3), RED);
        assert_eq!(canvas.pixel(4, 5), RED);
        assert_eq!(canvas.pixel(5, 6).0, [0, 0, 0, 0]);

        // Off-canvas spans are clamped, inverted spans are empty.
        canvas.fill_rect(8.0, 8.0, 20.0, 20.0, BLUE);
        assert_eq!(canvas.pixel(9, 9), BLUE);
        canvas.fill_rect(6.0, 6.0, 4.0, 4.0, BLUE);
        assert_eq!(canvas.pixel(5, 5).0, [0, 0, 0, 0]);
    }

    #[test]
    fn later_draws_occlude_earlier_ones() {
        let mut canvas = Canvas::transparent(20);
        canvas.fill_ellipse(10.0, 10.0, 8.0, 8.0, RED);
        canvas.fill_ellipse(10.0, 10.0, 4.0, 4.0, Rgba([0, 0, 255, 40]));

        // The inner draw replaced alpha outright instead of blending.
        assert_eq!(canvas.pixel(10, 10).0, [0, 0, 255, 40]);
        assert_eq!(canvas.pixel(3, 10), RED);
    }

    #[test]
    fn composite_centered_blends_with_alpha() {
        let mut base = Canvas::filled(10, RED);
        let mut top = Canvas::transparent(4);
        top.fill_rect(0.0, 0.0, 4.0, 4.0, BLUE);

        base.composite_centered(&top);

        assert_eq!(base.pixel(5, 5), BLUE);
        // Outside the pasted region the base shows through.
        assert_eq!(base.pixel(0, 0), RED);
        assert_eq!(base.pixel(9, 9), RED);
    }

    #[test]
    fn resized_preserves_squareness() {
        let canvas = Canvas::filled(64, RED);
        let small = canvas.resized(16);
        assert_eq!(small.size(), 16);
        assert_eq!(small.pixel(8, 8), RED);
    }
}
