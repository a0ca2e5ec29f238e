//! Square raster canvas with the drawing primitives the icon plan needs.
//!
//! The canvas is an opaque white-backed RGBA buffer owned for the duration
//! of one rendering call. All primitives clamp to the canvas bounds.

use image::{DynamicImage, RgbImage, Rgba, RgbaImage};
use palette::Srgb;

/// A mutable square pixel buffer of side `size`.
pub struct Canvas {
    pixels: RgbaImage,
    size: u32,
}

impl Canvas {
    /// Creates a white canvas of the given square dimension.
    pub fn new(size: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255])),
            size,
        }
    }

    /// The canvas edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Read access to the underlying buffer, mainly for probing in tests.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Fills the whole canvas with a vertical gradient.
    ///
    /// Each row is interpolated between `top` and `bottom` by its normalized
    /// position `y / size`, so the bottom endpoint is approached but never
    /// quite reached.
    pub fn fill_vertical_gradient(&mut self, top: Srgb<u8>, bottom: Srgb<u8>) {
        let top = top.into_format::<f32>();
        let bottom = bottom.into_format::<f32>();

        for y in 0..self.size {
            let ratio = y as f32 / self.size as f32;
            let row = Srgb::new(
                top.red + (bottom.red - top.red) * ratio,
                top.green + (bottom.green - top.green) * ratio,
                top.blue + (bottom.blue - top.blue) * ratio,
            )
            .into_format::<u8>();
            let pixel = Rgba([row.red, row.green, row.blue, 255]);

            for x in 0..self.size {
                self.pixels.put_pixel(x, y, pixel);
            }
        }
    }

    /// Fills a circle centered at `(cx, cy)` with a solid color.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Srgb<u8>) {
        let pixel = opaque(color);
        let r2 = i64::from(radius) * i64::from(radius);

        for y in self.clamp_range(cy - radius, cy + radius) {
            for x in self.clamp_range(cx - radius, cx + radius) {
                let dx = i64::from(x as i32 - cx);
                let dy = i64::from(y as i32 - cy);
                if dx * dx + dy * dy <= r2 {
                    self.pixels.put_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Fills an axis-aligned rectangle with a solid color.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Srgb<u8>) {
        if width <= 0 || height <= 0 {
            return;
        }
        let pixel = opaque(color);
        for py in self.clamp_range(y, y + height - 1) {
            for px in self.clamp_range(x, x + width - 1) {
                self.pixels.put_pixel(px, py, pixel);
            }
        }
    }

    /// Fills a simple polygon with a solid color using even-odd scanlines.
    ///
    /// Degenerate polygons (fewer than three vertices) draw nothing.
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Srgb<u8>) {
        if points.len() < 3 {
            return;
        }
        let pixel = opaque(color);
        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);

        for y in self.clamp_range(min_y, max_y) {
            // Sample each scanline at the pixel row center.
            let yc = y as f64 + 0.5;
            let mut crossings: Vec<f64> = Vec::new();

            for i in 0..points.len() {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % points.len()];
                let (x0, y0) = (x0 as f64, y0 as f64);
                let (x1, y1) = (x1 as f64, y1 as f64);

                if (y0 <= yc && y1 > yc) || (y1 <= yc && y0 > yc) {
                    let t = (yc - y0) / (y1 - y0);
                    crossings.push(x0 + t * (x1 - x0));
                }
            }

            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let start = span[0].ceil() as i32;
                let end = span[1].floor() as i32;
                for x in self.clamp_range(start, end) {
                    self.pixels.put_pixel(x, y, pixel);
                }
            }
        }
    }

    /// Source-over blends a translucent circle onto the canvas.
    ///
    /// The canvas is opaque, so the result stays opaque; only the color
    /// channels are mixed by `alpha`.
    pub fn blend_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Srgb<u8>, alpha: u8) {
        let r2 = i64::from(radius) * i64::from(radius);

        for y in self.clamp_range(cy - radius, cy + radius) {
            for x in self.clamp_range(cx - radius, cx + radius) {
                let dx = i64::from(x as i32 - cx);
                let dy = i64::from(y as i32 - cy);
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let dst = *self.pixels.get_pixel(x, y);
                self.pixels.put_pixel(
                    x,
                    y,
                    Rgba([
                        blend_channel(color.red, dst[0], alpha),
                        blend_channel(color.green, dst[1], alpha),
                        blend_channel(color.blue, dst[2], alpha),
                        255,
                    ]),
                );
            }
        }
    }

    /// Flattens the canvas to a solid RGB image.
    ///
    /// Every primitive keeps the buffer opaque, so this is a plain channel
    /// drop with a white-backed guarantee.
    pub fn into_rgb(self) -> RgbImage {
        DynamicImage::ImageRgba8(self.pixels).to_rgb8()
    }

    /// Clamps an inclusive coordinate range to the canvas bounds.
    fn clamp_range(&self, from: i32, to: i32) -> std::ops::RangeInclusive<u32> {
        let lo = from.max(0) as u32;
        let hi = to.min(self.size as i32 - 1);
        if hi < 0 {
            // Entirely off-canvas.
            return 1..=0;
        }
        lo..=hi as u32
    }
}

fn opaque(color: Srgb<u8>) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, 255])
}

/// Source-over for one channel against an opaque destination.
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = alpha as f32 / 255.0;
    let out = src as f32 * a + dst as f32 * (1.0 - a);
    out.round() as u8
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Srgb<u8> = Srgb::new(255, 0, 0);
    const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);

    #[test]
    fn new_canvas_is_white() {
        let canvas = Canvas::new(8);
        assert_eq!(canvas.size(), 8);
        assert_eq!(canvas.pixels().get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(canvas.pixels().get_pixel(7, 7).0, [255, 255, 255, 255]);
    }

    #[test]
    fn gradient_starts_at_top_color() {
        let mut canvas = Canvas::new(16);
        canvas.fill_vertical_gradient(Srgb::new(76, 175, 80), Srgb::new(144, 238, 144));

        assert_eq!(canvas.pixels().get_pixel(0, 0).0, [76, 175, 80, 255]);
        assert_eq!(canvas.pixels().get_pixel(15, 0).0, [76, 175, 80, 255]);

        // Bottom row approaches (but does not reach) the bottom endpoint.
        let bottom = canvas.pixels().get_pixel(0, 15).0;
        assert!(bottom[0] > 76 && bottom[0] <= 144);
        assert!(bottom[1] > 175 && bottom[1] <= 238);
    }

    #[test]
    fn circle_fills_center_not_corners() {
        let mut canvas = Canvas::new(10);
        canvas.fill_circle(5, 5, 3, RED);

        assert_eq!(canvas.pixels().get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(canvas.pixels().get_pixel(5, 2).0, [255, 0, 0, 255]);
        assert_eq!(canvas.pixels().get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(canvas.pixels().get_pixel(9, 9).0, [255, 255, 255, 255]);
    }

    #[test]
    fn circle_clamps_to_bounds() {
        let mut canvas = Canvas::new(10);
        // Center off-canvas; must not panic and must paint the near edge.
        canvas.fill_circle(-2, 5, 4, RED);
        assert_eq!(canvas.pixels().get_pixel(0, 5).0, [255, 0, 0, 255]);
    }

    #[test]
    fn rect_fills_exact_extent() {
        let mut canvas = Canvas::new(10);
        canvas.fill_rect(2, 3, 4, 2, BLUE);

        assert_eq!(canvas.pixels().get_pixel(2, 3).0, [0, 0, 255, 255]);
        assert_eq!(canvas.pixels().get_pixel(5, 4).0, [0, 0, 255, 255]);
        assert_eq!(canvas.pixels().get_pixel(6, 4).0, [255, 255, 255, 255]);
        assert_eq!(canvas.pixels().get_pixel(5, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn zero_size_rect_draws_nothing() {
        let mut canvas = Canvas::new(4);
        canvas.fill_rect(1, 1, 0, 3, BLUE);
        assert_eq!(canvas.pixels().get_pixel(1, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn polygon_fills_triangle_interior() {
        let mut canvas = Canvas::new(20);
        canvas.fill_polygon(&[(2, 2), (18, 2), (10, 16)], RED);

        // A point well inside is filled, canvas corners are not.
        assert_eq!(canvas.pixels().get_pixel(10, 6).0, [255, 0, 0, 255]);
        assert_eq!(canvas.pixels().get_pixel(0, 19).0, [255, 255, 255, 255]);
        assert_eq!(canvas.pixels().get_pixel(19, 19).0, [255, 255, 255, 255]);
    }

    #[test]
    fn degenerate_polygon_draws_nothing() {
        let mut canvas = Canvas::new(8);
        canvas.fill_polygon(&[(1, 1), (6, 6)], RED);
        assert_eq!(canvas.pixels().get_pixel(3, 3).0, [255, 255, 255, 255]);
    }

    #[test]
    fn blend_mixes_toward_source() {
        let mut canvas = Canvas::new(8);
        canvas.fill_circle(4, 4, 3, RED);
        canvas.blend_circle(4, 4, 2, Srgb::new(255, 255, 255), 100);

        let blended = canvas.pixels().get_pixel(4, 4).0;
        assert_eq!(blended[0], 255, "Red channel already saturated");
        assert!(blended[1] > 0 && blended[1] < 255, "Green channel should be a mix");
        assert_eq!(blended[3], 255, "Canvas stays opaque");

        // Outside the highlight the base red is untouched.
        assert_eq!(canvas.pixels().get_pixel(4, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn blend_with_full_alpha_replaces() {
        let mut canvas = Canvas::new(8);
        canvas.blend_circle(4, 4, 2, BLUE, 255);
        assert_eq!(canvas.pixels().get_pixel(4, 4).0, [0, 0, 255, 255]);
    }

    #[test]
    fn into_rgb_keeps_colors() {
        let mut canvas = Canvas::new(4);
        canvas.fill_rect(0, 0, 4, 4, RED);
        let rgb = canvas.into_rgb();
        assert_eq!(rgb.get_pixel(2, 2).0, [255, 0, 0]);
    }
}
