//! CPU rasteriser over an RGBA buffer.
//!
//! Not fast, but exact enough to check what a frame looks like: pixel
//! centers are sampled at `+0.5`, circle edges get one pixel of linear
//! coverage when anti-aliasing is on, and compositing is straight-alpha
//! source-over.

use image::{Rgba, RgbaImage};
use roundel_core::*;

use crate::canvas::{Canvas, Paint, PaintStyle};

pub struct SoftwareCanvas {
    target: RgbaImage,
}

impl SoftwareCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: RgbaImage::new(width, height),
        }
    }

    pub fn from_image(target: RgbaImage) -> Self {
        Self { target }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.target
    }

    pub fn into_image(self) -> RgbaImage {
        self.target
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgba([r, g, b, a]) = *self.target.get_pixel(x, y);
        Color(r, g, b, a)
    }

    fn blend(&mut self, x: u32, y: u32, src: Color, coverage: f32) {
        let sa = src.3 as f32 / 255.0 * coverage;
        if sa <= 0.0 {
            return;
        }
        let dst = self.target.get_pixel_mut(x, y);
        let Rgba([dr, dg, db, da]) = *dst;
        let da = da as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let ch = |s: u8, d: u8| {
            ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        *dst = Rgba([
            ch(src.0, dr),
            ch(src.1, dg),
            ch(src.2, db),
            (out_a * 255.0).round() as u8,
        ]);
    }

    /// Integer pixel range covering `[lo, hi)` clipped to `0..len`.
    fn span(lo: f32, hi: f32, len: u32) -> std::ops::Range<u32> {
        let start = lo.floor().max(0.0) as u32;
        let end = (hi.ceil().max(0.0) as u32).min(len);
        start..end.max(start)
    }
}

fn coverage(signed_distance: f32, anti_alias: bool) -> f32 {
    if anti_alias {
        (signed_distance + 0.5).clamp(0.0, 1.0)
    } else if signed_distance >= 0.0 {
        1.0
    } else {
        0.0
    }
}

impl Canvas for SoftwareCanvas {
    fn draw_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>) {
        let reach = match paint.style {
            PaintStyle::Fill => radius,
            PaintStyle::Stroke { width } => radius + width * 0.5,
        } + 1.0;
        let xs = Self::span(center.x - reach, center.x + reach, self.target.width());
        let ys = Self::span(center.y - reach, center.y + reach, self.target.height());
        for y in ys {
            for x in xs.clone() {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let d = p.distance_sq(center).sqrt();
                // positive inside the shape
                let inside = match paint.style {
                    PaintStyle::Fill => radius - d,
                    PaintStyle::Stroke { width } => width * 0.5 - (d - radius).abs(),
                };
                let cov = coverage(inside, paint.anti_alias);
                if cov > 0.0 {
                    self.blend(x, y, paint.shade(p), cov);
                }
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint<'_>) {
        let xs = Self::span(rect.left(), rect.right(), self.target.width());
        let ys = Self::span(rect.top(), rect.bottom(), self.target.height());
        for y in ys {
            for x in xs.clone() {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                self.blend(x, y, paint.shade(p), 1.0);
            }
        }
    }

    fn draw_bitmap(&mut self, image: &SourceImage, top_left: Vec2, paint: Option<&Paint<'_>>) {
        let ox = top_left.x.round() as i64;
        let oy = top_left.y.round() as i64;
        let alpha = paint.map_or(255, |p| p.alpha);
        let filter = paint.and_then(|p| p.filter);
        for sy in 0..image.height() {
            let ty = oy + sy as i64;
            if ty < 0 || ty >= self.target.height() as i64 {
                continue;
            }
            for sx in 0..image.width() {
                let tx = ox + sx as i64;
                if tx < 0 || tx >= self.target.width() as i64 {
                    continue;
                }
                let mut c = image.pixel(sx, sy);
                if let Some(f) = filter {
                    c = f.apply(c);
                }
                self.blend(tx as u32, ty as u32, c, alpha as f32 / 255.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ImageShader;

    const RED: Color = Color(255, 0, 0, 255);
    const BLUE: Color = Color(0, 0, 255, 255);

    #[test]
    fn filled_circle_leaves_corners_clear() {
        let mut c = SoftwareCanvas::new(20, 20);
        c.draw_circle(Vec2::new(10.0, 10.0), 10.0, &Paint::fill(RED));
        assert_eq!(c.pixel(10, 10), RED);
        assert_eq!(c.pixel(0, 0), Color::TRANSPARENT);
        assert_eq!(c.pixel(19, 19), Color::TRANSPARENT);
    }

    #[test]
    fn stroke_is_a_ring() {
        let mut c = SoftwareCanvas::new(40, 40);
        c.draw_circle(Vec2::new(20.0, 20.0), 15.0, &Paint::stroke(BLUE, 4.0));
        assert_eq!(c.pixel(20, 20), Color::TRANSPARENT);
        assert_eq!(c.pixel(20, 4), BLUE);
    }

    #[test]
    fn shader_samples_with_clamp() {
        let img = SourceImage::solid(2, 2, RED).unwrap();
        let shader = ImageShader::clamped(&img, ShaderTransform::identity());
        let mut c = SoftwareCanvas::new(8, 8);
        c.draw_rect(Rect::new(0.0, 0.0, 8.0, 8.0), &Paint::image(shader));
        assert_eq!(c.pixel(7, 7), RED);
    }

    #[test]
    fn half_alpha_blends_over() {
        let mut c = SoftwareCanvas::new(4, 4);
        c.draw_rect(Rect::new(0.0, 0.0, 4.0, 4.0), &Paint::fill(BLUE));
        c.draw_rect(
            Rect::new(0.0, 0.0, 4.0, 4.0),
            &Paint::fill(RED).with_alpha(128),
        );
        let px = c.pixel(1, 1);
        assert_eq!(px.3, 255);
        assert!(px.0 > 120 && px.0 < 136, "{px:?}");
        assert!(px.2 > 120 && px.2 < 136, "{px:?}");
    }

    #[test]
    fn bitmap_is_clipped_to_target() {
        let img = SourceImage::solid(4, 4, RED).unwrap();
        let mut c = SoftwareCanvas::new(4, 4);
        c.draw_bitmap(&img, Vec2::new(2.0, -2.0), None);
        assert_eq!(c.pixel(3, 0), RED);
        assert_eq!(c.pixel(1, 0), Color::TRANSPARENT);
        assert_eq!(c.pixel(3, 2), Color::TRANSPARENT);
    }
}
