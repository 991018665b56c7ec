use crate::{InvalidSource, Rect, Vec2};

/// How the sampler treats coordinates outside the source bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileMode {
    #[default]
    Clamp,
    Repeat,
    Mirror,
}

/// Uniform scale followed by a pixel-snapped translation, mapping source
/// bitmap space into destination (view) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderTransform {
    pub scale: f32,
    /// Unsnapped centering offsets relative to the destination origin.
    pub dx: f32,
    pub dy: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Default for ShaderTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ShaderTransform {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            dx: 0.0,
            dy: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    pub fn map_point(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x * self.scale + self.translate_x,
            y: p.y * self.scale + self.translate_y,
        }
    }

    /// Destination point back into source space, for sampling.
    pub fn unmap_point(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: (p.x - self.translate_x) / self.scale,
            y: (p.y - self.translate_y) / self.scale,
        }
    }

    /// `[sx, kx, tx, ky, sy, ty]`, the first two rows of the 3x3 matrix.
    pub fn to_affine(&self) -> [f32; 6] {
        [
            self.scale,
            0.0,
            self.translate_x,
            0.0,
            self.scale,
            self.translate_y,
        ]
    }
}

/// Center-crop `src_width x src_height` into `dst`: scale uniformly until both
/// axes cover the destination, then center the overflow.
pub fn compute_transform(
    src_width: u32,
    src_height: u32,
    dst: Rect,
) -> Result<ShaderTransform, InvalidSource> {
    if src_width == 0 || src_height == 0 {
        return Err(InvalidSource::EmptyDimensions {
            width: src_width,
            height: src_height,
        });
    }
    let sw = src_width as f32;
    let sh = src_height as f32;

    let (scale, dx, dy) = if sw * dst.h > dst.w * sh {
        let scale = dst.h / sh;
        (scale, (dst.w - sw * scale) * 0.5, 0.0)
    } else {
        let scale = dst.w / sw;
        (scale, 0.0, (dst.h - sh * scale) * 0.5)
    };

    Ok(ShaderTransform {
        scale,
        dx,
        dy,
        translate_x: snap(dx) + dst.x,
        translate_y: snap(dy) + dst.y,
    })
}

/// Round half up to a whole pixel.
fn snap(v: f32) -> f32 {
    (v + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_source_fits_height() {
        let t = compute_transform(400, 200, Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.dx, -50.0);
        assert_eq!(t.dy, 0.0);
        assert_eq!(t.translate_x, -50.0);
        assert_eq!(t.translate_y, 0.0);
    }

    #[test]
    fn tall_source_fits_width() {
        let t = compute_transform(100, 300, Rect::new(10.0, 20.0, 50.0, 50.0)).unwrap();
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.dx, 0.0);
        assert_eq!(t.dy, -50.0);
        assert_eq!(t.translate_x, 10.0);
        assert_eq!(t.translate_y, -30.0);
    }

    #[test]
    fn offsets_snap_half_up() {
        // 3x1 into 4x4: scale 4, dx = (4 - 12) / 2 = -4
        let t = compute_transform(3, 1, Rect::new(0.0, 0.0, 4.0, 4.0)).unwrap();
        assert_eq!(t.translate_x, -4.0);
        // 1x1 into 4x5: scale 5, dx = (4 - 5) / 2 = -0.5 -> 0
        let t = compute_transform(1, 1, Rect::new(0.0, 0.0, 4.0, 5.0)).unwrap();
        assert_eq!(t.scale, 5.0);
        assert_eq!(t.dx, -0.5);
        assert_eq!(t.translate_x, 0.0);
        // 1x1 into 4x7: dx = -1.5 -> -1
        let t = compute_transform(1, 1, Rect::new(0.0, 0.0, 4.0, 7.0)).unwrap();
        assert_eq!(t.translate_x, -1.0);
        // 5x4 into 10x10: height fits, scale 2.5, dx = -1.25 -> -1
        let t = compute_transform(5, 4, Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(t.scale, 2.5);
        assert_eq!(t.dy, 0.0);
        assert_eq!(t.translate_x, -1.0);
    }

    #[test]
    fn zero_source_rejected() {
        assert_eq!(
            compute_transform(0, 10, Rect::new(0.0, 0.0, 10.0, 10.0)),
            Err(InvalidSource::EmptyDimensions {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn always_covers_destination() {
        let eps = 1e-3;
        for (sw, sh) in [(1, 1), (400, 200), (200, 400), (17, 3), (3, 17), (640, 480)] {
            for (dw, dh) in [(100.0, 100.0), (80.0, 30.0), (7.0, 91.0), (1.0, 1.0)] {
                let t = compute_transform(sw, sh, Rect::new(0.0, 0.0, dw, dh)).unwrap();
                assert!(t.scale * sw as f32 >= dw - eps, "{sw}x{sh} -> {dw}x{dh}");
                assert!(t.scale * sh as f32 >= dh - eps, "{sw}x{sh} -> {dw}x{dh}");
            }
        }
    }

    #[test]
    fn unmap_inverts_map() {
        let t = compute_transform(640, 480, Rect::new(5.0, 5.0, 90.0, 90.0)).unwrap();
        let p = Vec2::new(123.0, 77.0);
        let back = t.unmap_point(t.map_point(p));
        assert!((back.x - p.x).abs() < 1e-3 && (back.y - p.y).abs() < 1e-3);
    }
}
