//! Circle geometry for a padded viewport.
//!
//! The circle is inscribed in the largest square that fits the padded area,
//! centered along the longer axis. The border stroke is centered on
//! `border_radius`, so its outer edge touches the square. When the border is
//! not an overlay, the image circle shrinks by the full border width.

use crate::{BorderSpec, DegenerateGeometry, PaddingValues, Rect, Size, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CircleGeometry {
    /// Padded area available to the view.
    pub viewport: Rect,
    /// Square the border circle is inscribed in.
    pub bounds: Rect,
    /// Square the image circle is inscribed in; the shader target.
    pub drawable_rect: Rect,
    pub center: Vec2,
    pub drawable_radius: f32,
    pub border_radius: f32,
    /// Border width after resolving a percentage, in pixels.
    pub border_width: f32,
}

impl CircleGeometry {
    pub fn side(&self) -> f32 {
        self.bounds.w
    }
}

pub fn compute_geometry(
    size: Size,
    padding: PaddingValues,
    border: &BorderSpec,
) -> Result<CircleGeometry, DegenerateGeometry> {
    let viewport = Rect::from_size(size).inset(padding);
    let bounds = viewport.centered_square();
    let side = bounds.w;
    if side <= 0.0 {
        return Err(DegenerateGeometry {
            width: viewport.w,
            height: viewport.h,
        });
    }

    // Percentages are relative to the radius before any border inset.
    let outer_radius = side * 0.5;
    let border_width = border.width.resolve(outer_radius).max(0.0);

    let border_radius = ((viewport.h - border_width) * 0.5)
        .min((viewport.w - border_width) * 0.5)
        .max(0.0);
    let drawable_radius = if border.overlay {
        outer_radius
    } else {
        (outer_radius - border_width).max(0.0)
    };

    let center = bounds.center();
    let drawable_rect = Rect {
        x: center.x - drawable_radius,
        y: center.y - drawable_radius,
        w: drawable_radius * 2.0,
        h: drawable_radius * 2.0,
    };

    Ok(CircleGeometry {
        viewport,
        bounds,
        drawable_rect,
        center,
        drawable_radius,
        border_radius,
        border_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BorderWidth, Color};

    fn fixed(width: u32, overlay: bool) -> BorderSpec {
        BorderSpec {
            width: BorderWidth::Fixed(width),
            color: Color::BLACK,
            overlay,
        }
    }

    #[test]
    fn wide_viewport_centers_square() {
        let g = compute_geometry(Size::new(200.0, 100.0), PaddingValues::ZERO, &fixed(0, false))
            .unwrap();
        assert_eq!(g.side(), 100.0);
        assert_eq!(g.center, Vec2::new(100.0, 50.0));
        assert_eq!(g.drawable_radius, 50.0);
        assert_eq!(g.border_radius, 50.0);
        assert_eq!(g.bounds.left(), 50.0);
        assert_eq!(200.0 - g.bounds.right(), 50.0);
    }

    #[test]
    fn padding_shrinks_viewport() {
        let g = compute_geometry(
            Size::new(120.0, 120.0),
            PaddingValues::new(10.0, 20.0, 10.0, 0.0),
            &fixed(0, false),
        )
        .unwrap();
        assert_eq!(g.viewport, Rect::new(10.0, 20.0, 100.0, 100.0));
        assert_eq!(g.center, Vec2::new(60.0, 70.0));
        assert_eq!(g.drawable_radius, 50.0);
    }

    #[test]
    fn inset_border_shrinks_image() {
        let g = compute_geometry(Size::new(100.0, 100.0), PaddingValues::ZERO, &fixed(10, false))
            .unwrap();
        assert_eq!(g.border_width, 10.0);
        assert_eq!(g.border_radius, 45.0);
        assert_eq!(g.drawable_radius, 40.0);
        assert_eq!(g.drawable_rect, Rect::new(10.0, 10.0, 80.0, 80.0));
    }

    #[test]
    fn overlay_border_keeps_image() {
        let g = compute_geometry(Size::new(100.0, 100.0), PaddingValues::ZERO, &fixed(10, true))
            .unwrap();
        assert_eq!(g.drawable_radius, 50.0);
        assert_eq!(g.border_radius, 45.0);
    }

    #[test]
    fn percentage_uses_pre_border_radius() {
        let spec = BorderSpec {
            width: BorderWidth::Percent(0.2),
            ..fixed(0, false)
        };
        let g = compute_geometry(Size::new(100.0, 100.0), PaddingValues::ZERO, &spec).unwrap();
        assert_eq!(g.border_width, 10.0);
        assert_eq!(g.drawable_radius, 40.0);
        assert_eq!(g.border_radius, 45.0);
    }

    #[test]
    fn oversized_border_clamps() {
        let g = compute_geometry(Size::new(20.0, 20.0), PaddingValues::ZERO, &fixed(50, false))
            .unwrap();
        assert_eq!(g.border_radius, 0.0);
        assert_eq!(g.drawable_radius, 0.0);
    }

    #[test]
    fn empty_viewport_is_degenerate() {
        let err = compute_geometry(Size::new(0.0, 80.0), PaddingValues::ZERO, &fixed(0, false))
            .unwrap_err();
        assert_eq!(err.width, 0.0);

        assert!(
            compute_geometry(
                Size::new(40.0, 40.0),
                PaddingValues::new(20.0, 0.0, 20.0, 0.0),
                &fixed(0, false)
            )
            .is_err()
        );
    }

    #[test]
    fn drawable_never_exceeds_border_radius() {
        for w in [1.0f32, 7.0, 33.0, 100.0, 257.0] {
            for h in [1.0f32, 9.0, 64.0, 300.0] {
                for bw in [0u32, 1, 2, 5, 17] {
                    let Ok(g) =
                        compute_geometry(Size::new(w, h), PaddingValues::ZERO, &fixed(bw, false))
                    else {
                        continue;
                    };
                    assert!(g.drawable_radius <= g.border_radius, "{w}x{h} bw={bw}");
                    if bw == 0 {
                        assert_eq!(g.drawable_radius, g.border_radius);
                    }
                }
            }
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let spec = BorderSpec {
            width: BorderWidth::Percent(0.13),
            ..fixed(0, false)
        };
        let size = Size::new(173.0, 91.0);
        let pad = PaddingValues::new(3.0, 5.0, 7.0, 11.0);
        let a = compute_geometry(size, pad, &spec).unwrap();
        let b = compute_geometry(size, pad, &spec).unwrap();
        assert_eq!(a, b);
    }
}
