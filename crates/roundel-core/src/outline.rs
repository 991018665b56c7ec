use crate::{Rect, Size};

/// Shape the host uses for shadow and elevation clipping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outline {
    RoundRect { rect: Rect, radius: f32 },
    /// Use the host's own rectangular outline.
    HostDefault,
}

/// Outline for a view of `size`. Always a full circle over the rounded-out
/// bounds when circular mode is on, regardless of border or padding.
pub fn provide_clip_outline(size: Size, circular: bool) -> Outline {
    if !circular {
        return Outline::HostDefault;
    }
    let rect = Rect::from_size(size).round_out();
    Outline::RoundRect {
        rect,
        radius: rect.w / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_out_fractional_size() {
        assert_eq!(
            provide_clip_outline(Size::new(99.4, 80.2), true),
            Outline::RoundRect {
                rect: Rect::new(0.0, 0.0, 100.0, 81.0),
                radius: 50.0,
            }
        );
    }

    #[test]
    fn disabled_delegates() {
        assert_eq!(
            provide_clip_outline(Size::new(10.0, 10.0), false),
            Outline::HostDefault
        );
    }
}
