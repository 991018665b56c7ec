use roundel_core::*;

use crate::canvas::{Canvas, ImageShader, Paint};

/// Which branch a paint call took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintPath {
    /// Rectangular image draw, no clipping or border.
    CircularDisabled,
    /// No image drawn; background, border and overlay only.
    BackgroundOnly,
    ImageComposite,
}

/// A bound image and its cached transform.
#[derive(Clone, Copy, Debug)]
pub struct BoundImage<'a> {
    pub image: &'a SourceImage,
    pub transform: &'a ShaderTransform,
}

/// Read-only inputs for one paint call.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub size: Size,
    /// Padded content rect, the target of the rectangular path.
    pub content: Rect,
    pub geometry: Option<&'a CircleGeometry>,
    pub image: Option<BoundImage<'a>>,
    pub overlay: Option<&'a SourceImage>,
    pub appearance: &'a Appearance,
    pub state: VisualState,
    pub circular: bool,
    pub features: Features,
}

impl Frame<'_> {
    fn image_paint(&self) -> Option<Paint<'_>> {
        let bound = self.image?;
        let shader = ImageShader::clamped(bound.image, *bound.transform);
        Some(
            Paint::image(shader)
                .with_filter(self.appearance.filter_for(self.state, self.features))
                .with_alpha(self.appearance.image_alpha),
        )
    }
}

/// Paints `frame` in order: background, image, border, overlay. Returns
/// `None` when there is nothing to draw yet (no geometry).
pub fn paint(frame: &Frame<'_>, canvas: &mut dyn Canvas) -> Option<PaintPath> {
    if !frame.circular {
        if let Some(paint) = frame.image_paint() {
            canvas.draw_rect(frame.content, &paint);
        }
        return Some(PaintPath::CircularDisabled);
    }

    let geometry = frame.geometry?;
    let path = if frame.features.contains(Features::COLOR_PLACEHOLDER) {
        paint_placeholder(frame, geometry, canvas)
    } else {
        paint_composite(frame, geometry, canvas)
    };

    if frame.state == VisualState::Selected
        && frame.features.contains(Features::SUPPORTS_OVERLAY_SPRITE)
        && let Some(sprite) = frame.overlay
    {
        let top_left = Vec2::new(
            frame.size.width * 0.5 - sprite.width() as f32 * 0.5,
            frame.size.height * 0.5 - sprite.height() as f32 * 0.5,
        );
        canvas.draw_bitmap(sprite, top_left, None);
    }

    log::trace!("painted {path:?} in state {:?}", frame.state);
    Some(path)
}

fn paint_composite(
    frame: &Frame<'_>,
    geometry: &CircleGeometry,
    canvas: &mut dyn Canvas,
) -> PaintPath {
    let appearance = frame.appearance;

    if frame.features.contains(Features::SUPPORTS_BACKGROUND_FILL)
        && !appearance.background.is_transparent()
    {
        canvas.draw_circle(
            geometry.center,
            geometry.drawable_radius,
            &Paint::fill(appearance.background),
        );
    }

    let path = paint_image(frame, geometry, canvas);
    if geometry.border_width > 0.0 {
        paint_border(appearance, geometry, canvas);
    }
    path
}

/// A set background color replaces the image, and the border only frames a
/// white placeholder. Without a background color the image draws alone.
fn paint_placeholder(
    frame: &Frame<'_>,
    geometry: &CircleGeometry,
    canvas: &mut dyn Canvas,
) -> PaintPath {
    let appearance = frame.appearance;
    if appearance.background.is_transparent() {
        return paint_image(frame, geometry, canvas);
    }

    canvas.draw_circle(
        geometry.center,
        geometry.drawable_radius,
        &Paint::fill(appearance.background),
    );
    if geometry.border_width > 0.0 && appearance.background == Color::WHITE {
        paint_border(appearance, geometry, canvas);
    }
    PaintPath::BackgroundOnly
}

fn paint_image(
    frame: &Frame<'_>,
    geometry: &CircleGeometry,
    canvas: &mut dyn Canvas,
) -> PaintPath {
    match frame.image_paint() {
        Some(paint) => {
            canvas.draw_circle(geometry.center, geometry.drawable_radius, &paint);
            PaintPath::ImageComposite
        }
        None => PaintPath::BackgroundOnly,
    }
}

fn paint_border(appearance: &Appearance, geometry: &CircleGeometry, canvas: &mut dyn Canvas) {
    canvas.draw_circle(
        geometry.center,
        geometry.border_radius,
        &Paint::stroke(appearance.border_color, geometry.border_width),
    );
}
