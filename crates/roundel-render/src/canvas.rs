use roundel_core::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f32 },
}

/// Samples a bitmap through a [`ShaderTransform`].
#[derive(Clone, Copy, Debug)]
pub struct ImageShader<'a> {
    pub image: &'a SourceImage,
    pub transform: ShaderTransform,
    pub tile: TileMode,
}

impl<'a> ImageShader<'a> {
    pub fn clamped(image: &'a SourceImage, transform: ShaderTransform) -> Self {
        Self {
            image,
            transform,
            tile: TileMode::Clamp,
        }
    }

    /// Source pixel for a destination point.
    pub fn sample(&self, p: Vec2) -> Color {
        let src = self.transform.unmap_point(p);
        let x = tile(src.x.floor() as i64, self.image.width(), self.tile);
        let y = tile(src.y.floor() as i64, self.image.height(), self.tile);
        self.image.pixel(x, y)
    }
}

fn tile(v: i64, len: u32, mode: TileMode) -> u32 {
    let len = len as i64;
    let out = match mode {
        TileMode::Clamp => v.clamp(0, len - 1),
        TileMode::Repeat => v.rem_euclid(len),
        TileMode::Mirror => {
            let period = v.rem_euclid(len * 2);
            if period < len {
                period
            } else {
                len * 2 - 1 - period
            }
        }
    };
    out as u32
}

#[derive(Clone, Copy, Debug)]
pub enum PaintSource<'a> {
    Solid(Color),
    Image(ImageShader<'a>),
}

/// Per-draw paint. Built fresh for every frame from read-only inputs.
#[derive(Clone, Copy, Debug)]
pub struct Paint<'a> {
    pub source: PaintSource<'a>,
    pub style: PaintStyle,
    pub filter: Option<ColorFilter>,
    pub alpha: u8,
    pub anti_alias: bool,
}

impl<'a> Paint<'a> {
    pub fn fill(color: Color) -> Self {
        Self {
            source: PaintSource::Solid(color),
            style: PaintStyle::Fill,
            filter: None,
            alpha: 255,
            anti_alias: true,
        }
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke { width },
            ..Self::fill(color)
        }
    }

    pub fn image(shader: ImageShader<'a>) -> Self {
        Self {
            source: PaintSource::Image(shader),
            ..Self::fill(Color::TRANSPARENT)
        }
    }

    pub fn with_filter(mut self, filter: Option<ColorFilter>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Color at `p` after the source, filter and paint alpha.
    pub fn shade(&self, p: Vec2) -> Color {
        let c = match self.source {
            PaintSource::Solid(c) => c,
            PaintSource::Image(shader) => shader.sample(p),
        };
        let c = match self.filter {
            Some(f) => f.apply(c),
            None => c,
        };
        c.with_alpha(((c.3 as u16 * self.alpha as u16 + 127) / 255) as u8)
    }
}

/// Drawing surface supplied by the host graphics API.
pub trait Canvas {
    fn draw_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>);
    fn draw_rect(&mut self, rect: Rect, paint: &Paint<'_>);
    /// Blits `image` unscaled with its top-left corner at `top_left`.
    fn draw_bitmap(&mut self, image: &SourceImage, top_left: Vec2, paint: Option<&Paint<'_>>);
}
