use std::fmt;
use std::rc::Rc;

use image::RgbaImage;

use crate::{Color, InvalidSource};

/// Side length of the bitmap synthesised for a solid-color drawable.
pub const COLOR_DRAWABLE_DIMENSION: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8888,
    Alpha8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Alpha8 => 1,
        }
    }
}

/// Decoded pixels, immutable once constructed. Content changes replace the
/// whole image.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl SourceImage {
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, InvalidSource> {
        if width == 0 || height == 0 {
            return Err(InvalidSource::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(InvalidSource::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    pub fn from_rgba(image: RgbaImage) -> Result<Self, InvalidSource> {
        let (width, height) = image.dimensions();
        Self::new(width, height, PixelFormat::Rgba8888, image.into_raw())
    }

    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, InvalidSource> {
        let mut pixels = alloc_pixels(width, height)?;
        for px in pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.0, color.1, color.2, color.3]);
        }
        Self::new(width, height, PixelFormat::Rgba8888, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    pub fn format(&self) -> PixelFormat {
        self.format
    }
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at `(x, y)`; out-of-range coordinates are clamped to the edge.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let i = (y * self.width as usize + x) * self.format.bytes_per_pixel();
        match self.format {
            PixelFormat::Rgba8888 => Color(
                self.pixels[i],
                self.pixels[i + 1],
                self.pixels[i + 2],
                self.pixels[i + 3],
            ),
            PixelFormat::Alpha8 => Color(0, 0, 0, self.pixels[i]),
        }
    }
}

/// Zeroed RGBA buffer; allocation failure is reported rather than aborting.
fn alloc_pixels(width: u32, height: u32) -> Result<Vec<u8>, InvalidSource> {
    if width == 0 || height == 0 {
        return Err(InvalidSource::EmptyDimensions { width, height });
    }
    let oom = |bytes| InvalidSource::Allocation {
        width,
        height,
        bytes,
    };
    let bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(oom(usize::MAX))?;
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(bytes).map_err(|_| oom(bytes))?;
    pixels.resize(bytes, 0);
    Ok(pixels)
}

pub type RenderFn = Rc<dyn Fn(&mut RgbaImage)>;

/// Non-bitmap content with an intrinsic size, rasterised on bind.
#[derive(Clone)]
pub struct VectorDrawable {
    pub width: u32,
    pub height: u32,
    pub render: RenderFn,
}

impl VectorDrawable {
    pub fn new(width: u32, height: u32, render: impl Fn(&mut RgbaImage) + 'static) -> Self {
        Self {
            width,
            height,
            render: Rc::new(render),
        }
    }
}

/// Anything a circular image view can display.
#[derive(Clone)]
pub enum Drawable {
    Bitmap(SourceImage),
    Color(Color),
    Vector(VectorDrawable),
}

impl fmt::Debug for Drawable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Drawable::Bitmap(img) => f.debug_tuple("Bitmap").field(img).finish(),
            Drawable::Color(c) => f.debug_tuple("Color").field(c).finish(),
            Drawable::Vector(v) => f
                .debug_struct("Vector")
                .field("width", &v.width)
                .field("height", &v.height)
                .finish_non_exhaustive(),
        }
    }
}

impl From<SourceImage> for Drawable {
    fn from(img: SourceImage) -> Self {
        Drawable::Bitmap(img)
    }
}

impl Drawable {
    pub fn intrinsic_size(&self) -> (u32, u32) {
        match self {
            Drawable::Bitmap(img) => img.dimensions(),
            Drawable::Color(_) => (COLOR_DRAWABLE_DIMENSION, COLOR_DRAWABLE_DIMENSION),
            Drawable::Vector(v) => (v.width, v.height),
        }
    }

    /// Turns the drawable into a bitmap, rasterising if needed.
    pub fn into_bitmap(self) -> Result<SourceImage, InvalidSource> {
        match self {
            Drawable::Bitmap(img) => Ok(img),
            Drawable::Color(c) => {
                SourceImage::solid(COLOR_DRAWABLE_DIMENSION, COLOR_DRAWABLE_DIMENSION, c)
            }
            Drawable::Vector(v) => {
                log::debug!("rasterising {}x{} vector drawable", v.width, v.height);
                let pixels = alloc_pixels(v.width, v.height)?;
                let expected = pixels.len();
                let mut canvas = RgbaImage::from_raw(v.width, v.height, pixels).ok_or(
                    InvalidSource::BufferSize {
                        expected,
                        actual: expected,
                    },
                )?;
                (v.render)(&mut canvas);
                SourceImage::from_rgba(canvas)
            }
        }
    }
}
