use serde::{Deserialize, Deserializer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }

    /// Lenient hex parse (`#RRGGBB` or `#RRGGBBAA`); malformed input yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        Self::try_from_hex(hex).unwrap_or(Color::BLACK)
    }

    pub fn try_from_hex(hex: &str) -> Option<Self> {
        let s = hex.trim().trim_start_matches('#');
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        match s.len() {
            6 => Some(Color(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Color(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }

    pub fn alpha(self) -> u8 {
        self.3
    }

    pub fn is_transparent(self) -> bool {
        self.3 == 0
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::try_from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}

/// Porter-Duff modes supported by [`ColorFilter::Blend`]; the filter color is
/// the source, the sampled pixel the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    SrcAtop,
    SrcIn,
    Multiply,
}

/// Per-pixel color transform applied while sampling an image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorFilter {
    Blend { color: Color, mode: BlendMode },
    /// Row-major 4x5 matrix over 0..255 channels (R, G, B, A, offset).
    Matrix([f32; 20]),
}

impl ColorFilter {
    /// Source-atop tint, the filter used for pressed and selected states.
    pub fn tint(color: Color) -> Self {
        ColorFilter::Blend {
            color,
            mode: BlendMode::SrcAtop,
        }
    }

    pub fn grayscale() -> Self {
        const R: f32 = 0.2126;
        const G: f32 = 0.7152;
        const B: f32 = 0.0722;
        ColorFilter::Matrix([
            R, G, B, 0.0, 0.0, //
            R, G, B, 0.0, 0.0, //
            R, G, B, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])
    }

    pub fn apply(&self, dst: Color) -> Color {
        match *self {
            ColorFilter::Blend { color, mode } => blend(color, dst, mode),
            ColorFilter::Matrix(m) => {
                let c = [dst.0 as f32, dst.1 as f32, dst.2 as f32, dst.3 as f32];
                let row = |r: usize| {
                    let v = m[r * 5] * c[0]
                        + m[r * 5 + 1] * c[1]
                        + m[r * 5 + 2] * c[2]
                        + m[r * 5 + 3] * c[3]
                        + m[r * 5 + 4];
                    v.round().clamp(0.0, 255.0) as u8
                };
                Color(row(0), row(1), row(2), row(3))
            }
        }
    }
}

fn blend(src: Color, dst: Color, mode: BlendMode) -> Color {
    let sa = src.3 as f32 / 255.0;
    let mix = |s: u8, d: u8, t: f32| (s as f32 * t + d as f32 * (1.0 - t)).round() as u8;
    let mul = |s: u8, d: u8| ((s as u16 * d as u16 + 127) / 255) as u8;
    match mode {
        BlendMode::SrcAtop => Color(
            mix(src.0, dst.0, sa),
            mix(src.1, dst.1, sa),
            mix(src.2, dst.2, sa),
            dst.3,
        ),
        BlendMode::SrcIn => Color(src.0, src.1, src.2, mul(src.3, dst.3)),
        BlendMode::Multiply => Color(
            mul(src.0, dst.0),
            mul(src.1, dst.1),
            mul(src.2, dst.2),
            mul(src.3, dst.3),
        ),
    }
}
