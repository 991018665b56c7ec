use crate::{Color, ConfigError, Features};

/// Border settings as supplied by the host, before validation. A zero
/// `width` or `width_in_percentage` means "not set".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderConfig {
    pub width: u32,
    /// Whole percent of the pre-border radius.
    pub width_in_percentage: u32,
    pub color: Color,
    pub overlay: bool,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            width: 0,
            width_in_percentage: 0,
            color: Color::WHITE,
            overlay: false,
        }
    }
}

impl BorderConfig {
    pub fn fixed(width: u32, color: Color) -> Self {
        Self {
            width,
            color,
            ..Self::default()
        }
    }

    pub fn percentage(percent: u32, color: Color) -> Self {
        Self {
            width_in_percentage: percent,
            color,
            ..Self::default()
        }
    }

    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    /// Validates the pixel/percentage exclusivity rules.
    pub fn resolve(&self, features: Features) -> Result<BorderSpec, ConfigError> {
        let width = match (self.width != 0, self.width_in_percentage != 0) {
            (true, true) => {
                return Err(ConfigError::ConflictingBorderWidth {
                    width: self.width,
                    percentage: self.width_in_percentage,
                });
            }
            (false, true) => {
                if !features.contains(Features::SUPPORTS_PERCENTAGE_BORDER) {
                    return Err(ConfigError::PercentageBorderUnsupported);
                }
                if self.width_in_percentage > 100 {
                    return Err(ConfigError::InvalidPercentage(self.width_in_percentage));
                }
                BorderWidth::Percent(self.width_in_percentage as f32 / 100.0)
            }
            (true, false) => BorderWidth::Fixed(self.width),
            (false, false) => {
                if features.contains(Features::REQUIRE_EXPLICIT_BORDER) {
                    return Err(ConfigError::MissingBorderWidth);
                }
                BorderWidth::Fixed(0)
            }
        };
        Ok(BorderSpec {
            width,
            color: self.color,
            overlay: self.overlay,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BorderWidth {
    Fixed(u32),
    /// Fraction (0..=1) of the pre-border radius.
    Percent(f32),
}

impl BorderWidth {
    pub fn resolve(&self, radius: f32) -> f32 {
        match *self {
            BorderWidth::Fixed(px) => px as f32,
            BorderWidth::Percent(fraction) => (radius * fraction).round(),
        }
    }
}

/// A validated border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderSpec {
    pub width: BorderWidth,
    pub color: Color,
    pub overlay: bool,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            width: BorderWidth::Fixed(0),
            color: Color::WHITE,
            overlay: false,
        }
    }
}
