use crate::{Color, ColorFilter, ConfigError, Features};

/// Interaction state that selects the tint filter and the overlay sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualState {
    #[default]
    Normal,
    Pressed,
    Selected,
    Disabled,
}

/// Scale policies a host image view may request. Only `CenterCrop` is
/// accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleType {
    CenterCrop,
    Center,
    CenterInside,
    FitCenter,
    FitStart,
    FitEnd,
    FitXy,
    Matrix,
}

impl ScaleType {
    pub const SUPPORTED: ScaleType = ScaleType::CenterCrop;

    pub fn validate(self) -> Result<ScaleType, ConfigError> {
        if self == Self::SUPPORTED {
            Ok(self)
        } else {
            Err(ConfigError::UnsupportedScaleType(self))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StateTints {
    pub pressed: Option<Color>,
    pub selected: Option<Color>,
    pub disabled: Option<Color>,
}

/// Everything that only affects how a frame is painted, never its geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub border_color: Color,
    pub background: Color,
    pub image_alpha: u8,
    pub color_filter: Option<ColorFilter>,
    pub tints: StateTints,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            border_color: Color::WHITE,
            background: Color::TRANSPARENT,
            image_alpha: 255,
            color_filter: None,
            tints: StateTints::default(),
        }
    }
}

impl Appearance {
    /// Filter applied to the image for `state`. State tints replace the
    /// user filter while active and fall back to it otherwise.
    pub fn filter_for(&self, state: VisualState, features: Features) -> Option<ColorFilter> {
        if !features.contains(Features::SUPPORTS_PRESSED_TINT) {
            return self.color_filter;
        }
        let tint = match state {
            VisualState::Normal => None,
            VisualState::Pressed => self.tints.pressed,
            VisualState::Selected => self.tints.selected,
            VisualState::Disabled => self.tints.disabled,
        };
        tint.map(ColorFilter::tint).or(self.color_filter)
    }
}
