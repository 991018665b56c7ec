use serde::Deserialize;

use crate::features::deserialize_features;
use crate::{Appearance, BorderConfig, BorderSpec, Color, ConfigError, Features, StateTints};

/// Declarative widget configuration, one field per host attribute.
///
/// ```
/// use roundel_core::CircleImageConfig;
///
/// let cfg = CircleImageConfig::from_json(r##"{
///     "border_width": 4,
///     "border_color": "#FF5733",
///     "features": ["SUPPORTS_BACKGROUND_FILL"]
/// }"##).unwrap();
/// assert_eq!(cfg.border_width, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircleImageConfig {
    pub border_width: u32,
    /// Whole percent of the radius; 0 means unset.
    pub border_width_in_percentage: u32,
    pub border_color: Color,
    pub border_overlay: bool,
    pub circle_background_color: Color,
    pub pressed_tint: Option<Color>,
    pub selected_tint: Option<Color>,
    pub disabled_tint: Option<Color>,
    pub image_alpha: u8,
    pub disable_circular_transformation: bool,
    #[serde(deserialize_with = "deserialize_features")]
    pub features: Features,
}

impl Default for CircleImageConfig {
    fn default() -> Self {
        let appearance = Appearance::default();
        Self {
            border_width: 0,
            border_width_in_percentage: 0,
            border_color: appearance.border_color,
            border_overlay: false,
            circle_background_color: appearance.background,
            pressed_tint: None,
            selected_tint: None,
            disabled_tint: None,
            image_alpha: appearance.image_alpha,
            disable_circular_transformation: false,
            features: Features::default(),
        }
    }
}

impl CircleImageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn border(&self) -> BorderConfig {
        BorderConfig {
            width: self.border_width,
            width_in_percentage: self.border_width_in_percentage,
            color: self.border_color,
            overlay: self.border_overlay,
        }
    }

    pub fn resolve_border(&self) -> Result<BorderSpec, ConfigError> {
        self.border().resolve(self.features)
    }

    pub fn appearance(&self) -> Appearance {
        Appearance {
            border_color: self.border_color,
            background: self.circle_background_color,
            image_alpha: self.image_alpha,
            color_filter: None,
            tints: StateTints {
                pressed: self.pressed_tint,
                selected: self.selected_tint,
                disabled: self.disabled_tint,
            },
        }
    }
}
