use bitflags::bitflags;
use serde::{Deserialize, Deserializer};

bitflags! {
    /// Optional behaviours of a circular image view. Each flag switches one
    /// drawing or validation rule on; everything else is shared.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        /// Border width may be given as a percentage of the radius.
        const SUPPORTS_PERCENTAGE_BORDER = 1 << 0;
        /// A sprite is drawn centered on top while selected.
        const SUPPORTS_OVERLAY_SPRITE = 1 << 1;
        /// Pressed/selected/disabled states swap in a tint filter.
        const SUPPORTS_PRESSED_TINT = 1 << 2;
        /// A filled circle is drawn behind the image.
        const SUPPORTS_BACKGROUND_FILL = 1 << 3;
        /// An unset border width is a configuration error instead of zero.
        const REQUIRE_EXPLICIT_BORDER = 1 << 4;
        /// A set background color is drawn in place of the image, with the
        /// border only over white.
        const COLOR_PLACEHOLDER = 1 << 5;
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::SUPPORTS_PERCENTAGE_BORDER
            | Features::SUPPORTS_OVERLAY_SPRITE
            | Features::SUPPORTS_PRESSED_TINT
            | Features::SUPPORTS_BACKGROUND_FILL
    }
}

/// Deserializes a list of flag names, e.g. `["SUPPORTS_PRESSED_TINT"]`.
pub(crate) fn deserialize_features<'de, D>(deserializer: D) -> Result<Features, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    names.iter().try_fold(Features::empty(), |acc, name| {
        Features::from_name(name)
            .map(|f| acc | f)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown feature `{name}`")))
    })
}
