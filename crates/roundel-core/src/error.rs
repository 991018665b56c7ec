use thiserror::Error;

use crate::ScaleType;

/// Rejected configuration. Surfaced at configure time, before any geometry
/// is computed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error(
        "both border_width ({width}px) and border_width_in_percentage ({percentage}%) have been set, only one is permitted"
    )]
    ConflictingBorderWidth { width: u32, percentage: u32 },
    #[error("border_width or border_width_in_percentage have not been set at all")]
    MissingBorderWidth,
    #[error("border_width_in_percentage is not supported by this configuration")]
    PercentageBorderUnsupported,
    #[error("border_width_in_percentage must be within 0..=100, got {0}")]
    InvalidPercentage(u32),
    #[error("scale type {0:?} not supported")]
    UnsupportedScaleType(ScaleType),
    #[error("adjust_view_bounds not supported")]
    AdjustViewBoundsUnsupported,
    #[error("malformed configuration: {0}")]
    Parse(String),
}

/// The image could not be turned into a usable pixel buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidSource {
    #[error("image has empty dimensions {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("could not allocate {bytes} bytes for a {width}x{height} bitmap")]
    Allocation {
        width: u32,
        height: u32,
        bytes: usize,
    },
}

/// Viewport leaves no room for a circle; recompute is deferred.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("viewport {width}x{height} leaves no drawable area")]
pub struct DegenerateGeometry {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] InvalidSource),
    #[error(transparent)]
    Geometry(#[from] DegenerateGeometry),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
