//! Configuration errors.

use thiserror::Error;

/// Errors produced while loading or validating [`crate::RenderSettings`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Image size must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Band height must be at least one row")]
    EmptyBand,

    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("Clip range is empty: near={near}, far={far}")]
    ClipRange { near: f32, far: f32 },

    #[error("Maximum trace depth must be at least 1")]
    ZeroDepth,

    #[error("Invalid {name}: {value} (must be finite and positive)")]
    NonPositive { name: &'static str, value: f32 },
}
