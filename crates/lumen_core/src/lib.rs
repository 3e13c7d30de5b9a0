//! Lumen Core - scene description types and render settings.
//!
//! This crate provides:
//!
//! - **Surface description**: `Material`, `Light`
//! - **Configuration**: `RenderSettings`, validated before use
//!
//! # Example
//!
//! ```
//! use lumen_core::RenderSettings;
//!
//! let settings = RenderSettings::from_json(r#"{ "width": 320, "height": 240 }"#)?;
//! assert_eq!(settings.max_depth, 5);
//! # Ok::<(), lumen_core::ConfigError>(())
//! ```

pub mod error;
pub mod light;
pub mod material;
pub mod settings;

// Re-export commonly used types
pub use error::ConfigError;
pub use light::Light;
pub use material::{Color, Material};
pub use settings::RenderSettings;
