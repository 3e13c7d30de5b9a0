//! Render configuration.
//!
//! All tunables of the emitter, tracer and renderer live in one immutable
//! value that is threaded through every pass. Settings can be built in code
//! (starting from [`RenderSettings::default`]) or read from JSON, where any
//! missing field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clip distance (camera setup only)
    pub near: f32,
    /// Far clip distance (camera setup only)
    pub far: f32,
    /// Number of recursion levels of the view-ray tracer
    pub max_depth: u32,
    /// Offset applied to secondary ray origins
    pub ray_epsilon: f32,
    /// Emission paths traced from each light
    pub photons_per_light: u32,
    /// Maximum bounces of an emission path
    pub photon_depth: u32,
    /// Total power emitted by each light, split evenly over its photons
    pub photon_power: f32,
    /// Radius of the photon gather query
    pub gather_radius: f32,
    /// Enable photon emission and indirect gathering
    pub photon_mapping: bool,
    /// Image rows per band rendered as one parallel task
    pub band_rows: u32,
    /// Seed for the emission RNG; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 860,
            height: 640,
            fov: 90.0,
            near: 1.0,
            far: 3.0,
            max_depth: 5,
            ray_epsilon: 0.001,
            photons_per_light: 100,
            photon_depth: 3,
            photon_power: 600.0,
            gather_radius: 15.0,
            photon_mapping: true,
            band_rows: 16,
            seed: None,
        }
    }
}

impl RenderSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: RenderSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings describe a renderable configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        if self.band_rows == 0 {
            return Err(ConfigError::EmptyBand);
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::FieldOfView(self.fov));
        }
        if !(self.near.is_finite() && self.far.is_finite() && self.far > self.near) {
            return Err(ConfigError::ClipRange {
                near: self.near,
                far: self.far,
            });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        positive("ray_epsilon", self.ray_epsilon)?;
        if self.photon_mapping {
            positive("gather_radius", self.gather_radius)?;
            positive("photon_power", self.photon_power)?;
        }
        Ok(())
    }

    /// Image aspect ratio (width / height).
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Power carried by a single emitted photon.
    pub fn power_per_photon(&self) -> f32 {
        if self.photons_per_light == 0 {
            0.0
        } else {
            self.photon_power / self.photons_per_light as f32
        }
    }

    /// Upper bound on the number of photons an emission pass can record.
    pub fn max_photons(&self, lights: usize) -> usize {
        lights * self.photons_per_light as usize * self.photon_depth as usize
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
