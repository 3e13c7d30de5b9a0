//! Camera for primary ray generation.

use crate::{Ray, RenderSettings};
use lumen_math::{Projection, Vec2, Vec3};

/// Maps normalized image-plane coordinates to primary rays.
///
/// Image-plane coordinates are pixel offsets from the image centre divided
/// by the image size, roughly `[-1, 1]²` after the renderer's 2× scaling.
pub trait Camera: Send + Sync {
    /// Position all primary rays start from.
    fn origin(&self) -> Vec3;

    /// Unit world-space direction through the image-plane point `ndc`.
    fn direction(&self, ndc: Vec2) -> Vec3;

    /// Primary ray through `ndc`.
    fn ray(&self, ndc: Vec2) -> Ray {
        Ray::new(self.origin(), self.direction(ndc))
    }
}

/// Fixed-origin camera looking down +Z through a [`Projection`].
#[derive(Debug, Clone, Copy)]
pub struct ProjectionCamera {
    origin: Vec3,
    projection: Projection,
}

impl ProjectionCamera {
    /// Create a camera. `fov` is the vertical field of view in degrees.
    pub fn new(origin: Vec3, fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            origin,
            projection: Projection::new(fov.to_radians(), aspect, near, far),
        }
    }

    /// Camera at `origin` using the field of view, aspect and clip range
    /// from `settings`.
    pub fn from_settings(origin: Vec3, settings: &RenderSettings) -> Self {
        Self::new(origin, settings.fov, settings.aspect(), settings.near, settings.far)
    }
}

impl Camera for ProjectionCamera {
    fn origin(&self) -> Vec3 {
        self.origin
    }

    fn direction(&self, ndc: Vec2) -> Vec3 {
        self.projection.direction(ndc)
    }
}
