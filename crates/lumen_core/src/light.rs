//! Point lights.

use lumen_math::Vec3;

/// A point light.
///
/// Lights carry only a position; their intensity is folded into the
/// diffuse coefficient of the materials they illuminate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }
}
