//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    object::{Roots, Surface},
    Material, Ray,
};
use lumen_math::Vec3;

/// Below this `|direction · normal|` a ray is treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane through `point` with a fixed normal.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized; a zero normal yields
    /// a plane that no ray can hit.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Roots> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        Some(Roots::single(t))
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
