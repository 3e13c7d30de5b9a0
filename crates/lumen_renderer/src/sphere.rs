//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    object::{Roots, Surface},
    Material, Ray,
};
use lumen_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Roots> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(oc);
        let b = oc.length_squared();

        let discriminant = a * a - b + self.radius * self.radius;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        Some(Roots::new(-a - sqrtd, -a + sqrtd))
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(center, 1.0, Arc::new(Material::default()))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Material::default()),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let roots = sphere.intersect(&ray).unwrap();

        assert!((roots.near - 0.5).abs() < 0.001); // Should hit at t=0.5
        assert!((roots.far - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_sphere_miss_is_none_not_nan() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -5.0));

        // Ray pointing away from sphere, line passes far from it
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());

        // Grid of rays that all pass outside the silhouette
        for i in 0..16 {
            let offset = 1.01 + i as f32 * 0.5;
            let ray = Ray::new(Vec3::new(offset, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
            assert_eq!(sphere.intersect(&ray), None, "offset {offset}");
        }
    }

    #[test]
    fn test_sphere_inside_has_negative_near_root() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let roots = sphere.intersect(&ray).unwrap();
        assert!(roots.near < 0.0);
        assert!(roots.far > 0.0);
        assert!((roots.far - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_tangent_ray_has_equal_roots() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 1.0, 5.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let roots = sphere.intersect(&ray).unwrap();
        assert!((roots.near - roots.far).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_normal() {
        let sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0, Arc::new(Material::default()));
        assert_eq!(sphere.normal(Vec3::new(3.0, 0.0, 0.0)), Vec3::X);
        assert_eq!(sphere.normal(Vec3::new(1.0, -2.0, 0.0)), -Vec3::Y);
    }
}
