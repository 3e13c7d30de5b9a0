//! Direct lighting.

use crate::{Color, Light, Material};
use lumen_math::Vec3;

/// Unshadowed Lambertian lighting at `point`.
///
/// Each light whose direction makes a positive cosine with `normal` adds
/// `color * diffuse * cos`. There is no occlusion test and no highlight
/// term; specular response comes from the tracer's secondary rays.
pub fn shade(point: Vec3, normal: Vec3, material: &Material, lights: &[Light]) -> Color {
    let mut color = Color::ZERO;
    if material.diffuse <= 0.0 {
        return color;
    }

    for light in lights {
        // A light sitting on the point has no direction.
        let Some(to_light) = (light.position - point).try_normalize() else {
            continue;
        };
        let cosine = normal.dot(to_light).max(0.0);
        let weight = material.diffuse * cosine;
        if weight > 0.0 {
            color += material.color * weight;
        }
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Material {
        Material::new(Color::new(1.0, 0.0, 0.0)).with_diffuse(0.5)
    }

    #[test]
    fn test_light_overhead_gives_full_cosine() {
        let lights = [Light::new(Vec3::new(0.0, 10.0, 0.0))];
        let c = shade(Vec3::ZERO, Vec3::Y, &red(), &lights);
        assert!((c - Color::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let lights = [Light::new(Vec3::new(0.0, -10.0, 0.0))];
        assert_eq!(shade(Vec3::ZERO, Vec3::Y, &red(), &lights), Color::ZERO);
    }

    #[test]
    fn test_lights_accumulate() {
        let lights = [
            Light::new(Vec3::new(0.0, 10.0, 0.0)),
            Light::new(Vec3::new(10.0, 10.0, 0.0)),
        ];
        let c = shade(Vec3::ZERO, Vec3::Y, &red(), &lights);
        let expected = 0.5 + 0.5 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((c.x - expected).abs() < 1e-5);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn test_no_diffuse_is_black() {
        let lights = [Light::new(Vec3::new(0.0, 10.0, 0.0))];
        let mirror = red().with_diffuse(0.0);
        assert_eq!(shade(Vec3::ZERO, Vec3::Y, &mirror, &lights), Color::ZERO);
    }

    #[test]
    fn test_coincident_light_is_skipped() {
        let lights = [Light::new(Vec3::ONE)];
        assert_eq!(shade(Vec3::ONE, Vec3::Y, &red(), &lights), Color::ZERO);
    }
}
