//! Recursive visibility tracer.
//!
//! Each hit combines direct Lambertian lighting with indirect light gathered
//! from the photon map, then spawns a mirror ray and a refracted ray off
//! specular surfaces. Recursion stops after `max_depth` levels; there is no
//! stochastic termination on view rays. Contributions are not normalized
//! across bounces, so colors can exceed 1 and are clamped only at output.

use crate::{
    fresnel, shade, Color, FresnelSplit, Intersection, PhotonMap, Ray, RenderSettings, Scene,
};
use lumen_math::{reflect, refract, Vec3};

/// Refractive index of the medium surrounding all objects.
pub const AIR_INDEX: f32 = 1.0;

/// Scale applied to the photon density estimate.
const GATHER_SCALE: f32 = 3.0;

/// Weight of direct lighting when photon mapping is on.
const DIRECT_WEIGHT: f32 = 0.5;

/// Refractive indices `(ni, nt)` on the near and far side of the surface
/// at `hit`, for a ray travelling through `medium_index`.
fn index_pair(hit: &Intersection<'_>, medium_index: f32) -> (f32, f32) {
    let refractive_index = hit.material().refractive_index;
    if hit.inside {
        (refractive_index, AIR_INDEX)
    } else {
        (medium_index, refractive_index)
    }
}

/// `normal` flipped to the side `direction` arrives from. Planes can be hit
/// from behind.
fn facing(direction: Vec3, normal: Vec3) -> Vec3 {
    if direction.dot(normal) > 0.0 {
        -normal
    } else {
        normal
    }
}

/// Mirror ray leaving `point` on the incoming side.
fn reflected_ray(ray: &Ray, point: Vec3, normal: Vec3, epsilon: f32) -> Ray {
    let direction = reflect(ray.direction, normal);
    Ray::offset(point, facing(ray.direction, normal), epsilon, direction)
}

/// Snell ray leaving `point` on the far side, or `None` on total internal
/// reflection. `eta` is `ni / nt`.
fn refracted_ray(ray: &Ray, point: Vec3, normal: Vec3, eta: f32, epsilon: f32) -> Option<Ray> {
    let direction = refract(ray.direction, normal, eta)?;
    Some(Ray::offset(point, -facing(ray.direction, normal), epsilon, direction))
}

/// Result of tracing one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceResult {
    /// Whether the ray hit anything
    pub hit: bool,
    /// Accumulated radiance (unclamped)
    pub color: Color,
    /// Hit position (zero on a miss)
    pub point: Vec3,
    /// Index of the hit object in the scene
    pub object: Option<usize>,
    /// Deepest recursion level reached below this ray
    pub depth: u32,
}

impl TraceResult {
    /// The result of a ray that hits nothing.
    pub fn miss() -> Self {
        Self {
            hit: false,
            color: Color::ZERO,
            point: Vec3::ZERO,
            object: None,
            depth: 0,
        }
    }
}

/// Traces view rays through a scene.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    settings: &'a RenderSettings,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, settings: &'a RenderSettings) -> Self {
        Self { scene, settings }
    }

    /// The photon map, if photon mapping is enabled and one was built.
    fn photon_map(&self) -> Option<&'a PhotonMap> {
        if self.settings.photon_mapping {
            self.scene.photon_map()
        } else {
            None
        }
    }

    /// Trace a primary ray starting in air.
    pub fn trace(&self, ray: &Ray) -> TraceResult {
        self.trace_at(ray, AIR_INDEX, 0)
    }

    /// Trace `ray` travelling through a medium of index `medium_index`,
    /// `depth` levels below the primary ray.
    pub fn trace_at(&self, ray: &Ray, medium_index: f32, depth: u32) -> TraceResult {
        let Some(hit) = self.scene.closest_intersection(ray) else {
            return TraceResult::miss();
        };

        let point = hit.point(ray);
        let normal = hit.normal(point);
        let material = hit.material();

        let direct = shade(point, normal, material, self.scene.lights());
        let mut color = match self.photon_map() {
            Some(photons) => {
                let indirect =
                    photons.gather(point, normal, self.settings.gather_radius, GATHER_SCALE);
                direct * DIRECT_WEIGHT + indirect
            }
            None => direct,
        };

        let mut deepest = depth;
        if material.is_specular() && depth + 1 < self.settings.max_depth {
            let (ni, nt) = index_pair(&hit, medium_index);
            let split = if material.fresnel {
                fresnel(ni, nt, ray.direction, normal)
            } else {
                FresnelSplit::FULL
            };
            let epsilon = self.settings.ray_epsilon;

            let reflect_weight = split.reflectance * material.reflection;
            if reflect_weight > 0.0 {
                let reflected = reflected_ray(ray, point, normal, epsilon);
                let result = self.trace_at(&reflected, medium_index, depth + 1);
                deepest = deepest.max(result.depth);
                color += result.color * reflect_weight;
            }

            let refract_weight = split.transmittance * material.refraction;
            if refract_weight > 0.0 {
                if let Some(refracted) = refracted_ray(ray, point, normal, ni / nt, epsilon) {
                    let result = self.trace_at(&refracted, nt, depth + 1);
                    deepest = deepest.max(result.depth);
                    color += result.color * refract_weight;
                }
            }
        }

        TraceResult {
            hit: true,
            color,
            point,
            object: Some(hit.index),
            depth: deepest,
        }
    }
}
