//! Surface optical coefficients.

use lumen_math::Vec3;

/// Color type alias (linear RGB, typically 0-1 but unbounded)
pub type Color = Vec3;

/// Optical coefficients of a surface.
///
/// Materials are immutable once a scene is built and are shared between
/// objects behind an `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Surface color (linear RGB)
    pub color: Color,

    /// Lambertian response in [0, 1]
    pub diffuse: f32,

    /// Specular weight in [0, 1]. Gates the reflection/refraction branch of
    /// the tracer and is a roulette weight during photon transport.
    pub specular: f32,

    /// Absorption roulette weight in [0, 1]. Need not sum to 1 with
    /// `diffuse + specular`; the triple is normalized when sampled.
    pub absorb: f32,

    /// Scale applied to the mirror-reflected contribution (>= 0)
    pub reflection: f32,

    /// Scale applied to the refracted contribution (>= 0)
    pub refraction: f32,

    /// Index of refraction (> 0)
    pub refractive_index: f32,

    /// Split reflection/refraction with the Fresnel equations instead of
    /// weighting both fully
    pub fresnel: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            diffuse: 0.8,
            specular: 0.0,
            absorb: 0.2,
            reflection: 0.0,
            refraction: 0.0,
            refractive_index: 1.0,
            fresnel: false,
        }
    }
}

impl Material {
    /// A purely diffuse material with the given color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// A matte surface. Light that is not diffusely reflected is absorbed.
    pub fn diffuse(color: Color, diffuse: f32) -> Self {
        Self::new(color)
            .with_diffuse(diffuse)
            .with_absorb((1.0 - diffuse).max(0.0))
    }

    /// A partly mirrored surface. The weight not spent on `diffuse` goes to
    /// the specular branch, which adds the mirror image scaled by
    /// `reflection`.
    pub fn mirror(color: Color, diffuse: f32, reflection: f32) -> Self {
        Self::new(color)
            .with_diffuse(diffuse)
            .with_absorb(0.0)
            .with_reflection((1.0 - diffuse).max(0.0), reflection)
    }

    /// A Fresnel-weighted dielectric that both reflects and refracts.
    pub fn glass(
        color: Color,
        diffuse: f32,
        reflection: f32,
        refraction: f32,
        refractive_index: f32,
    ) -> Self {
        Self::mirror(color, diffuse, reflection)
            .with_refraction(refraction, refractive_index)
            .with_fresnel(true)
    }

    pub fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.diffuse = diffuse;
        self
    }

    pub fn with_absorb(mut self, absorb: f32) -> Self {
        self.absorb = absorb;
        self
    }

    /// Enable the specular branch with a mirror contribution of `reflection`.
    pub fn with_reflection(mut self, specular: f32, reflection: f32) -> Self {
        self.specular = specular;
        self.reflection = reflection;
        self
    }

    /// Add a refracted contribution through a medium of index `refractive_index`.
    pub fn with_refraction(mut self, refraction: f32, refractive_index: f32) -> Self {
        self.refraction = refraction;
        self.refractive_index = refractive_index;
        self
    }

    pub fn with_fresnel(mut self, fresnel: bool) -> Self {
        self.fresnel = fresnel;
        self
    }

    /// True if the tracer spawns secondary rays off this surface.
    pub fn is_specular(&self) -> bool {
        self.specular > 0.0
    }
}
