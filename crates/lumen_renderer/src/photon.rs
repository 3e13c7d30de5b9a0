//! Photon emission and transport.
//!
//! Photons leave every light in directions drawn from the `[-1, 1]³` cube
//! and normalized. This favours the cube's diagonals over a true uniform
//! sphere sample; rendered output depends on that distribution, so it is
//! kept as is. At each hit a roulette draw over the material's
//! `(diffuse, specular, absorb)` weights decides whether the photon is
//! stored and scattered diffusely, mirrored, or absorbed.

use rand::{Rng, RngCore};

use crate::{shade, Color, PhotonMap, RenderSettings, Scene};
use lumen_math::{reflect, Ray, Vec3};

/// A stored photon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Photon {
    /// Where the photon landed
    pub position: Vec3,
    /// Carried RGB power
    pub power: Color,
    /// Direction of travel when it landed (unit length)
    pub incoming: Vec3,
}

impl Photon {
    pub fn new(position: Vec3, power: Color, incoming: Vec3) -> Self {
        Self {
            position,
            power,
            incoming,
        }
    }
}

/// Outcome of the roulette draw at a photon hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounce {
    Diffuse,
    Specular,
    Absorb,
}

impl Bounce {
    /// Classify `xi ∈ [0, 1)` against the normalized weight triple.
    /// A triple that sums to zero always absorbs.
    pub fn choose(diffuse: f32, specular: f32, absorb: f32, xi: f32) -> Bounce {
        let diffuse = diffuse.max(0.0);
        let specular = specular.max(0.0);
        let total = diffuse + specular + absorb.max(0.0);
        if !(total > 0.0) {
            return Bounce::Absorb;
        }

        let p_diffuse = diffuse / total;
        let p_specular = specular / total;
        if xi < p_diffuse {
            Bounce::Diffuse
        } else if xi < p_diffuse + p_specular {
            Bounce::Specular
        } else {
            Bounce::Absorb
        }
    }
}

/// Sample a direction from the `[-1, 1]³` cube, normalized.
///
/// Samples too close to the origin to normalize are redrawn.
pub fn cube_direction(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let v = Vec3::new(
            1.0 - 2.0 * rng.gen::<f32>(),
            1.0 - 2.0 * rng.gen::<f32>(),
            1.0 - 2.0 * rng.gen::<f32>(),
        );
        if let Some(dir) = v.try_normalize() {
            return dir;
        }
    }
}

/// Traces photon paths from every light in a scene.
pub struct PhotonEmitter<'a> {
    scene: &'a Scene,
    settings: &'a RenderSettings,
}

impl<'a> PhotonEmitter<'a> {
    pub fn new(scene: &'a Scene, settings: &'a RenderSettings) -> Self {
        Self { scene, settings }
    }

    /// Run the emission pass and return every recorded photon.
    ///
    /// At most `lights × photons_per_light × photon_depth` photons are
    /// produced.
    pub fn emit(&self, rng: &mut dyn RngCore) -> Vec<Photon> {
        let lights = self.scene.lights();
        let mut photons = Vec::with_capacity(self.settings.max_photons(lights.len()));

        for (i, light) in lights.iter().enumerate() {
            let before = photons.len();
            for _ in 0..self.settings.photons_per_light {
                let ray = Ray::new(light.position, cube_direction(rng));
                self.trace_path(ray, rng, &mut photons);
            }
            log::debug!(
                "Light {} at {:?}: {} photons stored",
                i,
                light.position,
                photons.len() - before
            );
        }

        photons
    }

    /// Follow one photon path, pushing a photon at every diffuse bounce.
    fn trace_path(&self, mut ray: Ray, rng: &mut dyn RngCore, photons: &mut Vec<Photon>) {
        let power = self.settings.power_per_photon();
        let epsilon = self.settings.ray_epsilon;
        let mut accumulated = Color::ONE;

        for _ in 0..self.settings.photon_depth {
            let Some(hit) = self.scene.closest_intersection(&ray) else {
                return;
            };
            let point = hit.point(&ray);
            let normal = hit.normal(point);
            let material = hit.material();

            let xi: f32 = rng.gen();
            let direction = match Bounce::choose(
                material.diffuse,
                material.specular,
                material.absorb,
                xi,
            ) {
                Bounce::Diffuse => {
                    accumulated *= shade(point, normal, material, self.scene.lights());
                    photons.push(Photon::new(point, accumulated * power, ray.direction));

                    let dir = cube_direction(rng);
                    if dir.dot(normal) < 0.0 {
                        -dir
                    } else {
                        dir
                    }
                }
                Bounce::Specular => reflect(ray.direction, normal),
                Bounce::Absorb => return,
            };

            ray = Ray::offset(point, direction, epsilon, direction);
        }
    }
}

/// Emit photons for `scene` and freeze them into a [`PhotonMap`].
pub fn build_photon_map(
    scene: &Scene,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> PhotonMap {
    if scene.lights().is_empty() {
        log::warn!("Photon mapping enabled but the scene has no lights");
    }

    let start = std::time::Instant::now();
    let photons = PhotonEmitter::new(scene, settings).emit(rng);
    let emitted = photons.len();
    let map = PhotonMap::build(photons);

    log::info!(
        "Emitted {} photons from {} lights in {:?}",
        emitted,
        scene.lights().len(),
        start.elapsed()
    );

    map
}
