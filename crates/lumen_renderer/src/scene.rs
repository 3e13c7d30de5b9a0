//! Scene container and the closest-intersection resolver.

use crate::{
    object::{Intersection, Object, Surface},
    Light, PhotonMap, Ray,
};

/// A static scene: an ordered object list, point lights, and an optional
/// frozen photon map.
///
/// Object order matters: when two objects are hit at the same distance the
/// earlier one wins.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
    photons: Option<PhotonMap>,
}

impl Scene {
    /// Create a scene without a photon map.
    pub fn new(objects: Vec<Object>, lights: Vec<Light>) -> Self {
        Self {
            objects,
            lights,
            photons: None,
        }
    }

    /// Attach a photon map. The map is never modified afterwards.
    pub fn with_photon_map(mut self, photons: PhotonMap) -> Self {
        self.photons = Some(photons);
        self
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn photon_map(&self) -> Option<&PhotonMap> {
        self.photons.as_ref()
    }

    /// Find the nearest intersection with `t >= 0` along `ray`.
    ///
    /// The near root of each object is preferred; the far root is only
    /// considered when the near root lies behind the origin, which marks the
    /// hit as coming from inside the object.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection<'_>> = None;
        let mut closest_so_far = f32::INFINITY;

        for (index, object) in self.objects.iter().enumerate() {
            let Some(roots) = object.intersect(ray) else {
                continue;
            };

            let (t, inside) = if roots.near >= 0.0 {
                (roots.near, false)
            } else if roots.far >= 0.0 {
                (roots.far, true)
            } else {
                continue;
            };

            // Strict comparison keeps the earliest object on ties.
            if t < closest_so_far {
                closest_so_far = t;
                closest = Some(Intersection {
                    t,
                    index,
                    object,
                    inside,
                });
            }
        }

        closest
    }
}
