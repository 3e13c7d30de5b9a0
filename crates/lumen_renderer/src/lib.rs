//! Lumen renderer - CPU ray tracing with photon mapping
//!
//! A Whitted-style tracer for spheres and planes. Direct light is
//! unshadowed Lambertian, specular surfaces spawn mirror and refracted
//! rays, and indirect light comes from a photon map built before the
//! render starts.
//!
//! Rendering runs in two phases:
//! 1. [`build_photon_map`] emits photons from every light and freezes them
//!    into a kd-tree that is attached to the [`Scene`].
//! 2. [`render`] traces bands of image rows across rayon's thread pool.

mod band;
mod camera;
mod fresnel;
mod object;
mod photon;
mod photon_map;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod tracer;

pub use band::{render_band, row_bands, Band};
pub use camera::{Camera, ProjectionCamera};
pub use fresnel::{fresnel, FresnelSplit};
pub use object::{Intersection, Object, Roots, Surface};
pub use photon::{build_photon_map, cube_direction, Bounce, Photon, PhotonEmitter};
pub use photon_map::PhotonMap;
pub use plane::Plane;
pub use renderer::{color_to_rgba, pixel_index, pixel_offset, render, render_pixel, ImageBuffer};
pub use scene::Scene;
pub use shading::shade;
pub use sphere::Sphere;
pub use tracer::{TraceResult, Tracer, AIR_INDEX};

/// Re-export scene description types from lumen_core
pub use lumen_core::{Color, ConfigError, Light, Material, RenderSettings};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Aabb, Interval, Ray, Vec2, Vec3};
