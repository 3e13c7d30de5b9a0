//! Reflection and refraction of direction vectors.

use crate::Vec3;

/// Reflect `v` about the normal `n`.
///
/// `n` must be unit length. Reflecting twice about the same normal returns
/// the original vector.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit direction `v` through a surface with unit normal `n`.
///
/// `eta` is the ratio `n_incident / n_transmitted`. The normal may face
/// either side of the surface; it is oriented against `v` internally.
/// Returns `None` on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let mut cos_i = -v.dot(n);
    let mut n = n;
    if cos_i < 0.0 {
        cos_i = -cos_i;
        n = -n;
    }

    let sin2_t = eta * eta * (1.0 - cos_i * cos_i).max(0.0);
    if sin2_t >= 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    (eta * v + (eta * cos_i - cos_t) * n).try_normalize()
}
