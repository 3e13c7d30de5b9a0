//! Dielectric Fresnel split.

use lumen_math::Vec3;

/// Above this `cos_i * sin_t` the interface is treated as a perfect mirror.
const GRAZING_LIMIT: f32 = 0.999;

/// Fractions of incident light reflected and transmitted at an interface.
///
/// Each is clamped to [0, 1]; they need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FresnelSplit {
    pub reflectance: f32,
    pub transmittance: f32,
}

impl FresnelSplit {
    /// Everything reflected.
    pub const MIRROR: FresnelSplit = FresnelSplit {
        reflectance: 1.0,
        transmittance: 0.0,
    };

    /// Both branches at full weight (materials without Fresnel weighting).
    pub const FULL: FresnelSplit = FresnelSplit {
        reflectance: 1.0,
        transmittance: 1.0,
    };
}

/// Split incident light between reflection and transmission.
///
/// `ni` is the index of the medium the ray travels in, `nt` the index on
/// the far side. `direction` and `normal` must be unit length; the normal
/// may face either way.
///
/// The two polarizations' amplitudes are averaged before squaring, so
/// reflectance drops towards 0 at grazing entry rather than rising to 1.
pub fn fresnel(ni: f32, nt: f32, direction: Vec3, normal: Vec3) -> FresnelSplit {
    let cos_i = direction.dot(normal).abs().min(1.0);
    let sin_i = (1.0 - cos_i * cos_i).max(0.0).sqrt();
    let sin_t = ni / nt * sin_i;

    // Total internal reflection shows up as sin_t >= 1 even at grazing
    // angles where the product test stays below the limit.
    if cos_i * sin_t > GRAZING_LIMIT || sin_t >= 1.0 || !sin_t.is_finite() {
        return FresnelSplit::MIRROR;
    }

    let cos_t = (1.0 - sin_t * sin_t).sqrt();

    let ni_cos_i = ni * cos_i;
    let nt_cos_t = nt * cos_t;
    let ni_cos_t = ni * cos_t;
    let nt_cos_i = nt * cos_i;

    let r_perp = (ni_cos_i - nt_cos_t) / (ni_cos_i + nt_cos_t);
    let r_par = (ni_cos_t - nt_cos_i) / (ni_cos_t + nt_cos_i);

    let t_perp = 2.0 * ni_cos_i / (ni_cos_i + nt_cos_t);
    let t_par = 2.0 * ni_cos_i / (ni_cos_t + nt_cos_i);

    // Polarizations are averaged before squaring.
    let r = 0.5 * (r_perp + r_par);
    let t = 0.5 * (t_perp + t_par);

    let reflectance = r * r;
    let transmittance = if cos_i > 0.0 {
        t * t * cos_t / cos_i
    } else {
        0.0
    };

    FresnelSplit {
        reflectance: clamp_unit(reflectance),
        transmittance: clamp_unit(transmittance),
    }
}

#[inline]
fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_incidence_reflectance() {
        for (n1, n2) in [(1.0, 1.5), (1.0, 1.3), (1.5, 1.0), (1.0, 2.4)] {
            let split = fresnel(n1, n2, -Vec3::Y, Vec3::Y);
            let expected = ((n1 - n2) / (n1 + n2)).powi(2);
            assert!(
                (split.reflectance - expected).abs() < 1e-6,
                "n1={n1} n2={n2}: {} != {expected}",
                split.reflectance
            );
        }
    }

    #[test]
    fn test_matched_indices_transmit_everything() {
        let d = Vec3::new(0.3, -0.9, 0.1).normalize();
        let split = fresnel(1.3, 1.3, d, Vec3::Y);
        assert!(split.reflectance.abs() < 1e-6);
        assert!((split.transmittance - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_total_internal_reflection_is_mirror() {
        let d = Vec3::new(60f32.to_radians().sin(), -60f32.to_radians().cos(), 0.0);
        assert_eq!(fresnel(1.5, 1.0, d, Vec3::Y), FresnelSplit::MIRROR);
    }

    #[test]
    fn test_grazing_exit_is_mirror_without_nan() {
        // cos_i tiny, sin_t > 1: the product guard alone would miss this.
        let d = Vec3::new(1.0, -1e-3, 0.0).normalize();
        let split = fresnel(1.5, 1.0, d, Vec3::Y);
        assert_eq!(split, FresnelSplit::MIRROR);
    }

    #[test]
    fn test_grazing_entry_stays_finite() {
        let d = Vec3::new(1.0, -1e-4, 0.0).normalize();
        let split = fresnel(1.0, 1.5, d, Vec3::Y);
        assert!(split.reflectance.is_finite());
        assert!(split.transmittance.is_finite());
        assert!((0.0..=1.0).contains(&split.reflectance));
        assert!((0.0..=1.0).contains(&split.transmittance));
    }

    #[test]
    fn test_grazing_entry_reflects_little() {
        let d = Vec3::new(1.0, -1e-3, 0.0).normalize();
        let split = fresnel(1.0, 1.5, d, Vec3::Y);
        assert!(split.reflectance < 0.05, "{}", split.reflectance);
    }

    #[test]
    fn test_outputs_clamped_over_all_angles() {
        for i in 0..=90 {
            let angle = (i as f32).to_radians();
            let d = Vec3::new(angle.sin(), -angle.cos(), 0.0);
            for (ni, nt) in [(1.0, 1.5), (1.5, 1.0), (1.0, 1.3)] {
                let split = fresnel(ni, nt, d, Vec3::Y);
                assert!((0.0..=1.0).contains(&split.reflectance), "{i} {ni} {nt}");
                assert!((0.0..=1.0).contains(&split.transmittance), "{i} {ni} {nt}");
            }
        }
    }

    #[test]
    fn test_normal_side_does_not_matter() {
        let d = Vec3::new(0.5, -0.8, 0.0).normalize();
        assert_eq!(fresnel(1.0, 1.5, d, Vec3::Y), fresnel(1.0, 1.5, d, -Vec3::Y));
    }
}
