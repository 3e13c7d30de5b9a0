use crate::{Interval, Vec3};

/// Axis-aligned bounding box, used to bound point sets in spatial indices.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// An empty box; growing it by a point yields that point's box.
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// The cube of half-size `radius` centred on `center`.
    pub fn around(center: Vec3, radius: f32) -> Self {
        Self {
            x: Interval::around(center.x, radius),
            y: Interval::around(center.y, radius),
            z: Interval::around(center.z, radius),
        }
    }

    /// Grow the box to include `p`.
    pub fn include(&self, p: Vec3) -> Self {
        Self {
            x: self.x.include(p.x),
            y: self.y.include(p.y),
            z: self.z.include(p.z),
        }
    }

    /// True if the two boxes intersect (touching counts).
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y) && self.z.overlaps(&other.z)
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    pub fn longest_axis(&self) -> usize {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size > y_size && x_size > z_size {
            0
        } else if y_size > z_size {
            1
        } else {
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanning(a: Vec3, b: Vec3) -> Aabb {
        Aabb::EMPTY.include(a).include(b)
    }

    #[test]
    fn test_aabb_include_from_empty() {
        let aabb = spanning(Vec3::ONE, Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(aabb.x, Interval::new(-1.0, 1.0));
        assert_eq!(aabb.y, Interval::new(1.0, 2.0));
        assert_eq!(aabb.z, Interval::new(0.0, 1.0));
    }

    #[test]
    fn test_aabb_overlaps() {
        let a = spanning(Vec3::ZERO, Vec3::splat(2.0));
        assert!(a.overlaps(&Aabb::around(Vec3::splat(3.0), 1.0)));
        assert!(!a.overlaps(&Aabb::around(Vec3::splat(3.5), 1.0)));
        assert!(!a.overlaps(&Aabb::EMPTY));
    }

    #[test]
    fn test_aabb_longest_axis() {
        assert_eq!(spanning(Vec3::ZERO, Vec3::new(10.0, 1.0, 1.0)).longest_axis(), 0);
        assert_eq!(spanning(Vec3::ZERO, Vec3::new(1.0, 10.0, 1.0)).longest_axis(), 1);
        assert_eq!(spanning(Vec3::ZERO, Vec3::new(1.0, 1.0, 10.0)).longest_axis(), 2);
    }
}
