//! Static kd-tree over photon positions.
//!
//! Built once from a finished batch of photons, then only queried. The tree
//! owns its photons and exposes no mutation, so it can be shared by every
//! render thread without locking.

use crate::{Color, Photon};
use lumen_math::{Aabb, Vec3};

/// Maximum photons per leaf node before splitting.
const LEAF_MAX_SIZE: usize = 8;

/// kd-tree node - either a branch with two children or a leaf with photons.
#[derive(Debug)]
enum KdNode {
    /// Internal node with two children.
    Branch {
        left: Box<KdNode>,
        right: Box<KdNode>,
        bbox: Aabb,
    },
    /// Leaf node with a small number of photons.
    Leaf { photons: Vec<Photon>, bbox: Aabb },
    /// Empty tree.
    Empty,
}

impl KdNode {
    /// Median split on the longest axis of the photon bounds.
    fn build(mut photons: Vec<Photon>) -> Self {
        if photons.is_empty() {
            return KdNode::Empty;
        }

        let bbox = photons
            .iter()
            .fold(Aabb::EMPTY, |acc, photon| acc.include(photon.position));

        if photons.len() <= LEAF_MAX_SIZE {
            return KdNode::Leaf { photons, bbox };
        }

        let axis = bbox.longest_axis();
        let mid = photons.len() / 2;
        photons.select_nth_unstable_by(mid, |a, b| {
            a.position[axis]
                .partial_cmp(&b.position[axis])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let right_photons = photons.split_off(mid);
        let left_photons = photons;

        KdNode::Branch {
            left: Box::new(Self::build(left_photons)),
            right: Box::new(Self::build(right_photons)),
            bbox,
        }
    }

    fn for_each_within<'a, F>(&'a self, query: &Aabb, center: Vec3, radius_sq: f32, f: &mut F)
    where
        F: FnMut(&'a Photon, f32),
    {
        match self {
            KdNode::Empty => {}

            KdNode::Leaf { photons, bbox } => {
                if !bbox.overlaps(query) {
                    return;
                }
                for photon in photons {
                    let dist_sq = (photon.position - center).length_squared();
                    if dist_sq <= radius_sq {
                        f(photon, dist_sq);
                    }
                }
            }

            KdNode::Branch { left, right, bbox } => {
                if !bbox.overlaps(query) {
                    return;
                }
                left.for_each_within(query, center, radius_sq, f);
                right.for_each_within(query, center, radius_sq, f);
            }
        }
    }
}

/// Photons indexed for radius queries.
#[derive(Debug)]
pub struct PhotonMap {
    root: KdNode,
    len: usize,
}

impl PhotonMap {
    /// Build the index. Photons with non-finite positions are dropped.
    pub fn build(photons: Vec<Photon>) -> Self {
        let photons: Vec<Photon> = photons
            .into_iter()
            .filter(|photon| photon.position.is_finite())
            .collect();
        let len = photons.len();

        Self {
            root: KdNode::build(photons),
            len,
        }
    }

    /// Number of stored photons.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visit every photon within `radius` of `center`, along with its
    /// squared distance.
    pub fn for_each_within<'a, F>(&'a self, center: Vec3, radius: f32, mut f: F)
    where
        F: FnMut(&'a Photon, f32),
    {
        if radius <= 0.0 || !center.is_finite() {
            return;
        }
        let query = Aabb::around(center, radius);
        self.root
            .for_each_within(&query, center, radius * radius, &mut f);
    }

    /// Collect the photons within `radius` of `center`.
    pub fn within(&self, center: Vec3, radius: f32) -> Vec<&Photon> {
        let mut found = Vec::new();
        self.for_each_within(center, radius, |photon, _| found.push(photon));
        found
    }

    /// Density estimate of indirect light at a surface point.
    ///
    /// Each photon within `radius` is weighted by the cosine between the
    /// surface normal and its reversed incoming direction and by a cone
    /// filter `1 - d / radius`. The sum is normalized by the disc area
    /// `π r²` and scaled by `scale`.
    pub fn gather(&self, point: Vec3, normal: Vec3, radius: f32, scale: f32) -> Color {
        let mut sum = Color::ZERO;
        self.for_each_within(point, radius, |photon, dist_sq| {
            let cosine = (-normal.dot(photon.incoming)).max(0.0);
            let falloff = 1.0 - dist_sq.sqrt() / radius;
            sum += photon.power * (cosine * falloff);
        });

        let area = std::f32::consts::PI * radius * radius;
        if area > 0.0 {
            sum * (scale / area)
        } else {
            Color::ZERO
        }
    }
}
