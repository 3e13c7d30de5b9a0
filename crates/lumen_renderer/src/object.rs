//! Surface trait and the closed set of scene objects.

use crate::{Material, Plane, Ray, Sphere};
use lumen_math::Vec3;

/// The two ray parameters at which a ray crosses a surface.
///
/// `near <= far`. A sphere hit from inside has `near < 0 <= far`; a plane
/// reports the same value twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roots {
    pub near: f32,
    pub far: f32,
}

impl Roots {
    pub fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }

    /// Both roots at the same parameter.
    pub fn single(t: f32) -> Self {
        Self { near: t, far: t }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Both crossings of the ray's line with the surface, or `None` if the
    /// line misses. Roots behind the origin are still reported.
    fn intersect(&self, ray: &Ray) -> Option<Roots>;

    /// Outward unit normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;

    /// Material attached to the surface.
    fn material(&self) -> &Material;
}

/// A scene object.
///
/// New primitive kinds are added as variants here.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
}

impl Surface for Object {
    fn intersect(&self, ray: &Ray) -> Option<Roots> {
        match self {
            Object::Sphere(sphere) => sphere.intersect(ray),
            Object::Plane(plane) => plane.intersect(ray),
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        match self {
            Object::Sphere(sphere) => sphere.normal(point),
            Object::Plane(plane) => plane.normal(point),
        }
    }

    fn material(&self) -> &Material {
        match self {
            Object::Sphere(sphere) => sphere.material(),
            Object::Plane(plane) => plane.material(),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

/// Record of the nearest ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Ray parameter of the hit (>= 0)
    pub t: f32,
    /// Position of the object in the scene's object list
    pub index: usize,
    /// The object that was hit
    pub object: &'a Object,
    /// The ray started inside the object (the far root was taken)
    pub inside: bool,
}

impl<'a> Intersection<'a> {
    /// Hit position along `ray`.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Vec3 {
        ray.at(self.t)
    }

    /// Surface normal at `point`, flipped to face inwards when the ray
    /// started inside the object.
    pub fn normal(&self, point: Vec3) -> Vec3 {
        let normal = self.object.normal(point);
        if self.inside {
            -normal
        } else {
            normal
        }
    }

    pub fn material(&self) -> &'a Material {
        self.object.material()
    }
}
