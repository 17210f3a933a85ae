//! Collision geometry: rays, spheres and the tests that tie them together.
//!
//! All functions here are pure.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A half-line starting at `origin`. `dir` is expected to be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Build a ray, normalizing the direction. A zero direction yields `None`.
    pub fn new(origin: Vec3, dir: Vec3) -> Option<Self> {
        dir.try_normalize().map(|dir| Self { origin, dir })
    }

    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Bounding sphere used for hit detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

/// Ray/sphere intersection via the projection of the origin-to-centre
/// vector onto the ray direction.
///
/// Returns the entry and exit distances `(t0, t1)` along the ray, or `None`
/// when the sphere centre lies behind the origin or the closest approach
/// misses the sphere. A tangent ray yields `t0 == t1`.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> Option<(f32, f32)> {
    let l = sphere.center - ray.origin;
    let tca = l.dot(ray.dir);
    if tca < 0.0 {
        return None;
    }

    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return None;
    }

    let thc = (r2 - d2).sqrt();
    Some((tca - thc, tca + thc))
}

/// Euclidean distance between two points.
pub fn distance_3d(a: Vec3, b: Vec3) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

/// Distance ignoring the vertical axis.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}
