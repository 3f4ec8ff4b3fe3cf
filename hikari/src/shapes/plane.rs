use super::Shape;
use crate::{
    hit::HitRecord,
    math::{Point3, Ray, Vec3},
};

/// An infinite plane through `origin` with the given normal.
pub struct Plane {
    pub origin: Point3<f32>,
    pub normal: Vec3<f32>,
    pub material_index: u32,
}

impl Plane {
    /// Creates a new `Plane`.
    pub fn new(origin: Point3<f32>, normal: Vec3<f32>, material_index: u32) -> Self {
        Self {
            origin,
            normal,
            material_index,
        }
    }

    /// Solves for the hit distance inside the ray's interval.
    ///
    /// A ray parallel to the plane divides by zero; the resulting infinite
    /// or NaN distance fails the finite-interval check. The explicit
    /// `is_finite` also covers unbounded intervals, where `t_max` itself is
    /// infinite and could not reject an infinite candidate.
    fn hit_t(&self, ray: Ray<f32>) -> Option<f32> {
        let t = (self.origin - ray.o).dot(self.normal) / ray.d.dot(self.normal);

        (t.is_finite() && t >= ray.t_min && t <= ray.t_max).then_some(t)
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: Ray<f32>, hit: &mut HitRecord) -> bool {
        match self.hit_t(ray) {
            Some(t) => {
                hit.record(t, ray.point(t), self.normal, self.material_index);
                true
            }
            None => false,
        }
    }

    fn intersect_any(&self, ray: Ray<f32>) -> bool {
        self.hit_t(ray).is_some()
    }
}
