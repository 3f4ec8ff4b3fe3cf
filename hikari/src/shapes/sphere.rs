use super::Shape;
use crate::{
    hit::HitRecord,
    math::{Point3, Ray},
};

/// A sphere defined by its center and radius.
pub struct Sphere {
    pub origin: Point3<f32>,
    pub radius: f32,
    pub material_index: u32,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(origin: Point3<f32>, radius: f32, material_index: u32) -> Self {
        Self {
            origin,
            radius,
            material_index,
        }
    }

    /// Solves the quadratic for the hit distance inside the ray's interval.
    fn hit_t(&self, ray: Ray<f32>) -> Option<f32> {
        let oc = ray.o - self.origin;

        let a = ray.d.dot(ray.d);
        let b = 2.0 * ray.d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let rd = discriminant.sqrt();
        let inv_2a = 1.0 / (2.0 * a);

        let t0 = (-b - rd) * inv_2a;
        let t1 = (-b + rd) * inv_2a;

        // t0 <= t1, so take the entry point when it is ahead of the
        // interval and the exit point otherwise, e.g. for a ray starting
        // inside the sphere.
        let t = if t0 >= ray.t_min { t0 } else { t1 };

        (t >= ray.t_min && t <= ray.t_max).then_some(t)
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: Ray<f32>, hit: &mut HitRecord) -> bool {
        match self.hit_t(ray) {
            Some(t) => {
                let p = ray.point(t);
                let n = (p - self.origin).normalized();
                hit.record(t, p, n, self.material_index);
                true
            }
            None => false,
        }
    }

    fn intersect_any(&self, ray: Ray<f32>) -> bool {
        self.hit_t(ray).is_some()
    }
}
