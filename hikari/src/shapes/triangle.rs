use super::{Query, Shape};
use crate::{
    hit::HitRecord,
    math::{Point3, Ray, Vec3},
};

// https://en.wikipedia.org/wiki/M%C3%B6ller%E2%80%93Trumbore_intersection_algorithm

/// Winding-based culling policy for triangles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CullMode {
    #[default]
    None,
    BackFace,
    FrontFace,
}

/// A triangle with a precomputed face normal.
pub struct Triangle {
    pub v0: Point3<f32>,
    pub v1: Point3<f32>,
    pub v2: Point3<f32>,
    pub normal: Vec3<f32>,
    pub cull_mode: CullMode,
    pub material_index: u32,
}

impl Triangle {
    /// Möller-Trumbore test for the hit distance inside the ray's interval.
    ///
    /// Culling sees opposite windings for the two query kinds: occlusion
    /// rays travel the path in reverse, so an any-hit query culls the face
    /// a closest-hit query would keep.
    fn hit_t(&self, ray: Ray<f32>, query: Query) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let pvec = ray.d.cross(edge2);
        let det = edge1.dot(pvec);

        // Ray parallel to the triangle plane, which also covers
        // zero-area triangles.
        if det == 0.0 {
            return None;
        }

        let culled = match (self.cull_mode, query) {
            (CullMode::BackFace, Query::Any) => det > 0.0,
            (CullMode::FrontFace, Query::Any) => det < 0.0,
            (CullMode::BackFace, Query::Closest) => det < 0.0,
            (CullMode::FrontFace, Query::Closest) => det > 0.0,
            (CullMode::None, _) => false,
        };
        if culled {
            return None;
        }

        let inv_det = 1.0 / det;
        let tvec = ray.o - self.v0;

        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = ray.d.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;

        (t >= ray.t_min && t <= ray.t_max).then_some(t)
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: Ray<f32>, hit: &mut HitRecord) -> bool {
        match self.hit_t(ray, Query::Closest) {
            Some(t) => {
                hit.record(t, ray.point(t), self.normal, self.material_index);
                true
            }
            None => false,
        }
    }

    fn intersect_any(&self, ray: Ray<f32>) -> bool {
        self.hit_t(ray, Query::Any).is_some()
    }
}
