//! Ray-geometry intersection core for a ray tracer.
//!
//! Closed-form ray tests for spheres, planes and triangles, plus
//! BVH-accelerated triangle mesh intersection. Every test comes in a
//! closest-hit form that folds into a [HitRecord](hit::HitRecord) and an
//! any-hit form for occlusion rays.

pub mod bvh;
pub mod hit;
pub mod math;
pub mod shapes;
