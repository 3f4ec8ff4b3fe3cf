mod mesh;
mod plane;
mod sphere;
mod triangle;

pub use mesh::TriangleMesh;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::{CullMode, Triangle};

use crate::{hit::HitRecord, math::Ray};

/// The two kinds of intersection query.
///
/// Triangle culling applies opposite winding conventions to the two kinds,
/// so the query kind is threaded through explicitly instead of being
/// implied by which method was called deeper in a mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Occlusion test that only needs a boolean answer and may short-circuit.
    Any,
    /// Test that must find the globally nearest intersection.
    Closest,
}

pub trait Shape: Send + Sync {
    /// Intersects [Ray] with this shape, folding the result into `hit`.
    ///
    /// Returns `true` if a candidate distance landed inside the ray's
    /// interval; `hit` is only overwritten when that candidate is strictly
    /// closer than the hit already recorded.
    fn intersect(&self, ray: Ray<f32>, hit: &mut HitRecord) -> bool;

    /// Checks if [Ray] intersects this shape at all.
    fn intersect_any(&self, ray: Ray<f32>) -> bool;
}
