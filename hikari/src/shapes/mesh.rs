use log::warn;

use super::{CullMode, Shape, Triangle};
use crate::{
    bvh::{gather_leaves, BvhNode},
    hit::HitRecord,
    math::{Point3, Ray, Vec3},
};

/// An indexed triangle mesh with an attached bounding volume hierarchy.
///
/// Positions are expected in world space. Face normals are one per triangle
/// and precomputed from the positions. The BVH is built externally over the
/// triangle order implied by the index buffer and only read here;
/// retransforming the positions invalidates it.
pub struct TriangleMesh {
    pub positions: Vec<Point3<f32>>,
    /// Face normals, one per triangle.
    pub normals: Vec<Vec3<f32>>,
    /// Triangle vertex indices stored as triplets.
    pub indices: Vec<u32>,
    pub cull_mode: CullMode,
    pub material_index: u32,
    pub bvh_nodes: Vec<BvhNode>,
    pub root_node_index: u32,
}

impl TriangleMesh {
    /// Creates a new `TriangleMesh` and precomputes its face normals.
    ///
    /// The mesh starts without a BVH and reports no hits until one is
    /// attached with [set_bvh](Self::set_bvh).
    pub fn new(
        positions: Vec<Point3<f32>>,
        indices: Vec<u32>,
        cull_mode: CullMode,
        material_index: u32,
    ) -> Self {
        let normals = face_normals(&positions, &indices);
        Self {
            positions,
            normals,
            indices,
            cull_mode,
            material_index,
            bvh_nodes: Vec::new(),
            root_node_index: 0,
        }
    }

    /// Attaches an externally built BVH over this mesh's triangles.
    pub fn set_bvh(&mut self, nodes: Vec<BvhNode>, root_node_index: u32) {
        self.bvh_nodes = nodes;
        self.root_node_index = root_node_index;
    }

    /// Resolves the triangle at `index` through the index buffer.
    fn triangle(&self, index: usize) -> Triangle {
        let first = index * 3;
        Triangle {
            v0: self.positions[self.indices[first] as usize],
            v1: self.positions[self.indices[first + 1] as usize],
            v2: self.positions[self.indices[first + 2] as usize],
            normal: self.normals[index],
            cull_mode: self.cull_mode,
            material_index: self.material_index,
        }
    }
}

impl Shape for TriangleMesh {
    fn intersect(&self, ray: Ray<f32>, hit: &mut HitRecord) -> bool {
        let mut leaves = Vec::new();
        gather_leaves(&self.bvh_nodes, self.root_node_index, ray, &mut leaves);

        // Leave the record as-is so hits accumulated from earlier shapes
        // survive a miss on this mesh.
        if leaves.is_empty() {
            return hit.did_hit;
        }

        for leaf in &leaves {
            for index in self.bvh_nodes[*leaf as usize].primitive_range() {
                self.triangle(index).intersect(ray, hit);
            }
        }

        hit.did_hit
    }

    fn intersect_any(&self, ray: Ray<f32>) -> bool {
        let mut leaves = Vec::new();
        gather_leaves(&self.bvh_nodes, self.root_node_index, ray, &mut leaves);

        for leaf in &leaves {
            for index in self.bvh_nodes[*leaf as usize].primitive_range() {
                if self.triangle(index).intersect_any(ray) {
                    return true;
                }
            }
        }

        false
    }
}

/// Computes one face normal per index triplet.
///
/// A zero-area triangle gets a zero normal instead of the NaNs
/// normalization would produce. Such a triangle can never commit a hit
/// since its intersection determinant is zero, so the placeholder normal
/// stays out of every committed record.
fn face_normals(positions: &[Point3<f32>], indices: &[u32]) -> Vec<Vec3<f32>> {
    indices
        .chunks_exact(3)
        .enumerate()
        .map(|(triangle, i)| {
            let v0 = positions[i[0] as usize];
            let v1 = positions[i[1] as usize];
            let v2 = positions[i[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);
            if normal.len_sqr() == 0.0 {
                warn!("Degenerate triangle {} has no normal", triangle);
                Vec3::zeros()
            } else {
                normal.normalized()
            }
        })
        .collect()
}
