use std::ops::Range;

use crate::math::{Bounds3, Ray};

// https://jacco.ompf2.com/2022/04/13/how-to-build-a-bvh-part-1-basics/

/// A node in a flattened bounding volume hierarchy.
///
/// `primitive_count == 0` marks an interior node whose children sit at
/// `left_first` and `left_first + 1`; a nonzero count marks a leaf over the
/// primitive range `[left_first, left_first + primitive_count)`. A node is
/// never both.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BvhNode {
    pub bounds: Bounds3<f32>,
    pub left_first: u32,
    pub primitive_count: u32,
}

impl BvhNode {
    /// Creates an interior node with children at `left_child` and `left_child + 1`.
    pub fn interior(bounds: Bounds3<f32>, left_child: u32) -> Self {
        Self {
            bounds,
            left_first: left_child,
            primitive_count: 0,
        }
    }

    /// Creates a leaf node over `primitive_count` primitives starting at `first_primitive`.
    pub fn leaf(bounds: Bounds3<f32>, first_primitive: u32, primitive_count: u32) -> Self {
        Self {
            bounds,
            left_first: first_primitive,
            primitive_count,
        }
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.primitive_count != 0
    }

    /// Returns the primitive index range of a leaf node.
    pub fn primitive_range(&self) -> Range<usize> {
        let first = self.left_first as usize;
        first..first + self.primitive_count as usize
    }
}

/// Collects the indices of leaf nodes whose bounds `ray` overlaps.
///
/// Depth-first descent from `root_index`, pruning subtrees whose bounds the
/// ray misses. Uses an explicit stack instead of recursion so tree height is
/// not bounded by the call stack; children are pushed right-then-left, which
/// preserves the left-first visit order of a recursive walk.
///
/// The node array must form a valid tree rooted at `root_index`; an empty
/// array yields no candidates.
pub fn gather_leaves(nodes: &[BvhNode], root_index: u32, ray: Ray<f32>, leaves: &mut Vec<u32>) {
    if nodes.is_empty() {
        return;
    }

    let mut to_visit = vec![root_index];
    while let Some(index) = to_visit.pop() {
        let node = &nodes[index as usize];

        if !node.bounds.intersect(ray) {
            continue;
        }

        if node.is_leaf() {
            leaves.push(index);
        } else {
            to_visit.push(node.left_first + 1);
            to_visit.push(node.left_first);
        }
    }
}
