#[cfg(test)]
mod tests {
    use hikari::bvh::{gather_leaves, BvhNode};
    use hikari::math::{point3, vec3, Bounds3, Ray};

    // Root box spanning x in [-2, 2] with leaf children over each half
    fn two_leaf_tree() -> Vec<BvhNode> {
        let left = Bounds3::new(point3(-2.0, -1.0, -1.0), point3(0.0, 1.0, 1.0));
        let right = Bounds3::new(point3(0.0, -1.0, -1.0), point3(2.0, 1.0, 1.0));
        vec![
            BvhNode::interior(left.union_b(right), 1),
            BvhNode::leaf(left, 0, 2),
            BvhNode::leaf(right, 2, 2),
        ]
    }

    #[test]
    fn node_kinds() {
        let nodes = two_leaf_tree();
        assert!(!nodes[0].is_leaf());
        assert!(nodes[1].is_leaf());
        assert!(nodes[2].is_leaf());
        assert_eq!(nodes[1].primitive_range(), 0..2);
        assert_eq!(nodes[2].primitive_range(), 2..4);
    }

    #[test]
    fn gathers_overlapped_leaf() {
        let nodes = two_leaf_tree();
        let r = Ray::new(point3(-1.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0), 0.0, f32::INFINITY);

        let mut leaves = Vec::new();
        gather_leaves(&nodes, 0, r, &mut leaves);
        assert_eq!(leaves, vec![1]);

        let r = Ray::new(point3(1.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0), 0.0, f32::INFINITY);
        leaves.clear();
        gather_leaves(&nodes, 0, r, &mut leaves);
        assert_eq!(leaves, vec![2]);
    }

    #[test]
    fn gathers_both_leaves_in_left_first_order() {
        let nodes = two_leaf_tree();
        let r = Ray::new(point3(-5.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), 0.0, f32::INFINITY);

        let mut leaves = Vec::new();
        gather_leaves(&nodes, 0, r, &mut leaves);
        assert_eq!(leaves, vec![1, 2]);
    }

    #[test]
    fn prunes_at_root() {
        let nodes = two_leaf_tree();
        let r = Ray::new(point3(0.0, 5.0, -5.0), vec3(0.0, 0.0, 1.0), 0.0, f32::INFINITY);

        let mut leaves = Vec::new();
        gather_leaves(&nodes, 0, r, &mut leaves);
        assert!(leaves.is_empty());
    }

    #[test]
    fn empty_tree_yields_no_candidates() {
        let r = Ray::default();
        let mut leaves = Vec::new();
        gather_leaves(&[], 0, r, &mut leaves);
        assert!(leaves.is_empty());
    }

    #[test]
    fn single_leaf_root() {
        let bounds = Bounds3::new(point3(-1.0, -1.0, -1.0), point3(1.0, 1.0, 1.0));
        let nodes = vec![BvhNode::leaf(bounds, 0, 3)];
        let r = Ray::new(point3(0.0, 0.0, -5.0), vec3(0.0, 0.0, 1.0), 0.0, f32::INFINITY);

        let mut leaves = Vec::new();
        gather_leaves(&nodes, 0, r, &mut leaves);
        assert_eq!(leaves, vec![0]);
    }
}
