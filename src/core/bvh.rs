// Copyright @yucwang 2026

use crate::math::aabb::AABB;
use crate::math::constants::{Float, Vector3f};

const SAH_BUCKETS: usize = 12;

#[derive(Clone)]
struct BVHNode {
    bounds: AABB,
    left: Option<usize>,
    right: Option<usize>,
    start: usize,
    count: usize,
}

impl BVHNode {
    fn leaf(bounds: AABB, start: usize, count: usize) -> Self {
        Self { bounds, left: None, right: None, start, count }
    }

    fn interior(bounds: AABB, left: usize, right: usize) -> Self {
        Self { bounds, left: Some(left), right: Some(right), start: 0, count: 0 }
    }

    fn is_leaf(&self) -> bool {
        self.count > 0
    }
}

/// Acceleration structure built over per-primitive bounds with a bucketed
/// SAH split. Nodes index into a reordered primitive index list, so the
/// caller keeps ownership of the primitives themselves.
pub struct BVH {
    nodes: Vec<BVHNode>,
    indices: Vec<usize>,
    prim_bounds: Vec<AABB>,
    prim_centroids: Vec<Vector3f>,
    max_leaf_size: usize,
}

impl BVH {
    pub fn new(prim_bounds: Vec<AABB>, prim_centroids: Vec<Vector3f>) -> Self {
        Self::with_max_leaf_size(prim_bounds, prim_centroids, 4)
    }

    pub fn with_max_leaf_size(
        prim_bounds: Vec<AABB>,
        prim_centroids: Vec<Vector3f>,
        max_leaf_size: usize,
    ) -> Self {
        let mut bvh = Self {
            indices: (0..prim_bounds.len()).collect(),
            nodes: Vec::new(),
            prim_bounds,
            prim_centroids,
            max_leaf_size: max_leaf_size.max(1),
        };

        if !bvh.indices.is_empty() {
            let (bounds, centroid_bounds) = bvh.compute_bounds(0, bvh.indices.len());
            bvh.build(0, bvh.indices.len(), bounds, centroid_bounds);
        }

        bvh
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn primitive_count(&self) -> usize {
        self.prim_bounds.len()
    }

    pub fn bounds(&self) -> AABB {
        if self.nodes.is_empty() {
            AABB::default()
        } else {
            self.nodes[0].bounds
        }
    }

    fn build(&mut self, start: usize, end: usize, bounds: AABB, centroid_bounds: AABB) -> usize {
        let count = end - start;
        if count <= self.max_leaf_size {
            // Small enough: create a leaf.
            let node_idx = self.nodes.len();
            self.nodes.push(BVHNode::leaf(bounds, start, count));
            return node_idx;
        }

        let axis = centroid_bounds.max_extent() as usize;
        let axis_min = centroid_bounds.p_min[axis];
        let axis_max = centroid_bounds.p_max[axis];
        if (axis_max - axis_min).abs() < 1e-6 {
            // Degenerate centroid bounds: fall back to leaf.
            let node_idx = self.nodes.len();
            self.nodes.push(BVHNode::leaf(bounds, start, count));
            return node_idx;
        }

        // SAH with fixed buckets along the split axis.
        let mut buckets = vec![(0usize, AABB::default()); SAH_BUCKETS];
        for i in start..end {
            let idx = self.indices[i];
            let c = self.prim_centroids[idx][axis];
            let mut b = ((c - axis_min) / (axis_max - axis_min) * SAH_BUCKETS as Float) as usize;
            if b >= SAH_BUCKETS {
                b = SAH_BUCKETS - 1;
            }
            buckets[b].0 += 1;
            let mut bnd = buckets[b].1;
            bnd.expand_by_aabb(&self.prim_bounds[idx]);
            buckets[b].1 = bnd;
        }

        let mut cost = [0.0f32; SAH_BUCKETS - 1];
        for i in 0..(SAH_BUCKETS - 1) {
            let mut b0 = AABB::default();
            let mut b1 = AABB::default();
            let mut count0 = 0usize;
            let mut count1 = 0usize;
            for b in 0..=i {
                count0 += buckets[b].0;
                b0.expand_by_aabb(&buckets[b].1);
            }
            for b in (i + 1)..SAH_BUCKETS {
                count1 += buckets[b].0;
                b1.expand_by_aabb(&buckets[b].1);
            }
            let area = bounds.surface_area().max(1e-6);
            let cost0 = if count0 > 0 {
                (count0 as Float) * b0.surface_area()
            } else {
                0.0
            };
            let cost1 = if count1 > 0 {
                (count1 as Float) * b1.surface_area()
            } else {
                0.0
            };
            cost[i] = 1.0 + (cost0 + cost1) / area;
        }

        let mut min_cost = cost[0];
        let mut min_split = 0usize;
        for i in 1..cost.len() {
            if cost[i] < min_cost {
                min_cost = cost[i];
                min_split = i;
            }
        }

        // If SAH says leaf is cheaper, stop splitting.
        let leaf_cost = count as Float;
        if min_cost >= leaf_cost {
            let node_idx = self.nodes.len();
            self.nodes.push(BVHNode::leaf(bounds, start, count));
            return node_idx;
        }

        // Partition indices in-place by bucket.
        let mut mid = start;
        let mut i = start;
        while i < end {
            let idx = self.indices[i];
            let c = self.prim_centroids[idx][axis];
            let mut b = ((c - axis_min) / (axis_max - axis_min) * SAH_BUCKETS as Float) as usize;
            if b >= SAH_BUCKETS {
                b = SAH_BUCKETS - 1;
            }
            if b <= min_split {
                self.indices.swap(i, mid);
                mid += 1;
            }
            i += 1;
        }

        if mid == start || mid == end {
            // Partition failed: create a leaf.
            let node_idx = self.nodes.len();
            self.nodes.push(BVHNode::leaf(bounds, start, count));
            return node_idx;
        }

        // Build child nodes and stitch them into an interior node.
        let (left_bounds, left_centroids) = self.compute_bounds(start, mid);
        let (right_bounds, right_centroids) = self.compute_bounds(mid, end);
        let node_idx = self.nodes.len();
        self.nodes.push(BVHNode::leaf(bounds, 0, 0));
        let left = self.build(start, mid, left_bounds, left_centroids);
        let right = self.build(mid, end, right_bounds, right_centroids);
        self.nodes[node_idx] = BVHNode::interior(bounds, left, right);
        node_idx
    }

    fn compute_bounds(&self, start: usize, end: usize) -> (AABB, AABB) {
        let mut bounds = AABB::default();
        let mut centroid_bounds = AABB::default();
        for i in start..end {
            let idx = self.indices[i];
            bounds.expand_by_aabb(&self.prim_bounds[idx]);
            centroid_bounds.expand_by_point(&self.prim_centroids[idx]);
        }
        (bounds, centroid_bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::BVH;
    use crate::math::aabb::AABB;
    use crate::math::constants::{Float, Vector3f};

    fn build_boxes(count: usize) -> (Vec<AABB>, Vec<Vector3f>) {
        let mut prim_bounds = Vec::with_capacity(count);
        let mut prim_centroids = Vec::with_capacity(count);
        for i in 0..count {
            let x = i as Float * 3.0;
            let bounds = AABB::new(Vector3f::new(x, 0.0, 0.0),
                                   Vector3f::new(x + 1.0, 1.0, 1.0));
            prim_centroids.push(bounds.center());
            prim_bounds.push(bounds);
        }
        (prim_bounds, prim_centroids)
    }

    #[test]
    fn test_every_primitive_lands_in_one_leaf() {
        let (prim_bounds, prim_centroids) = build_boxes(16);
        let bvh = BVH::new(prim_bounds, prim_centroids);

        // 16 well-spread primitives with leaf size 4 must split at least once.
        assert!(!bvh.nodes[0].is_leaf());
        assert_eq!(bvh.primitive_count(), 16);

        let mut seen = vec![0usize; 16];
        for node in &bvh.nodes {
            if node.is_leaf() {
                assert!(node.count <= bvh.max_leaf_size);
                for i in 0..node.count {
                    seen[bvh.indices[node.start + i]] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_node_bounds_contain_their_primitives() {
        let (prim_bounds, prim_centroids) = build_boxes(16);
        let bvh = BVH::new(prim_bounds.clone(), prim_centroids);

        let root = bvh.bounds();
        for bounds in &prim_bounds {
            assert!(root.contains_aabb(bounds));
        }

        for node in &bvh.nodes {
            if node.is_leaf() {
                for i in 0..node.count {
                    let idx = bvh.indices[node.start + i];
                    assert!(node.bounds.contains_aabb(&prim_bounds[idx]));
                }
            } else {
                let left = node.left.expect("interior node missing left child");
                let right = node.right.expect("interior node missing right child");
                assert!(node.bounds.contains_aabb(&bvh.nodes[left].bounds));
                assert!(node.bounds.contains_aabb(&bvh.nodes[right].bounds));
            }
        }
    }

    #[test]
    fn test_identical_centroids_fall_back_to_leaf() {
        let bounds = AABB::new(Vector3f::new(0.0, 0.0, 0.0),
                               Vector3f::new(1.0, 1.0, 1.0));
        let prim_bounds = vec![bounds; 8];
        let prim_centroids = vec![bounds.center(); 8];
        let bvh = BVH::new(prim_bounds, prim_centroids);

        assert_eq!(bvh.node_count(), 1);
        assert!(bvh.nodes[0].is_leaf());
        assert_eq!(bvh.nodes[0].count, 8);
    }

    #[test]
    fn test_empty_bvh() {
        let bvh = BVH::new(Vec::new(), Vec::new());
        assert_eq!(bvh.node_count(), 0);
        assert_eq!(bvh.primitive_count(), 0);
        assert!(!bvh.bounds().is_valid());
    }
}
