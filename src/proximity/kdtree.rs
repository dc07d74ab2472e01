//! Two-dimensional k-d tree for exact nearest-neighbor distance queries.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct KdNode {
    point: [f64; 2],
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// A static 2-d k-d tree.
///
/// Built once over a point set by recursive median splits on alternating
/// axes; nodes live in one arena `Vec` and reference children by index.
/// Queries return the exact Euclidean distance to the nearest stored
/// point, pruning subtrees that cannot beat the best distance found so
/// far.
///
/// # Usage
///
/// ```
/// use frontier_rank::proximity::KdTree2;
///
/// let tree = KdTree2::build(&[[0.0, 0.0], [1.0, 1.0]]).unwrap();
/// assert!((tree.nearest_distance([0.1, 0.0]) - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct KdTree2 {
    nodes: Vec<KdNode>,
}

impl KdTree2 {
    /// Builds a tree over the given points, or `None` for an empty set.
    ///
    /// O(n log² n) construction (median selection per level), O(n) nodes.
    pub fn build(points: &[[f64; 2]]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut nodes = Vec::with_capacity(points.len());
        let mut work = points.to_vec();
        build_into(&mut nodes, &mut work, 0);
        Some(KdTree2 { nodes })
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: an empty tree is never constructed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Exact Euclidean distance from `query` to the nearest stored point.
    pub fn nearest_distance(&self, query: [f64; 2]) -> f64 {
        let mut best_sq = f64::INFINITY;
        self.search(0, query, &mut best_sq);
        best_sq.sqrt()
    }

    fn search(&self, node: usize, query: [f64; 2], best_sq: &mut f64) {
        let n = &self.nodes[node];

        let d = squared_distance(n.point, query);
        if d < *best_sq {
            *best_sq = d;
        }

        let diff = query[n.axis] - n.point[n.axis];
        let (near, far) = if diff < 0.0 {
            (n.left, n.right)
        } else {
            (n.right, n.left)
        };

        if let Some(child) = near {
            self.search(child, query, best_sq);
        }
        // The far subtree can only matter if the splitting plane is
        // closer than the best match so far.
        if let Some(child) = far {
            if diff * diff < *best_sq {
                self.search(child, query, best_sq);
            }
        }
    }
}

/// Recursively builds the subtree for `points`, returning its root index.
fn build_into(nodes: &mut Vec<KdNode>, points: &mut [[f64; 2]], depth: usize) -> usize {
    let axis = depth % 2;
    let median = points.len() / 2;
    points.select_nth_unstable_by(median, |a, b| {
        a[axis].partial_cmp(&b[axis]).unwrap_or(Ordering::Equal)
    });

    let index = nodes.len();
    nodes.push(KdNode {
        point: points[median],
        axis,
        left: None,
        right: None,
    });

    let (lower, rest) = points.split_at_mut(median);
    let upper = &mut rest[1..];

    if !lower.is_empty() {
        let child = build_into(nodes, lower, depth + 1);
        nodes[index].left = Some(child);
    }
    if !upper.is_empty() {
        let child = build_into(nodes, upper, depth + 1);
        nodes[index].right = Some(child);
    }

    index
}

fn squared_distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

// ============================================================================
// Tests
// ============================================================================
