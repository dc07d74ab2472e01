//! Selection of the dominated points closest to the frontier.

use std::cmp::Ordering;

use super::kdtree::KdTree2;

/// Returns the indices of the `k` dominated points nearest to the
/// frontier, ascending by distance.
///
/// Both point sets must already be normalized together (see
/// [`min_max_normalize`](super::min_max_normalize)). Returned indices
/// point into `dominated`; ties in distance keep original input order
/// (stable sort), so results are reproducible across runs. The result is
/// shorter than `k` when the dominated set is, and empty when the
/// frontier is empty — distance to a nonexistent frontier is undefined,
/// not an error.
///
/// # Example
///
/// ```
/// use frontier_rank::proximity::closest_to_frontier;
///
/// let frontier = [[0.0, 0.0]];
/// let dominated = [[3.0, 4.0], [1.0, 0.0], [0.0, 2.0]];
/// assert_eq!(closest_to_frontier(&frontier, &dominated, 2), vec![1, 2]);
/// ```
pub fn closest_to_frontier(
    frontier: &[[f64; 2]],
    dominated: &[[f64; 2]],
    k: usize,
) -> Vec<usize> {
    if k == 0 || dominated.is_empty() {
        return Vec::new();
    }
    let Some(tree) = KdTree2::build(frontier) else {
        return Vec::new();
    };

    let mut by_distance: Vec<(usize, f64)> = dominated
        .iter()
        .enumerate()
        .map(|(index, &point)| (index, tree.nearest_distance(point)))
        .collect();

    by_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    by_distance.truncate(k);
    by_distance.into_iter().map(|(index, _)| index).collect()
}

// ============================================================================
// Tests
// ============================================================================
