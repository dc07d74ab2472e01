//! Direction tags and direction-normalized cost vectors.

/// Optimization direction for a single objective dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher raw values are better.
    Maximize,
    /// Lower raw values are better.
    Minimize,
}

impl Direction {
    /// Converts a raw score into a cost (lower is better).
    ///
    /// Maximized dimensions are negated; minimized dimensions pass through.
    #[inline]
    pub fn to_cost(self, value: f64) -> f64 {
        match self {
            Direction::Maximize => -value,
            Direction::Minimize => value,
        }
    }
}

/// A direction-normalized objective vector where every dimension is
/// "lower is better".
///
/// `CostVector` is the engine's internal currency: callers supply raw
/// scores tagged with a [`Direction`] per dimension, and all dominance
/// logic downstream works on uniform minimization.
///
/// Two cost vectors with identical values are mutually non-dominating
/// (ties never dominate).
///
/// # Example
///
/// ```
/// use frontier_rank::{CostVector, Direction};
///
/// // Rating 8.1 (maximize), complexity 2.5 (minimize)
/// let cv = CostVector::from_scores(&[8.1, 2.5], &[Direction::Maximize, Direction::Minimize]);
/// assert_eq!(cv.values(), &[-8.1, 2.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostVector(Vec<f64>);

impl CostVector {
    /// Builds a cost vector from raw scores and per-dimension directions.
    ///
    /// Non-finite scores (NaN, ±∞) are not valid inputs; the pipeline
    /// excludes such records before construction.
    ///
    /// # Panics
    ///
    /// Panics if `scores` and `directions` have different lengths.
    pub fn from_scores(scores: &[f64], directions: &[Direction]) -> Self {
        assert_eq!(
            scores.len(),
            directions.len(),
            "one direction tag per score dimension"
        );
        debug_assert!(
            scores.iter().all(|s| s.is_finite()),
            "non-finite scores must be filtered before cost-vector construction"
        );
        CostVector(
            scores
                .iter()
                .zip(directions)
                .map(|(&s, &d)| d.to_cost(s))
                .collect(),
        )
    }

    /// Wraps already-minimized cost values.
    pub fn from_costs(costs: Vec<f64>) -> Self {
        CostVector(costs)
    }

    /// The normalized cost values (lower is better in every dimension).
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Number of objective dimensions.
    pub fn dim(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximize_negates() {
        let cv = CostVector::from_scores(&[10.0, 1.0], &[Direction::Maximize, Direction::Minimize]);
        assert_eq!(cv.values(), &[-10.0, 1.0]);
    }

    #[test]
    fn test_minimize_passes_through() {
        let cv = CostVector::from_scores(&[3.0, 7.0], &[Direction::Minimize, Direction::Minimize]);
        assert_eq!(cv.values(), &[3.0, 7.0]);
    }

    #[test]
    fn test_dim() {
        let cv = CostVector::from_costs(vec![1.0, 2.0, 3.0]);
        assert_eq!(cv.dim(), 3);
    }

    #[test]
    fn test_equal_vectors_compare_equal() {
        let a = CostVector::from_scores(&[5.0, 5.0], &[Direction::Maximize, Direction::Minimize]);
        let b = CostVector::from_costs(vec![-5.0, 5.0]);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "one direction tag per score dimension")]
    fn test_mismatched_directions_panic() {
        CostVector::from_scores(&[1.0, 2.0], &[Direction::Minimize]);
    }
}
