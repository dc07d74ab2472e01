//! Iterative front peeling over a fixed cost-vector arena.

use crate::dominance::{non_dominated_among, CostVector};
use crate::error::Result;

/// Result of layered ranking.
///
/// `ranks` is parallel to the input: rank 1 is the Pareto frontier, rank
/// `k` is the frontier after removing ranks 1..k, and items never reached
/// within `max_layers` peels carry the sentinel rank `max_layers + 1`.
///
/// `layers` groups indices by rank (`layers[0]` holds rank-1 indices,
/// etc.). The sentinel group is deliberately absent: it is not a
/// dominance layer — items inside it may well dominate each other, and no
/// ordering among them is implied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerAssignment {
    /// Rank per input index, in `[1, sentinel_rank]`.
    pub ranks: Vec<usize>,

    /// Indices grouped by dominance layer: `layers[0]` = rank 1, etc.
    pub layers: Vec<Vec<usize>>,

    /// The rank given to items the peeling never reached (`max_layers + 1`).
    pub sentinel_rank: usize,
}

impl LayerAssignment {
    /// Indices of the Pareto frontier (rank 1). Empty for empty input.
    pub fn frontier(&self) -> &[usize] {
        self.layers.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Peels non-dominated fronts off a cost-vector arena.
///
/// # Usage
///
/// ```
/// use frontier_rank::{CostVector, LayeredRanker};
///
/// let costs = vec![
///     CostVector::from_costs(vec![1.0, 1.0]),
///     CostVector::from_costs(vec![2.0, 2.0]),
///     CostVector::from_costs(vec![3.0, 3.0]),
/// ];
///
/// let assignment = LayeredRanker::rank(&costs, 2).unwrap();
/// assert_eq!(assignment.ranks, vec![1, 2, 3]); // 3 = sentinel
/// ```
pub struct LayeredRanker;

impl LayeredRanker {
    /// Ranks every cost vector into a layer in `[1, max_layers]`, or the
    /// sentinel `max_layers + 1` when the depth is exhausted first.
    ///
    /// At iteration `k` the non-dominated set of the still-unranked items
    /// receives rank `k` and leaves the working set; the loop stops early
    /// once the working set empties. All vectors stay in one arena and
    /// only a live index list shrinks between layers.
    ///
    /// Invalid (non-finite) scores are the pipeline's concern; this
    /// ranker expects every vector it sees to be valid.
    ///
    /// # Errors
    ///
    /// [`RankError::DimensionMismatch`](crate::RankError::DimensionMismatch)
    /// if the vectors do not share one dimensionality.
    pub fn rank(costs: &[CostVector], max_layers: usize) -> Result<LayerAssignment> {
        let sentinel_rank = max_layers + 1;
        let mut ranks = vec![sentinel_rank; costs.len()];
        let mut layers: Vec<Vec<usize>> = Vec::new();

        let mut live: Vec<usize> = (0..costs.len()).collect();

        for layer in 1..=max_layers {
            if live.is_empty() {
                break;
            }

            let mask = non_dominated_among(costs, &live)?;

            let mut front = Vec::new();
            let mut remaining = Vec::with_capacity(live.len());
            for (&index, &in_front) in live.iter().zip(&mask) {
                if in_front {
                    ranks[index] = layer;
                    front.push(index);
                } else {
                    remaining.push(index);
                }
            }

            layers.push(front);
            live = remaining;
        }

        Ok(LayerAssignment {
            ranks,
            layers,
            sentinel_rank,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
