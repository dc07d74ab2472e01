//! Non-dominated set computation via iterative filtering.

use super::cost::CostVector;
use crate::error::{RankError, Result};

/// Pairwise dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (incomparable or identical).
    Neither,
}

/// Compares two cost vectors for Pareto dominance.
///
/// A vector dominates another when it is less-than-or-equal in every
/// dimension and strictly less in at least one. Identical vectors are
/// mutually non-dominating ([`Dominance::Neither`]).
///
/// # Example
///
/// ```
/// use frontier_rank::dominance::{dominance_cmp, CostVector, Dominance};
///
/// let a = CostVector::from_costs(vec![1.0, 2.0]);
/// let b = CostVector::from_costs(vec![2.0, 2.0]);
/// assert_eq!(dominance_cmp(&a, &b), Dominance::Left);
/// assert_eq!(dominance_cmp(&a, &a), Dominance::Neither);
/// ```
pub fn dominance_cmp(a: &CostVector, b: &CostVector) -> Dominance {
    debug_assert_eq!(a.dim(), b.dim(), "dominance requires equal dimensionality");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.values().iter().zip(b.values()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Computes the non-dominated mask for a batch of cost vectors.
///
/// Returns a `Vec<bool>` of the same length and order as the input, with
/// `true` marking entries that no other entry dominates. Empty input
/// yields an empty result.
///
/// # Algorithm
///
/// Iterative filtering over a live index list rather than full pairwise
/// comparison: repeatedly take the next unresolved point as reference and
/// shrink the live list to the points the reference does not dominate
/// (the reference itself always survives). A point survives when it is
/// strictly better than the reference in at least one dimension, or equal
/// to it in every dimension — equality never eliminates, so exact ties
/// end up mutually non-dominated.
///
/// Every iteration either shrinks the live list or advances the cursor,
/// so the loop terminates after at most n reference steps. Worst case
/// O(n²), typically sub-quadratic because dominated points are pruned
/// before they are ever used as a reference.
///
/// # Errors
///
/// [`RankError::DimensionMismatch`] if the vectors do not all share the
/// dimensionality of the first entry. No partial result is produced.
///
/// # Example
///
/// ```
/// use frontier_rank::{non_dominated, CostVector, Direction};
///
/// let dirs = [Direction::Maximize, Direction::Minimize];
/// let costs = vec![
///     CostVector::from_scores(&[10.0, 1.0], &dirs), // A
///     CostVector::from_scores(&[8.0, 1.0], &dirs),  // B — dominated by A
///     CostVector::from_scores(&[10.0, 2.0], &dirs), // C — dominated by A
///     CostVector::from_scores(&[5.0, 5.0], &dirs),  // D — dominated by A
/// ];
///
/// assert_eq!(non_dominated(&costs).unwrap(), vec![true, false, false, false]);
/// ```
pub fn non_dominated(costs: &[CostVector]) -> Result<Vec<bool>> {
    let all: Vec<usize> = (0..costs.len()).collect();
    non_dominated_among(costs, &all)
}

/// Non-dominated mask restricted to a subset of an arena.
///
/// `indices` selects entries of `costs` to compare among themselves; the
/// returned mask is parallel to `indices`. This is the workhorse behind
/// [`non_dominated`] and the layered ranker, which peels fronts off a
/// fixed arena without materializing per-layer collections.
///
/// # Errors
///
/// [`RankError::DimensionMismatch`] (reporting the arena index) if the
/// selected vectors do not all share the dimensionality of the first.
pub fn non_dominated_among(costs: &[CostVector], indices: &[usize]) -> Result<Vec<bool>> {
    if indices.is_empty() {
        return Ok(Vec::new());
    }

    let expected = costs[indices[0]].dim();
    for &index in indices {
        let found = costs[index].dim();
        if found != expected {
            return Err(RankError::DimensionMismatch {
                index,
                expected,
                found,
            });
        }
    }

    // `live` holds positions into `indices`; `cursor` points at the next
    // unresolved reference within `live`.
    let mut live: Vec<usize> = (0..indices.len()).collect();
    let mut cursor = 0usize;

    while cursor < live.len() {
        let reference = live[cursor];
        let reference_cost = &costs[indices[reference]];
        let mut survivors = Vec::with_capacity(live.len());
        let mut kept_before_reference = 0usize;

        for (pos, &candidate) in live.iter().enumerate() {
            if candidate == reference || survives(&costs[indices[candidate]], reference_cost) {
                if pos < cursor {
                    kept_before_reference += 1;
                }
                survivors.push(candidate);
            }
        }

        // The reference sits at `kept_before_reference` in the survivor
        // list; resume with the entry after it.
        cursor = kept_before_reference + 1;
        live = survivors;
    }

    let mut mask = vec![false; indices.len()];
    for position in live {
        mask[position] = true;
    }
    Ok(mask)
}

/// Whether `candidate` survives filtering against `reference`: strictly
/// better in at least one dimension, or equal in all of them.
fn survives(candidate: &CostVector, reference: &CostVector) -> bool {
    let mut better_in_some = false;
    let mut worse_in_some = false;

    for (&c, &r) in candidate.values().iter().zip(reference.values()) {
        if c < r {
            better_in_some = true;
        } else if r < c {
            worse_in_some = true;
        }
    }

    better_in_some || !worse_in_some
}

// ============================================================================
// Tests
// ============================================================================
