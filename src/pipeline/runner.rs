//! Ranking run execution.
//!
//! [`RankingPipeline`] orchestrates the full pass: exclude invalid
//! records → build cost vectors → dominance or layered ranking →
//! optional frontier-proximity search → annotation maps.

use std::hash::Hash;

use super::config::{RankingConfig, RankingMode};
use super::types::{RankAnnotations, RankingOutcome, ScoredItem};
use crate::dominance::{non_dominated, CostVector, Direction};
use crate::error::{RankError, Result};
use crate::layering::LayeredRanker;
use crate::proximity::{closest_to_frontier, min_max_normalize};

/// Direction tags for the fixed (maximize, minimize) input shape.
const DIRECTIONS: [Direction; 2] = [Direction::Maximize, Direction::Minimize];

/// Executes ranking runs.
///
/// Each run is a pure batch computation over the given snapshot: no
/// state survives between calls, so concurrent runs over independent
/// snapshots need no synchronization, and re-running on unchanged input
/// reproduces the outcome exactly.
///
/// # Usage
///
/// ```
/// use frontier_rank::{RankingConfig, RankingPipeline, ScoredItem};
///
/// let items = vec![
///     ScoredItem::new("a", 8.4, 2.1),
///     ScoredItem::new("b", 7.9, 3.5),
/// ];
/// let outcome = RankingPipeline::run(&items, &RankingConfig::default()).unwrap();
/// assert!(outcome.annotations.as_binary().unwrap()["a"]);
/// ```
pub struct RankingPipeline;

impl RankingPipeline {
    /// Runs one ranking pass over `items`.
    ///
    /// Records with a non-finite score are excluded from ranking and
    /// reported in [`RankingOutcome::excluded`]; the remaining valid
    /// subset is fully annotated. Either the whole valid subset is
    /// annotated or the call fails — never a partial result.
    ///
    /// # Errors
    ///
    /// - [`RankError::InvalidConfig`] if `config` fails validation.
    /// - [`RankError::DimensionMismatch`] on an internal dimensionality
    ///   violation (programming error).
    pub fn run<K>(items: &[ScoredItem<K>], config: &RankingConfig) -> Result<RankingOutcome<K>>
    where
        K: Clone + Eq + Hash,
    {
        config
            .validate()
            .map_err(|message| RankError::InvalidConfig { message })?;

        // Partition into the valid subset (by arena index) and the
        // excluded identifiers, preserving input order.
        let mut valid: Vec<usize> = Vec::with_capacity(items.len());
        let mut excluded: Vec<K> = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if item.has_valid_scores() {
                valid.push(index);
            } else {
                excluded.push(item.id.clone());
            }
        }
        if !excluded.is_empty() {
            tracing::debug!(
                excluded = excluded.len(),
                "excluded records with missing or non-finite scores"
            );
        }

        let costs: Vec<CostVector> = valid
            .iter()
            .map(|&index| {
                CostVector::from_scores(
                    &[items[index].maximize, items[index].minimize],
                    &DIRECTIONS,
                )
            })
            .collect();

        // `frontier_mask` is parallel to `valid`: true = on the frontier.
        let (annotations, frontier_mask) = match config.mode {
            RankingMode::Binary => {
                let mask = non_dominated(&costs)?;
                let map = valid
                    .iter()
                    .zip(&mask)
                    .map(|(&index, &flag)| (items[index].id.clone(), flag))
                    .collect();
                (RankAnnotations::Binary(map), mask)
            }
            RankingMode::Layered => {
                let assignment = LayeredRanker::rank(&costs, config.max_layers)?;
                let mask = assignment.ranks.iter().map(|&rank| rank == 1).collect();
                let map = valid
                    .iter()
                    .zip(&assignment.ranks)
                    .map(|(&index, &rank)| (items[index].id.clone(), rank))
                    .collect();
                (RankAnnotations::Layered(map), mask)
            }
        };

        let proximity = Self::proximity_set(items, &valid, &frontier_mask, config.proximity_count);

        tracing::debug!(
            total = items.len(),
            ranked = valid.len(),
            frontier = frontier_mask.iter().filter(|&&f| f).count(),
            proximity = proximity.len(),
            "ranking complete"
        );

        Ok(RankingOutcome {
            annotations,
            proximity,
            excluded,
        })
    }

    /// Builds the ordered proximity set: dominated identifiers ascending
    /// by nearest-frontier distance over min-max normalized raw scores.
    ///
    /// Normalization spans the combined valid set so both axes weigh
    /// comparably, and is derived fresh for this call only.
    fn proximity_set<K>(
        items: &[ScoredItem<K>],
        valid: &[usize],
        frontier_mask: &[bool],
        count: usize,
    ) -> Vec<K>
    where
        K: Clone,
    {
        if count == 0 {
            return Vec::new();
        }

        let coords: Vec<[f64; 2]> = valid
            .iter()
            .map(|&index| [items[index].maximize, items[index].minimize])
            .collect();
        let normalized = min_max_normalize(&coords);

        let mut frontier = Vec::new();
        let mut dominated = Vec::new();
        let mut dominated_items = Vec::new();
        for ((&index, &on_frontier), &point) in
            valid.iter().zip(frontier_mask).zip(&normalized)
        {
            if on_frontier {
                frontier.push(point);
            } else {
                dominated.push(point);
                dominated_items.push(index);
            }
        }

        closest_to_frontier(&frontier, &dominated, count)
            .into_iter()
            .map(|position| items[dominated_items[position]].id.clone())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A=(10,1), B=(8,1), C=(10,2), D=(5,5): A dominates everything.
    fn scenario_items() -> Vec<ScoredItem<&'static str>> {
        vec![
            ScoredItem::new("A", 10.0, 1.0),
            ScoredItem::new("B", 8.0, 1.0),
            ScoredItem::new("C", 10.0, 2.0),
            ScoredItem::new("D", 5.0, 5.0),
        ]
    }

    // ---- Binary mode ----

    #[test]
    fn test_binary_annotations() {
        let outcome =
            RankingPipeline::run(&scenario_items(), &RankingConfig::default()).unwrap();

        let map = outcome.annotations.as_binary().unwrap();
        assert!(map["A"]);
        assert!(!map["B"]);
        assert!(!map["C"]);
        assert!(!map["D"]);
        assert!(outcome.excluded.is_empty());
    }

    #[test]
    fn test_binary_proximity_ordering() {
        // Normalized over maximize [5,10] and minimize [1,5]:
        // A=(1,0), B=(0.6,0), C=(1,0.25), D=(0,1). Distances to A:
        // C=0.25, B=0.4, D=√2 — so the nearest two are C then B.
        let config = RankingConfig::default().with_proximity_count(2);
        let outcome = RankingPipeline::run(&scenario_items(), &config).unwrap();
        assert_eq!(outcome.proximity, vec!["C", "B"]);
    }

    #[test]
    fn test_zero_proximity_count() {
        let config = RankingConfig::default().with_proximity_count(0);
        let outcome = RankingPipeline::run(&scenario_items(), &config).unwrap();
        assert!(outcome.proximity.is_empty());
    }

    #[test]
    fn test_proximity_shorter_than_count() {
        let outcome =
            RankingPipeline::run(&scenario_items(), &RankingConfig::default()).unwrap();
        // Only three dominated items exist; count defaults to 100.
        assert_eq!(outcome.proximity.len(), 3);
    }

    // ---- Layered mode ----

    #[test]
    fn test_layered_annotations() {
        let config = RankingConfig::default().with_mode(RankingMode::Layered);
        let outcome = RankingPipeline::run(&scenario_items(), &config).unwrap();

        let map = outcome.annotations.as_layered().unwrap();
        assert_eq!(map["A"], 1);
        assert_eq!(map["B"], 2);
        assert_eq!(map["C"], 2);
        assert_eq!(map["D"], 3);
    }

    #[test]
    fn test_layered_sentinel_rank() {
        let config = RankingConfig::default()
            .with_mode(RankingMode::Layered)
            .with_max_layers(1);
        let outcome = RankingPipeline::run(&scenario_items(), &config).unwrap();

        let map = outcome.annotations.as_layered().unwrap();
        assert_eq!(map["A"], 1);
        // Everything unreached shares max_layers + 1.
        assert_eq!(map["B"], 2);
        assert_eq!(map["C"], 2);
        assert_eq!(map["D"], 2);
    }

    #[test]
    fn test_layered_proximity_uses_rank_one_frontier() {
        let config = RankingConfig::default()
            .with_mode(RankingMode::Layered)
            .with_proximity_count(2);
        let outcome = RankingPipeline::run(&scenario_items(), &config).unwrap();
        assert_eq!(outcome.proximity, vec!["C", "B"]);
    }

    // ---- Exclusion ----

    #[test]
    fn test_invalid_scores_are_excluded_and_reported() {
        let items = vec![
            ScoredItem::new("ok", 5.0, 1.0),
            ScoredItem::new("nan", f64::NAN, 1.0),
            ScoredItem::new("inf", 5.0, f64::INFINITY),
            ScoredItem::new("ok2", 6.0, 2.0),
        ];
        let outcome = RankingPipeline::run(&items, &RankingConfig::default()).unwrap();

        assert_eq!(outcome.excluded, vec!["nan", "inf"]);
        let map = outcome.annotations.as_binary().unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("ok"));
        assert!(map.contains_key("ok2"));
    }

    #[test]
    fn test_all_invalid_yields_empty_annotations() {
        let items = vec![
            ScoredItem::new("a", f64::NAN, 1.0),
            ScoredItem::new("b", 1.0, f64::NAN),
        ];
        let outcome = RankingPipeline::run(&items, &RankingConfig::default()).unwrap();
        assert!(outcome.annotations.is_empty());
        assert!(outcome.proximity.is_empty());
        assert_eq!(outcome.excluded, vec!["a", "b"]);
    }

    // ---- Edge cases ----

    #[test]
    fn test_empty_input() {
        let items: Vec<ScoredItem<&str>> = Vec::new();
        let outcome = RankingPipeline::run(&items, &RankingConfig::default()).unwrap();
        assert!(outcome.annotations.is_empty());
        assert!(outcome.proximity.is_empty());
        assert!(outcome.excluded.is_empty());
    }

    #[test]
    fn test_degenerate_frontier_all_identical() {
        // Identical scores: every item is non-dominated, no proximity
        // candidates remain.
        let items = vec![
            ScoredItem::new("a", 5.0, 5.0),
            ScoredItem::new("b", 5.0, 5.0),
            ScoredItem::new("c", 5.0, 5.0),
        ];
        let outcome = RankingPipeline::run(&items, &RankingConfig::default()).unwrap();

        let map = outcome.annotations.as_binary().unwrap();
        assert!(map.values().all(|&flag| flag));
        assert!(outcome.proximity.is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RankingConfig::default()
            .with_mode(RankingMode::Layered)
            .with_max_layers(0);
        let err = RankingPipeline::run(&scenario_items(), &config).unwrap_err();
        assert!(matches!(err, RankError::InvalidConfig { .. }));
    }

    #[test]
    fn test_idempotent_across_runs() {
        let items = scenario_items();
        let config = RankingConfig::default()
            .with_mode(RankingMode::Layered)
            .with_proximity_count(3);

        let first = RankingPipeline::run(&items, &config).unwrap();
        let second = RankingPipeline::run(&items, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_caller_data_is_untouched() {
        let items = scenario_items();
        let snapshot = items.clone();
        RankingPipeline::run(&items, &RankingConfig::default()).unwrap();
        assert_eq!(items, snapshot);
    }

    #[test]
    fn test_owned_string_identifiers() {
        let items = vec![
            ScoredItem::new("first".to_string(), 2.0, 1.0),
            ScoredItem::new("second".to_string(), 1.0, 2.0),
        ];
        let outcome = RankingPipeline::run(&items, &RankingConfig::default()).unwrap();
        let map = outcome.annotations.as_binary().unwrap();
        assert!(map["first"]);
        assert!(map["second"]);
    }
}
