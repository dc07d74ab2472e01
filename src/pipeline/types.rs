//! Pipeline input and output types.

use std::collections::HashMap;
use std::hash::Hash;

/// One input record: an opaque identifier plus the two objective scores.
///
/// The first score is maximized, the second minimized (e.g. a quality
/// rating vs. a complexity measure). The engine never mutates records; it
/// only derives annotations keyed by `id`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredItem<K> {
    /// Caller-owned identifier the annotations are keyed by.
    pub id: K,

    /// Score where higher is better.
    pub maximize: f64,

    /// Score where lower is better.
    pub minimize: f64,
}

impl<K> ScoredItem<K> {
    /// Convenience constructor.
    pub fn new(id: K, maximize: f64, minimize: f64) -> Self {
        Self {
            id,
            maximize,
            minimize,
        }
    }

    /// Whether both scores are finite (NaN and ±∞ are invalid).
    pub fn has_valid_scores(&self) -> bool {
        self.maximize.is_finite() && self.minimize.is_finite()
    }
}

/// Per-item annotations, shaped by the configured mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankAnnotations<K: Eq + Hash> {
    /// `true` = non-dominated (Pareto-optimal).
    Binary(HashMap<K, bool>),

    /// Dominance layer, 1 = frontier; `max_layers + 1` = sentinel.
    Layered(HashMap<K, usize>),
}

impl<K: Eq + Hash> RankAnnotations<K> {
    /// The binary map, if this run was binary-mode.
    pub fn as_binary(&self) -> Option<&HashMap<K, bool>> {
        match self {
            RankAnnotations::Binary(map) => Some(map),
            RankAnnotations::Layered(_) => None,
        }
    }

    /// The layered map, if this run was layered-mode.
    pub fn as_layered(&self) -> Option<&HashMap<K, usize>> {
        match self {
            RankAnnotations::Binary(_) => None,
            RankAnnotations::Layered(map) => Some(map),
        }
    }

    /// Number of annotated items.
    pub fn len(&self) -> usize {
        match self {
            RankAnnotations::Binary(map) => map.len(),
            RankAnnotations::Layered(map) => map.len(),
        }
    }

    /// Whether no item received an annotation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of one ranking run.
///
/// Records with invalid scores are absent from `annotations` and listed
/// in `excluded` instead; everything else is annotated. Duplicate
/// identifiers collapse in the maps (later records win), so callers that
/// care should deduplicate upstream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingOutcome<K: Eq + Hash> {
    /// Dominance or layer annotations, keyed by item identifier.
    pub annotations: RankAnnotations<K>,

    /// Up to `proximity_count` dominated identifiers, ascending by
    /// distance to the frontier. Near-optimal is a separate tier: these
    /// items are NOT part of the non-dominated set.
    pub proximity: Vec<K>,

    /// Identifiers of records excluded for invalid scores, in input order.
    pub excluded: Vec<K>,
}
