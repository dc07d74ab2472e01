//! Pareto dominance detection.
//!
//! Provides direction-normalized cost vectors and the non-dominated set
//! computation used by both the single-pass (binary) and layered ranking
//! modes.
//!
//! # Algorithms
//!
//! - [`non_dominated`]: iterative filtering over a live index list.
//!   Dominated points are pruned early, so typical cost is well below the
//!   O(n²) worst case.
//! - [`dominance_cmp`]: pairwise Pareto dominance comparison.
//!
//! # Conventions
//!
//! All cost vectors are **minimized**: lower values are better. Objectives
//! to maximize are negated once, at [`CostVector`] construction, so the
//! comparison logic never special-cases direction.

mod cost;
mod evaluator;

pub use cost::{CostVector, Direction};
pub use evaluator::{dominance_cmp, non_dominated, non_dominated_among, Dominance};
