//! Multi-objective dominance ranking over two-objective datasets.
//!
//! Given a snapshot of items, each carrying one score to maximize and one
//! to minimize, this crate computes:
//!
//! - **Dominance detection**: which items are non-dominated
//!   (Pareto-optimal), via iterative filtering.
//! - **Layered ranking**: non-dominated sorting into successive fronts
//!   ("rank 1" = optimal, "rank 2" = optimal after removing rank 1, ...)
//!   up to a configured depth, with a sentinel rank for the remainder.
//! - **Frontier proximity**: for dominated items, the Euclidean distance
//!   from their min-max-normalized coordinates to the nearest
//!   non-dominated item, used to select the K items closest to optimal.
//!
//! # Modules
//!
//! - [`dominance`]: cost-vector construction and the non-dominated set
//! - [`layering`]: iterative front peeling into ordered layers
//! - [`proximity`]: normalization, 2-d k-d tree, nearest-frontier search
//! - [`pipeline`]: orchestration, configuration, and per-item annotations
//!
//! # Architecture
//!
//! The engine is a pure batch computation: it owns no state between calls,
//! performs no I/O, and never mutates caller data. Every invocation
//! re-derives its result from the input snapshot, so independent rankings
//! may run concurrently without synchronization. Data ingestion, file
//! formats, and presentation are consumer concerns at higher layers.

pub mod dominance;
pub mod layering;
pub mod pipeline;
pub mod proximity;

mod error;

pub use dominance::{non_dominated, CostVector, Direction};
pub use error::{RankError, Result};
pub use layering::{LayerAssignment, LayeredRanker};
pub use pipeline::{
    RankAnnotations, RankingConfig, RankingMode, RankingOutcome, RankingPipeline, ScoredItem,
};
