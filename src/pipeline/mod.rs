//! Ranking orchestration.
//!
//! Ties the engine together for a caller-supplied snapshot: input
//! validation and invalid-score exclusion, cost-vector construction,
//! dominance detection or layered ranking, and the optional
//! frontier-proximity pass.
//!
//! # Key Types
//!
//! - [`RankingConfig`]: mode and thresholds (builder pattern)
//! - [`RankingPipeline`]: executes one ranking run
//! - [`RankingOutcome`]: annotation maps plus the ordered proximity set

mod config;
mod runner;
mod types;

pub use config::{RankingConfig, RankingMode};
pub use runner::RankingPipeline;
pub use types::{RankAnnotations, RankingOutcome, ScoredItem};
