//! Layered (non-dominated sorting) ranking.
//!
//! Repeatedly removes the current non-dominated front to partition a
//! dataset into ordered layers: rank 1 is the Pareto frontier, rank 2 is
//! the frontier of what remains, and so on up to a configured depth.
//! Items never reached within that depth share a flat sentinel rank.

mod ranker;

pub use ranker::{LayerAssignment, LayeredRanker};
