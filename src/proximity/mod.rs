//! Frontier proximity search.
//!
//! Answers "which dominated items sit closest to the Pareto frontier?":
//! both point sets are min-max normalized together so each axis
//! contributes comparably to Euclidean distance, a 2-d k-d tree is built
//! over the frontier, and every dominated point is ranked by its
//! single-nearest-neighbor distance.
//!
//! Normalization parameters are derived fresh per call; nothing is cached
//! across ranking runs.

mod kdtree;
mod normalize;
mod search;

pub use kdtree::KdTree2;
pub use normalize::min_max_normalize;
pub use search::closest_to_frontier;
