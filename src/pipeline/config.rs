//! Pipeline configuration.
//!
//! [`RankingConfig`] holds every knob the pipeline exposes; there is no
//! other configuration surface (no environment variables or files).

/// Which annotation the pipeline produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankingMode {
    /// Single-pass dominance: each item is annotated with a
    /// non-dominated flag.
    Binary,

    /// Full layered ranking: each item is annotated with its dominance
    /// layer, up to [`max_layers`](RankingConfig::max_layers) deep.
    Layered,
}

/// Configuration for a ranking run.
///
/// # Defaults
///
/// ```
/// use frontier_rank::{RankingConfig, RankingMode};
///
/// let config = RankingConfig::default();
/// assert_eq!(config.mode, RankingMode::Binary);
/// assert_eq!(config.proximity_count, 100);
/// assert_eq!(config.max_layers, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use frontier_rank::{RankingConfig, RankingMode};
///
/// let config = RankingConfig::default()
///     .with_mode(RankingMode::Layered)
///     .with_max_layers(3)
///     .with_proximity_count(25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingConfig {
    /// Annotation mode.
    pub mode: RankingMode,

    /// How many dominated items to report as "closest to the frontier".
    ///
    /// 0 disables the proximity pass entirely.
    pub proximity_count: usize,

    /// Number of dominance layers to peel in [`RankingMode::Layered`].
    ///
    /// Items not reached within this depth share the flat sentinel rank
    /// `max_layers + 1`. Ignored in binary mode.
    pub max_layers: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            mode: RankingMode::Binary,
            proximity_count: 100,
            max_layers: 5,
        }
    }
}

impl RankingConfig {
    /// Sets the annotation mode.
    pub fn with_mode(mut self, mode: RankingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the proximity set size (0 disables the proximity pass).
    pub fn with_proximity_count(mut self, count: usize) -> Self {
        self.proximity_count = count;
        self
    }

    /// Sets the layered-mode peeling depth.
    pub fn with_max_layers(mut self, layers: usize) -> Self {
        self.max_layers = layers;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.mode == RankingMode::Layered && self.max_layers == 0 {
            return Err("max_layers must be at least 1 in layered mode".into());
        }
        Ok(())
    }
}
