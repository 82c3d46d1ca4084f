//! Tabu Search configuration.

use std::time::Duration;

/// Admissibility rule for a neighbour whose fingerprint is in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspirationRule {
    /// A remembered state is tabu while its expiry lies beyond the current
    /// iteration; a tabu move is still admissible if it would produce a new
    /// best value. Unseen states are always admissible.
    #[default]
    Improvement,

    /// Admits a neighbour iff its stored expiry (`+∞` when unseen) exceeds
    /// the best value found so far. The start state is remembered with
    /// expiry `-1`. Compares an iteration number with an objective value and
    /// tends to cycle; kept for reproducing historical runs.
    ExpiryAboveBest,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_kpfs::tabu::{AspirationRule, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_tabu_tenure(50)
///     .with_aspiration(AspirationRule::Improvement)
///     .with_compaction(1000);
/// assert_eq!(config.tabu_tenure, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Wall-clock budget.
    pub time_limit: Duration,
    /// How many iterations a visited state stays forbidden.
    pub tabu_tenure: usize,
    /// Maximum iterations without improvement before stopping.
    pub max_no_improve: usize,
    /// Hard cap on iterations. 0 = no limit.
    pub max_iterations: usize,
    /// Admissibility rule for remembered states.
    pub aspiration: AspirationRule,
    /// Drop expired memory entries every this many iterations. 0 = never.
    pub compact_every: usize,
    /// Random seed for the Zobrist keys (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(2),
            tabu_tenure: 100,
            max_no_improve: 500,
            max_iterations: 0,
            aspiration: AspirationRule::default(),
            compact_every: 0,
            seed: None,
        }
    }
}

impl TabuConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the tabu tenure (number of iterations a state remains tabu).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets maximum iterations without improvement.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_aspiration(mut self, rule: AspirationRule) -> Self {
        self.aspiration = rule;
        self
    }

    /// Enables periodic removal of expired entries.
    pub fn with_compaction(mut self, every: usize) -> Self {
        self.compact_every = every;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.tabu_tenure == 0 {
            return Err("tabu_tenure must be at least 1".into());
        }
        if i64::try_from(self.tabu_tenure).is_err() {
            return Err(format!("tabu_tenure {} is too large", self.tabu_tenure));
        }
        // Under ExpiryAboveBest an expired entry still differs from an
        // absent one, so dropping it would change the trajectory.
        if self.compact_every > 0 && self.aspiration == AspirationRule::ExpiryAboveBest {
            return Err("compaction requires the Improvement aspiration rule".into());
        }
        Ok(())
    }
}
