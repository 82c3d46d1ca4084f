//! ILS configuration.

use std::time::Duration;

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use u_kpfs::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_perturbation_strength(6)
///     .with_max_no_improve(500);
/// assert_eq!(config.perturbation_strength, 6);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Wall-clock budget.
    pub time_limit: Duration,
    /// Perturbations without a new best tolerated before stopping.
    pub max_no_improve: usize,
    /// Hard cap on perturbations. 0 = no limit.
    pub max_iterations: usize,
    /// Number of random bit flips per perturbation.
    pub perturbation_strength: usize,
    /// Random seed (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(2),
            max_no_improve: 300,
            max_iterations: 0,
            perturbation_strength: 4,
            seed: None,
        }
    }
}

impl IlsConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_perturbation_strength(mut self, flips: usize) -> Self {
        self.perturbation_strength = flips;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.perturbation_strength == 0 {
            return Err("perturbation_strength must be at least 1".into());
        }
        Ok(())
    }
}
