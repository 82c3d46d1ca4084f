//! GRASP configuration.

use std::time::Duration;

/// Configuration parameters for GRASP.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_kpfs::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_time_limit(Duration::from_millis(500))
///     .with_admission(0.9, 0.95)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Wall-clock budget.
    pub time_limit: Duration,
    /// Restarts without a new best tolerated before stopping.
    pub max_no_improve: usize,
    /// Hard cap on restarts. 0 = no limit.
    pub max_iterations: usize,
    /// Admission probability for the first ranked item.
    pub initial_probability: f64,
    /// Factor applied to the admission probability after every candidate.
    pub probability_decay: f64,
    /// Random seed (None for a random seed).
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(2),
            max_no_improve: 300,
            max_iterations: 0,
            initial_probability: 0.85,
            probability_decay: 0.97,
            seed: None,
        }
    }
}

impl GraspConfig {
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

    /// Sets the randomized-greedy admission schedule.
    pub fn with_admission(mut self, initial_probability: f64, decay: f64) -> Self {
        self.initial_probability = initial_probability;
        self.probability_decay = decay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.initial_probability) {
            return Err(format!(
                "initial_probability must be in [0, 1], got {}",
                self.initial_probability
            ));
        }
        if self.probability_decay <= 0.0 || self.probability_decay > 1.0 {
            return Err(format!(
                "probability_decay must be in (0, 1], got {}",
                self.probability_decay
            ));
        }
        Ok(())
    }
}
