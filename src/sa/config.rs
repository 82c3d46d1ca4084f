//! SA configuration.

use std::time::Duration;

/// Configuration for the Simulated Annealing driver.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied after every
/// proposal that was not skipped for infeasibility.
///
/// # Examples
///
/// ```
/// use u_kpfs::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.995)
///     .with_max_no_improve(20_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Wall-clock budget.
    pub time_limit: Duration,

    /// Consecutive non-improving iterations tolerated before stopping.
    pub max_no_improve: usize,

    /// Maximum proposals, skipped ones included. 0 = no limit.
    pub max_iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(2),
            max_no_improve: 100_000,
            max_iterations: 0,
            initial_temperature: 1000.0,
            cooling_rate: 0.999,
            seed: None,
        }
    }
}

impl SaConfig {
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

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
