//! Uniform dispatch over the four drivers.

use std::fmt;
use std::time::Duration;

use crate::budget::Termination;
use crate::error::KpfsResult;
use crate::grasp::{GraspConfig, GraspRunner};
use crate::ils::{IlsConfig, IlsRunner};
use crate::instance::Instance;
use crate::sa::{SaConfig, SaRunner};
use crate::solution::SolutionState;
use crate::tabu::{TabuConfig, TabuRunner};
use crate::trace::ConvergenceTrace;

/// A configured driver.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_kpfs::instance::Instance;
/// use u_kpfs::sa::SaConfig;
/// use u_kpfs::Metaheuristic;
///
/// let instance: Instance = "3 0 10  10 7 7  6 5 5".parse().unwrap();
/// let driver = Metaheuristic::Annealing(
///     SaConfig::default().with_time_limit(Duration::from_millis(200)).with_seed(3),
/// );
/// let outcome = driver.run(&instance).unwrap();
/// assert_eq!(outcome.algorithm, "sa");
/// assert!(outcome.best_value <= 14);
/// ```
#[derive(Debug, Clone)]
pub enum Metaheuristic {
    Grasp(GraspConfig),
    Ils(IlsConfig),
    Annealing(SaConfig),
    Tabu(TabuConfig),
}

/// Driver-independent summary of one run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Short driver name, as accepted on the command line.
    pub algorithm: &'static str,
    pub best_value: i64,
    pub best: SolutionState,
    pub iterations: usize,
    pub elapsed: Duration,
    pub termination: Termination,
    pub trace: ConvergenceTrace,
}

impl Metaheuristic {
    /// The driver's short name.
    pub fn name(&self) -> &'static str {
        match self {
            Metaheuristic::Grasp(_) => "grasp",
            Metaheuristic::Ils(_) => "ils",
            Metaheuristic::Annealing(_) => "sa",
            Metaheuristic::Tabu(_) => "tabu",
        }
    }

    /// Overrides the time budget of the wrapped configuration.
    pub fn with_time_limit(self, limit: Duration) -> Self {
        match self {
            Metaheuristic::Grasp(c) => Metaheuristic::Grasp(c.with_time_limit(limit)),
            Metaheuristic::Ils(c) => Metaheuristic::Ils(c.with_time_limit(limit)),
            Metaheuristic::Annealing(c) => Metaheuristic::Annealing(c.with_time_limit(limit)),
            Metaheuristic::Tabu(c) => Metaheuristic::Tabu(c.with_time_limit(limit)),
        }
    }

    /// Overrides the random seed of the wrapped configuration.
    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Metaheuristic::Grasp(c) => Metaheuristic::Grasp(c.with_seed(seed)),
            Metaheuristic::Ils(c) => Metaheuristic::Ils(c.with_seed(seed)),
            Metaheuristic::Annealing(c) => Metaheuristic::Annealing(c.with_seed(seed)),
            Metaheuristic::Tabu(c) => Metaheuristic::Tabu(c.with_seed(seed)),
        }
    }

    /// Runs the driver on `instance`.
    pub fn run(&self, instance: &Instance) -> KpfsResult<Outcome> {
        let algorithm = self.name();
        let outcome = match self {
            Metaheuristic::Grasp(config) => {
                let r = GraspRunner::run(instance, config)?;
                Outcome {
                    algorithm,
                    best_value: r.best_value,
                    best: r.best,
                    iterations: r.iterations,
                    elapsed: r.elapsed,
                    termination: r.termination,
                    trace: r.trace,
                }
            }
            Metaheuristic::Ils(config) => {
                let r = IlsRunner::run(instance, config)?;
                Outcome {
                    algorithm,
                    best_value: r.best_value,
                    best: r.best,
                    iterations: r.iterations,
                    elapsed: r.elapsed,
                    termination: r.termination,
                    trace: r.trace,
                }
            }
            Metaheuristic::Annealing(config) => {
                let r = SaRunner::run(instance, config)?;
                Outcome {
                    algorithm,
                    best_value: r.best_value,
                    best: r.best,
                    iterations: r.iterations,
                    elapsed: r.elapsed,
                    termination: r.termination,
                    trace: r.trace,
                }
            }
            Metaheuristic::Tabu(config) => {
                let r = TabuRunner::run(instance, config)?;
                Outcome {
                    algorithm,
                    best_value: r.best_value,
                    best: r.best,
                    iterations: r.iterations,
                    elapsed: r.elapsed,
                    termination: r.termination,
                    trace: r.trace,
                }
            }
        };
        Ok(outcome)
    }
}

impl fmt::Display for Metaheuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
