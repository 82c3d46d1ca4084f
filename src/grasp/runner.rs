//! GRASP execution loop.
//!
//! # Algorithm
//!
//! 1. Build a solution with the randomized greedy construction
//! 2. Climb it to a local optimum with first-improvement local search
//! 3. Keep it if it strictly beats the best so far, otherwise count a
//!    restart without improvement
//! 4. Repeat until the time budget or the patience is exhausted
//!
//! At least one restart always runs, so a best solution always exists.

use std::time::Duration;

use rand::rngs::StdRng;
use tracing::{debug, info};

use super::config::GraspConfig;
use crate::budget::{Budget, Termination};
use crate::construction::Construction;
use crate::error::{KpfsError, KpfsResult};
use crate::instance::Instance;
use crate::local_search::LocalSearch;
use crate::random::create_rng;
use crate::solution::SolutionState;
use crate::trace::ConvergenceTrace;

/// Result of a GRASP run.
#[derive(Debug, Clone)]
pub struct GraspResult {
    /// Best solution found.
    pub best: SolutionState,
    /// Objective of the best solution.
    pub best_value: i64,
    /// Number of restarts (construction + local search).
    pub iterations: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Why the search stopped.
    pub termination: Termination,
    /// Best-value history.
    pub trace: ConvergenceTrace,
}

/// GRASP runner.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP on `instance`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_kpfs::grasp::{GraspConfig, GraspRunner};
    /// use u_kpfs::instance::Instance;
    ///
    /// let instance: Instance = "3 0 10  10 7 7  6 5 5".parse().unwrap();
    /// let result = GraspRunner::run(&instance, &GraspConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(result.best_value, 14);
    /// ```
    pub fn run(instance: &Instance, config: &GraspConfig) -> KpfsResult<GraspResult> {
        config.validate().map_err(KpfsError::Config)?;

        let budget = Budget::start(
            config.time_limit,
            config.max_no_improve,
            config.max_iterations,
        );
        let mut trace = ConvergenceTrace::new();

        if instance.item_count() == 0 {
            tracing::warn!("grasp: instance has no items");
            trace.record(0.0, 0);
            trace.finish(budget.limit_secs(), 0);
            return Ok(GraspResult {
                best: SolutionState::empty(instance),
                best_value: 0,
                iterations: 0,
                elapsed: budget.elapsed(),
                termination: Termination::EmptyInstance,
                trace,
            });
        }

        let mut rng = create_rng(config.seed);
        let construction = Construction::new(instance);
        let local_search = LocalSearch::new(instance);

        let restart = |rng: &mut StdRng| {
            let mut candidate = construction.randomized(
                config.initial_probability,
                config.probability_decay,
                rng,
            );
            local_search.improve(&mut candidate);
            candidate
        };

        let elapsed = budget.elapsed_secs();
        let mut best = restart(&mut rng);
        trace.record(elapsed, best.objective());
        let mut iterations = 1;
        let mut no_improve = 0;

        let termination = loop {
            let elapsed = budget.elapsed_secs();
            if let Some(reason) = budget.check(elapsed, no_improve, iterations) {
                break reason;
            }

            let candidate = restart(&mut rng);
            iterations += 1;

            if candidate.objective() > best.objective() {
                debug!(
                    elapsed,
                    value = candidate.objective(),
                    restart = iterations,
                    "grasp: new best"
                );
                trace.record(elapsed, candidate.objective());
                best = candidate;
                no_improve = 0;
            } else {
                no_improve += 1;
            }
        };

        let best_value = best.objective();
        trace.finish(budget.limit_secs(), best_value);
        info!(
            best = best_value,
            restarts = iterations,
            %termination,
            "grasp: finished"
        );

        Ok(GraspResult {
            best,
            best_value,
            iterations,
            elapsed: budget.elapsed(),
            termination,
            trace,
        })
    }
}
