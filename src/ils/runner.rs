//! Iterated Local Search execution loop.
//!
//! # Algorithm
//!
//! 1. Build the deterministic greedy solution and climb it to a local optimum
//! 2. At each iteration:
//!    a. Copy the current solution and flip `strength` random bits,
//!    ignoring feasibility
//!    b. Re-evaluate from scratch; an over-capacity candidate is rejected
//!    without local search
//!    c. Otherwise climb it to a local optimum
//!    d. Move to it iff it is strictly better than the current solution
//! 3. Terminate on time budget or stagnation

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::config::IlsConfig;
use crate::budget::{Budget, Termination};
use crate::construction::Construction;
use crate::error::{KpfsError, KpfsResult};
use crate::instance::Instance;
use crate::local_search::LocalSearch;
use crate::random::create_rng;
use crate::solution::{DeltaEvaluator, SolutionState, INFEASIBLE};
use crate::trace::ConvergenceTrace;

/// Result of an ILS run.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Best solution found.
    pub best: SolutionState,
    /// Objective of the best solution.
    pub best_value: i64,
    /// Number of perturbations.
    pub iterations: usize,
    /// Perturbed candidates that replaced the current solution.
    pub accepted: usize,
    /// Perturbed candidates rejected for exceeding the capacity.
    pub infeasible_perturbations: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Why the search stopped.
    pub termination: Termination,
    /// Best-value history.
    pub trace: ConvergenceTrace,
}

/// Iterated Local Search runner.
pub struct IlsRunner;

impl IlsRunner {
    /// Runs ILS on `instance`.
    pub fn run(instance: &Instance, config: &IlsConfig) -> KpfsResult<IlsResult> {
        config.validate().map_err(KpfsError::Config)?;

        let budget = Budget::start(
            config.time_limit,
            config.max_no_improve,
            config.max_iterations,
        );
        let mut trace = ConvergenceTrace::new();
        let n = instance.item_count();

        if n == 0 {
            tracing::warn!("ils: instance has no items");
            trace.record(0.0, 0);
            trace.finish(budget.limit_secs(), 0);
            return Ok(IlsResult {
                best: SolutionState::empty(instance),
                best_value: 0,
                iterations: 0,
                accepted: 0,
                infeasible_perturbations: 0,
                elapsed: budget.elapsed(),
                termination: Termination::EmptyInstance,
                trace,
            });
        }

        let mut rng = create_rng(config.seed);
        let eval = DeltaEvaluator::new(instance);
        let local_search = LocalSearch::new(instance);

        let mut current = Construction::new(instance).greedy();
        local_search.improve(&mut current);
        let mut best = current.clone();
        trace.record(budget.elapsed_secs(), best.objective());

        let mut iterations = 0;
        let mut accepted = 0;
        let mut infeasible_perturbations = 0;
        let mut no_improve = 0;

        let termination = loop {
            let elapsed = budget.elapsed_secs();
            if let Some(reason) = budget.check(elapsed, no_improve, iterations) {
                break reason;
            }
            iterations += 1;

            let mut candidate = current.clone();
            for _ in 0..config.perturbation_strength {
                candidate.toggle_unchecked(rng.random_range(0..n));
            }

            if eval.full_evaluate(&mut candidate) == INFEASIBLE {
                infeasible_perturbations += 1;
            } else {
                local_search.improve(&mut candidate);
            }

            if candidate.objective() > current.objective() {
                current = candidate;
                accepted += 1;
            }

            if current.objective() > best.objective() {
                debug!(
                    elapsed,
                    value = current.objective(),
                    iteration = iterations,
                    "ils: new best"
                );
                best = current.clone();
                trace.record(elapsed, best.objective());
                no_improve = 0;
            } else {
                no_improve += 1;
            }
        };

        let best_value = best.objective();
        trace.finish(budget.limit_secs(), best_value);
        info!(
            best = best_value,
            iterations,
            accepted,
            infeasible_perturbations,
            %termination,
            "ils: finished"
        );

        Ok(IlsResult {
            best,
            best_value,
            iterations,
            accepted,
            infeasible_perturbations,
            elapsed: budget.elapsed(),
            termination,
            trace,
        })
    }
}
