//! Tabu Search execution loop.

use std::time::Duration;

use tracing::{debug, info, trace};

use super::config::{AspirationRule, TabuConfig};
use super::memory::{TabuMemory, ZobristKeys};
use crate::budget::{Budget, Termination};
use crate::construction::Construction;
use crate::error::{KpfsError, KpfsResult};
use crate::instance::Instance;
use crate::random::create_rng;
use crate::solution::{DeltaEvaluator, SolutionState};
use crate::trace::ConvergenceTrace;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// The best solution found.
    pub best: SolutionState,
    /// Objective of the best solution.
    pub best_value: i64,
    /// Total iterations performed.
    pub iterations: usize,
    /// Iteration at which the best was found (0 = the start solution).
    pub best_iteration: usize,
    /// Entries left in the tabu memory.
    pub memory_size: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Why the search stopped.
    pub termination: Termination,
    /// Best-value history.
    pub trace: ConvergenceTrace,
}

/// Candidate move chosen in one neighbourhood scan.
#[derive(Debug, Clone, Copy)]
struct Move {
    item: usize,
    delta: i64,
    value: i64,
}

/// Executes Tabu Search.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search on `instance`.
    ///
    /// Starts from the deterministic greedy solution and, at every
    /// iteration, scans all single-item flips and moves to the admissible
    /// feasible neighbour with the highest value (the first one found wins
    /// ties), even if it is worse than the current solution.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_kpfs::instance::Instance;
    /// use u_kpfs::tabu::{TabuConfig, TabuRunner};
    ///
    /// let instance: Instance = "3 0 10  10 7 7  6 5 5".parse().unwrap();
    /// let result = TabuRunner::run(&instance, &TabuConfig::default().with_seed(7)).unwrap();
    /// assert_eq!(result.best_value, 14);
    /// ```
    pub fn run(instance: &Instance, config: &TabuConfig) -> KpfsResult<TabuResult> {
        config.validate().map_err(KpfsError::Config)?;

        let budget = Budget::start(
            config.time_limit,
            config.max_no_improve,
            config.max_iterations,
        );
        let mut convergence = ConvergenceTrace::new();
        let n = instance.item_count();

        if n == 0 {
            tracing::warn!("tabu: instance has no items");
            convergence.record(0.0, 0);
            convergence.finish(budget.limit_secs(), 0);
            return Ok(TabuResult {
                best: SolutionState::empty(instance),
                best_value: 0,
                iterations: 0,
                best_iteration: 0,
                memory_size: 0,
                elapsed: budget.elapsed(),
                termination: Termination::EmptyInstance,
                trace: convergence,
            });
        }

        let mut rng = create_rng(config.seed);
        let keys = ZobristKeys::new(n, &mut rng);
        let eval = DeltaEvaluator::new(instance);

        let mut current = Construction::new(instance).greedy();
        let mut fingerprint = keys.fingerprint(&current);
        let mut best = current.clone();
        let mut best_iteration = 0;
        convergence.record(0.0, best.objective());

        let mut memory = TabuMemory::new();
        if config.aspiration == AspirationRule::ExpiryAboveBest {
            memory.insert(fingerprint, -1);
        }

        let tenure = i64::try_from(config.tabu_tenure).unwrap_or(i64::MAX);
        let mut iterations = 0;
        let mut no_improve = 0;

        let termination = loop {
            let elapsed = budget.elapsed_secs();
            if let Some(reason) = budget.check(elapsed, no_improve, iterations) {
                break reason;
            }
            iterations += 1;
            let iter = iterations as i64;

            let mut chosen: Option<Move> = None;
            for item in 0..n {
                let Some(delta) = eval.evaluate_flip(&current, item) else {
                    continue;
                };
                let value = current.objective() + delta;
                let neighbour = keys.flipped(fingerprint, item);
                if !memory.admits(config.aspiration, neighbour, iter, value, best.objective()) {
                    continue;
                }
                if chosen.is_none_or(|m| value > m.value) {
                    chosen = Some(Move { item, delta, value });
                }
            }

            let Some(mv) = chosen else {
                break Termination::NoAdmissibleMove;
            };
            trace!(
                iteration = iterations,
                item = mv.item,
                value = mv.value,
                "tabu: move"
            );

            let previous = fingerprint;
            eval.apply_flip(&mut current, mv.item, mv.delta);
            fingerprint = keys.flipped(fingerprint, mv.item);
            memory.insert(previous, iter.saturating_add(tenure));

            if current.objective() > best.objective() {
                debug!(
                    elapsed,
                    value = current.objective(),
                    iteration = iterations,
                    "tabu: new best"
                );
                best = current.clone();
                best_iteration = iterations;
                convergence.record(elapsed, best.objective());
                no_improve = 0;
            } else {
                no_improve += 1;
            }

            if config.compact_every > 0 && iterations % config.compact_every == 0 {
                let removed = memory.compact(iter);
                trace!(removed, remaining = memory.len(), "tabu: compacted memory");
            }
        };

        let best_value = best.objective();
        convergence.finish(budget.limit_secs(), best_value);
        info!(
            best = best_value,
            iterations,
            best_iteration,
            memory = memory.len(),
            %termination,
            "tabu: finished"
        );

        Ok(TabuResult {
            best,
            best_value,
            iterations,
            best_iteration,
            memory_size: memory.len(),
            elapsed: budget.elapsed(),
            termination,
            trace: convergence,
        })
    }
}
