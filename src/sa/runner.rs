//! SA execution loop.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::config::SaConfig;
use crate::budget::{Budget, Termination};
use crate::construction::Construction;
use crate::error::{KpfsError, KpfsResult};
use crate::instance::Instance;
use crate::random::create_rng;
use crate::solution::{DeltaEvaluator, SolutionState};
use crate::trace::ConvergenceTrace;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best solution found.
    pub best: SolutionState,

    /// Objective of the best solution.
    pub best_value: i64,

    /// Total number of proposals, including those skipped as infeasible.
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves with a positive delta.
    pub improving_moves: usize,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Why the search stopped.
    pub termination: Termination,

    /// Best-value history.
    pub trace: ConvergenceTrace,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA on `instance`.
    ///
    /// Each iteration proposes flipping one uniformly drawn item. An
    /// addition that would exceed the capacity is skipped outright: no
    /// cooling and no stagnation count, though it still counts against
    /// `max_iterations`.
    pub fn run(instance: &Instance, config: &SaConfig) -> KpfsResult<SaResult> {
        config.validate().map_err(KpfsError::Config)?;

        let budget = Budget::start(
            config.time_limit,
            config.max_no_improve,
            config.max_iterations,
        );
        let mut trace = ConvergenceTrace::new();
        let n = instance.item_count();

        if n == 0 {
            tracing::warn!("sa: instance has no items");
            trace.record(0.0, 0);
            trace.finish(budget.limit_secs(), 0);
            return Ok(SaResult {
                best: SolutionState::empty(instance),
                best_value: 0,
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                elapsed: budget.elapsed(),
                termination: Termination::EmptyInstance,
                trace,
            });
        }

        let mut rng = create_rng(config.seed);
        let eval = DeltaEvaluator::new(instance);

        let mut current = Construction::new(instance).random_insertion(&mut rng);
        let mut best = current.clone();
        trace.record(0.0, best.objective());

        let mut temperature = config.initial_temperature;
        let mut iterations = 0;
        let mut accepted_moves = 0;
        let mut improving_moves = 0;
        let mut no_improve = 0;

        let termination = loop {
            let elapsed = budget.elapsed_secs();
            if let Some(reason) = budget.check(elapsed, no_improve, iterations) {
                break reason;
            }
            iterations += 1;

            let item = rng.random_range(0..n);
            let Some(delta) = eval.evaluate_flip(&current, item) else {
                continue;
            };

            // Metropolis acceptance criterion
            let accept = if delta > 0 {
                true
            } else if temperature > 0.0 {
                rng.random::<f64>() < (delta as f64 / temperature).exp()
            } else {
                false
            };

            if accept {
                eval.apply_flip(&mut current, item, delta);
                accepted_moves += 1;
                if delta > 0 {
                    improving_moves += 1;
                }

                if current.objective() > best.objective() {
                    debug!(
                        elapsed,
                        value = current.objective(),
                        temperature,
                        "sa: new best"
                    );
                    best = current.clone();
                    trace.record(elapsed, best.objective());
                    no_improve = 0;
                } else {
                    no_improve += 1;
                }
            } else {
                no_improve += 1;
            }

            temperature *= config.cooling_rate;
        };

        let best_value = best.objective();
        trace.finish(budget.limit_secs(), best_value);
        info!(
            best = best_value,
            iterations,
            accepted_moves,
            final_temperature = temperature,
            %termination,
            "sa: finished"
        );

        Ok(SaResult {
            best,
            best_value,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            elapsed: budget.elapsed(),
            termination,
            trace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        arb_instance, brute_force_optimum, forfeit_triple, greedy_trap, overlapping_ten, plain_ten,
        zero_capacity,
    };
    use proptest::prelude::*;

    fn config() -> SaConfig {
        SaConfig::default()
            .with_time_limit(Duration::from_secs(10))
            .with_max_no_improve(20_000)
            .with_seed(42)
    }

    #[test]
    fn test_sa_forfeit_triple() {
        for (limit, optimum) in [(0, 15), (1, 20)] {
            let instance = forfeit_triple(limit);
            let result = SaRunner::run(&instance, &config()).unwrap();
            assert_eq!(result.best_value, optimum);
            assert_eq!(result.termination, Termination::Stagnation);
        }
    }

    #[test]
    fn test_sa_escapes_greedy_trap() {
        let instance = greedy_trap();
        let result = SaRunner::run(&instance, &config()).unwrap();
        assert_eq!(result.best_value, 14);
        assert_eq!(result.best.selected_items(), vec![1, 2]);
    }

    #[test]
    fn test_sa_infeasible_proposals_do_not_cool() {
        let instance = zero_capacity();
        let result = SaRunner::run(&instance, &config().with_max_iterations(500)).unwrap();

        assert_eq!(result.best_value, 0);
        assert_eq!(result.iterations, 500);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.termination, Termination::IterationLimit);
        assert!((result.final_temperature - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let instance = overlapping_ten();
        let result = SaRunner::run(&instance, &config().with_max_iterations(100)).unwrap();
        assert_eq!(result.iterations, 100);
        assert!(result.final_temperature < 1000.0);
    }

    #[test]
    fn test_sa_metropolis_accepts_downhill() {
        // At very high temperature, almost all moves should be accepted
        let instance = overlapping_ten();
        let cfg = config()
            .with_initial_temperature(1e8)
            .with_max_iterations(2000);
        let result = SaRunner::run(&instance, &cfg).unwrap();
        assert!(result.accepted_moves > result.improving_moves);
        assert!(result.best.is_feasible(&instance));
    }

    #[test]
    fn test_sa_trace_starts_at_zero() {
        let instance = overlapping_ten();
        let result = SaRunner::run(&instance, &config().with_max_iterations(1000)).unwrap();
        assert_eq!(result.trace.samples()[0].elapsed, 0.0);
        for w in result.trace.improvements().windows(2) {
            assert!(w[1].value > w[0].value);
        }
    }

    #[test]
    fn test_sa_seed_reproducible() {
        let instance = overlapping_ten();
        let cfg = config().with_max_iterations(3000);
        let a = SaRunner::run(&instance, &cfg).unwrap();
        let b = SaRunner::run(&instance, &cfg).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_sa_reaches_ten_item_optima() {
        for instance in [plain_ten(), overlapping_ten()] {
            let optimum = brute_force_optimum(&instance);
            for seed in 0..5 {
                let cfg = SaConfig::default()
                    .with_time_limit(Duration::from_secs(10))
                    .with_seed(seed);
                let result = SaRunner::run(&instance, &cfg).unwrap();
                assert_eq!(result.best_value, optimum, "seed {seed}");
            }
        }
    }

    #[test]
    fn test_sa_empty_instance() {
        let instance = Instance::new(vec![], vec![], 3, vec![]).unwrap();
        let result = SaRunner::run(&instance, &config()).unwrap();
        assert_eq!(result.best_value, 0);
        assert_eq!(result.termination, Termination::EmptyInstance);
    }

    #[test]
    fn test_sa_invalid_config() {
        let instance = greedy_trap();
        let err = SaRunner::run(&instance, &config().with_cooling_rate(2.0)).unwrap_err();
        assert!(matches!(err, KpfsError::Config(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_sa_never_leaves_capacity(instance in arb_instance(), seed in any::<u64>()) {
            let cfg = SaConfig::default()
                .with_time_limit(Duration::from_secs(5))
                .with_max_iterations(500)
                .with_seed(seed);
            let result = SaRunner::run(&instance, &cfg).unwrap();
            prop_assert!(result.best.is_feasible(&instance));
            prop_assert!(result.best_value <= brute_force_optimum(&instance));
        }
    }
}
