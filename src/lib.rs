//! Local search and metaheuristics for the knapsack problem with forfeit
//! sets (KPFS).
//!
//! An instance is a 0/1 knapsack with one hard capacity plus a number of
//! possibly overlapping *forfeit sets*: each set tolerates up to `limit`
//! selected members for free and charges `penalty` for every member beyond
//! that. The objective is total profit minus all forfeit penalties.
//!
//! The crate provides:
//!
//! - **Incremental evaluation**: [`SolutionState`] keeps weight, group
//!   occupancy and objective consistent under single-item flips, and
//!   [`DeltaEvaluator`] prices a flip in `O(|groups_of[item]|)`.
//! - **Construction**: ratio-greedy, randomized greedy and random insertion.
//! - **Local search**: first-improvement hill climbing over single flips.
//! - **Drivers**: GRASP, Iterated Local Search, Simulated Annealing and
//!   Tabu Search, each under a wall-clock budget with a convergence trace.
//!
//! # Example
//!
//! ```
//! use u_kpfs::grasp::{GraspConfig, GraspRunner};
//! use u_kpfs::Instance;
//!
//! // 4 items, 1 forfeit set, capacity 10
//! let text = "4 1 10\n 10 8 6 5\n 4 3 3 2\n 0 3 3\n 0 1 2\n";
//! let instance: Instance = text.parse().unwrap();
//!
//! let result = GraspRunner::run(&instance, &GraspConfig::default().with_seed(42)).unwrap();
//! assert!(result.best.is_feasible(&instance));
//! ```

mod budget;
pub mod construction;
pub mod error;
pub mod grasp;
pub mod ils;
pub mod instance;
pub mod local_search;
pub mod metaheuristic;
pub mod random;
pub mod sa;
pub mod solution;
pub mod tabu;
pub mod trace;

#[cfg(test)]
mod testing;

pub use budget::Termination;
pub use error::{KpfsError, KpfsResult};
pub use instance::{ForfeitSet, Instance};
pub use metaheuristic::{Metaheuristic, Outcome};
pub use solution::{DeltaEvaluator, SolutionState, INFEASIBLE};
pub use trace::{append_result, ConvergenceTrace, Sample};
