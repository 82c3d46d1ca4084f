//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! A multi-start metaheuristic: every restart builds a fresh solution with a
//! randomized greedy construction and climbs it to a local optimum. Restarts
//! are independent; only the best solution and the convergence trace carry
//! over between them.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995). "Greedy Randomized Adaptive
//!   Search Procedures", *Journal of Global Optimization* 6, 109-133.

mod config;
mod runner;

pub use config::GraspConfig;
pub use runner::{GraspResult, GraspRunner};
