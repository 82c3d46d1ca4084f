//! Simulated Annealing (SA).
//!
//! A single-solution trajectory over single-item flips. Worsening flips are
//! accepted with a probability that shrinks as the temperature cools
//! geometrically, allowing the search to escape local optima. There is no
//! local search: the trajectory is pure Metropolis.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
