//! Iterated Local Search (ILS).
//!
//! Starting from a locally optimal greedy solution, ILS repeatedly kicks the
//! current solution with a few random flips, re-optimizes the result, and
//! moves to it only if it is strictly better (better-only acceptance).
//!
//! # References
//!
//! - Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//!   Search", in *Handbook of Metaheuristics*, 320-353.

mod config;
mod runner;

pub use config::IlsConfig;
pub use runner::{IlsResult, IlsRunner};
