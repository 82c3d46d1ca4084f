//! Tabu Search (TS).
//!
//! A single-solution trajectory over single-item flips that always moves to
//! the best admissible neighbour, even when it is worse. Recently visited
//! states are remembered by their Zobrist fingerprint and forbidden for a
//! number of iterations (the tenure), preventing short cycles and pushing
//! the search into new regions.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.
//! - Zobrist, A. L. (1970). "A New Hashing Method with Application for Game
//!   Playing", Technical Report 88, University of Wisconsin.

mod config;
mod memory;
mod runner;

pub use config::{AspirationRule, TabuConfig};
pub use memory::{TabuMemory, ZobristKeys};
pub use runner::{TabuResult, TabuRunner};
