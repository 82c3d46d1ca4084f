//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the single generator a driver run consumes.
///
/// A fixed seed makes the run reproducible; without one the seed is drawn
/// from the thread-local generator.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
