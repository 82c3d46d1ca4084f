//! State fingerprints and the tabu memory.

use rand::Rng;
use rustc_hash::FxHashMap;

use super::config::AspirationRule;
use crate::solution::SolutionState;

/// One random 64-bit key per item.
///
/// The fingerprint of a selection is the XOR of the keys of its selected
/// items, so flipping item `i` changes the fingerprint by `key(i)`.
#[derive(Debug, Clone)]
pub struct ZobristKeys {
    keys: Vec<u64>,
}

impl ZobristKeys {
    pub fn new<R: Rng>(item_count: usize, rng: &mut R) -> Self {
        Self {
            keys: (0..item_count).map(|_| rng.random::<u64>()).collect(),
        }
    }

    #[inline]
    pub fn key(&self, item: usize) -> u64 {
        self.keys[item]
    }

    /// Fingerprint of `state`, computed from scratch.
    pub fn fingerprint(&self, state: &SolutionState) -> u64 {
        state
            .selected_items()
            .into_iter()
            .fold(0, |fp, item| fp ^ self.keys[item])
    }

    /// Fingerprint after flipping `item` in a state with fingerprint `fp`.
    #[inline]
    pub fn flipped(&self, fp: u64, item: usize) -> u64 {
        fp ^ self.keys[item]
    }
}

/// Map from state fingerprint to the iteration until which it is tabu.
///
/// Insert-or-overwrite; nothing is evicted unless [`compact`](Self::compact)
/// is called.
#[derive(Debug, Clone, Default)]
pub struct TabuMemory {
    expiry: FxHashMap<u64, i64>,
}

impl TabuMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers `fingerprint` until iteration `expiry`, replacing any
    /// earlier entry.
    pub fn insert(&mut self, fingerprint: u64, expiry: i64) {
        self.expiry.insert(fingerprint, expiry);
    }

    pub fn expiry(&self, fingerprint: u64) -> Option<i64> {
        self.expiry.get(&fingerprint).copied()
    }

    /// Whether `fingerprint` is still forbidden at `iteration`.
    pub fn is_tabu(&self, fingerprint: u64, iteration: i64) -> bool {
        self.expiry(fingerprint).is_some_and(|e| e > iteration)
    }

    /// Whether a move to a state with `fingerprint` and objective
    /// `neighbour_value` may be taken at `iteration` given the best value
    /// found so far.
    pub fn admits(
        &self,
        rule: AspirationRule,
        fingerprint: u64,
        iteration: i64,
        neighbour_value: i64,
        best_value: i64,
    ) -> bool {
        match rule {
            AspirationRule::Improvement => {
                !self.is_tabu(fingerprint, iteration) || neighbour_value > best_value
            }
            AspirationRule::ExpiryAboveBest => {
                self.expiry(fingerprint).unwrap_or(i64::MAX) > best_value
            }
        }
    }

    /// Drops entries that are no longer tabu at `iteration`, returning how
    /// many were removed.
    pub fn compact(&mut self, iteration: i64) -> usize {
        let before = self.expiry.len();
        self.expiry.retain(|_, &mut e| e > iteration);
        before - self.expiry.len()
    }

    pub fn len(&self) -> usize {
        self.expiry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expiry.is_empty()
    }
}
