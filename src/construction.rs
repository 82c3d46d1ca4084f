//! Construction heuristics.
//!
//! All constructions walk items by profit-to-weight ratio and ignore group
//! penalties: those are left for the improvement phase to resolve. Every
//! construction only admits items that fit the remaining capacity, so the
//! result is always feasible.

use rand::Rng;

use crate::instance::Instance;
use crate::solution::SolutionState;

/// Ratio assigned to zero-weight items so they rank ahead of everything.
const ZERO_WEIGHT_RATIO: f64 = 1e12;

/// Ratio-ranked constructor for one instance.
#[derive(Debug, Clone)]
pub struct Construction<'a> {
    instance: &'a Instance,
    ranked: Vec<usize>,
}

impl<'a> Construction<'a> {
    /// Ranks the items by profit/weight, best first.
    ///
    /// Zero-weight items get ratio `1e12 + profit`. Equal ratios are ordered
    /// by the larger index first.
    pub fn new(instance: &'a Instance) -> Self {
        let ratio = |i: usize| {
            let w = instance.weight(i);
            if w == 0 {
                ZERO_WEIGHT_RATIO + instance.profit(i) as f64
            } else {
                instance.profit(i) as f64 / w as f64
            }
        };

        let mut ranked: Vec<usize> = (0..instance.item_count()).collect();
        ranked.sort_by(|&a, &b| ratio(b).total_cmp(&ratio(a)).then(b.cmp(&a)));

        Self { instance, ranked }
    }

    /// Item indices in ranking order.
    pub fn ranking(&self) -> &[usize] {
        &self.ranked
    }

    /// Deterministic greedy: adds each ranked item iff it fits.
    pub fn greedy(&self) -> SolutionState {
        self.build(|_| true)
    }

    /// Randomized greedy: walks the ranking and admits each item with
    /// probability `p`, which starts at `initial_probability` and is
    /// multiplied by `decay` after every candidate.
    ///
    /// High-ratio items are almost always kept while the tail of the
    /// ranking becomes increasingly random.
    pub fn randomized<R: Rng>(
        &self,
        initial_probability: f64,
        decay: f64,
        rng: &mut R,
    ) -> SolutionState {
        let mut p = initial_probability;
        self.build(|_| {
            let admit = rng.random::<f64>() < p;
            p *= decay;
            admit
        })
    }

    /// Random insertion: `item_count` trials of a uniformly drawn item,
    /// each added if unselected and it fits.
    pub fn random_insertion<R: Rng>(&self, rng: &mut R) -> SolutionState {
        let instance = self.instance;
        let n = instance.item_count();
        let mut chosen = Vec::new();
        let mut weight = 0;
        let mut taken = vec![false; n];

        for _ in 0..n {
            let item = rng.random_range(0..n);
            if !taken[item] && weight + instance.weight(item) <= instance.capacity() {
                taken[item] = true;
                weight += instance.weight(item);
                chosen.push(item);
            }
        }

        SolutionState::from_items(instance, chosen)
    }

    fn build(&self, mut admit: impl FnMut(usize) -> bool) -> SolutionState {
        let instance = self.instance;
        let mut chosen = Vec::new();
        let mut weight = 0;

        for &item in &self.ranked {
            if admit(item) && weight + instance.weight(item) <= instance.capacity() {
                weight += instance.weight(item);
                chosen.push(item);
            }
        }

        SolutionState::from_items(instance, chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::testing::{arb_instance, greedy_trap, plain_ten, zero_capacity};
    use proptest::prelude::*;

    #[test]
    fn test_ranking_by_ratio() {
        let instance = Instance::new(vec![4, 9, 6, 1], vec![2, 3, 0, 1], 10, vec![]).unwrap();
        let c = Construction::new(&instance);
        // ratios: 2.0, 3.0, zero-weight, 1.0
        assert_eq!(c.ranking(), &[2, 1, 0, 3]);
    }

    #[test]
    fn test_ranking_ties_prefer_larger_index() {
        let instance = Instance::new(vec![2, 4, 2], vec![1, 2, 1], 10, vec![]).unwrap();
        assert_eq!(Construction::new(&instance).ranking(), &[2, 1, 0]);
    }

    #[test]
    fn test_greedy_trap() {
        let instance = greedy_trap();
        let state = Construction::new(&instance).greedy();
        assert_eq!(state.selected_items(), vec![0]);
        assert_eq!(state.objective(), 10);
    }

    #[test]
    fn test_zero_capacity_builds_empty() {
        let instance = zero_capacity();
        let c = Construction::new(&instance);
        let mut rng = create_rng(Some(1));
        assert_eq!(c.greedy().selected_count(), 0);
        assert_eq!(c.randomized(0.85, 0.97, &mut rng).selected_count(), 0);
        assert_eq!(c.random_insertion(&mut rng).selected_count(), 0);
    }

    #[test]
    fn test_randomized_certain_probability_matches_greedy() {
        let instance = plain_ten();
        let c = Construction::new(&instance);
        let mut rng = create_rng(Some(3));
        assert_eq!(c.randomized(1.0, 1.0, &mut rng), c.greedy());
    }

    #[test]
    fn test_randomized_zero_probability_is_empty() {
        let instance = plain_ten();
        let c = Construction::new(&instance);
        let mut rng = create_rng(Some(3));
        assert_eq!(c.randomized(0.0, 0.97, &mut rng).selected_count(), 0);
    }

    #[test]
    fn test_randomized_varies_across_restarts() {
        let instance = plain_ten();
        let c = Construction::new(&instance);
        let mut rng = create_rng(Some(11));
        let first = c.randomized(0.85, 0.97, &mut rng);
        let differs = (0..50).any(|_| c.randomized(0.85, 0.97, &mut rng) != first);
        assert!(differs);
    }

    proptest! {
        #[test]
        fn prop_constructions_are_feasible(instance in arb_instance(), seed in any::<u64>()) {
            let c = Construction::new(&instance);
            let mut rng = create_rng(Some(seed));
            for state in [
                c.greedy(),
                c.randomized(0.85, 0.97, &mut rng),
                c.random_insertion(&mut rng),
            ] {
                prop_assert!(state.is_feasible(&instance));
                prop_assert!(state.objective() > crate::solution::INFEASIBLE);
            }
        }
    }
}
