//! First-improvement hill climbing over single-item flips.
//!
//! # Algorithm
//!
//! 1. Scan items `0..n` in index order
//! 2. Apply the first flip that is feasible and has `delta > 0`
//! 3. Restart the scan from item 0
//! 4. Stop when a full scan finds no improving flip
//!
//! The result is a local optimum of the penalized objective with respect to
//! the 1-flip neighbourhood. The procedure is deterministic.

use crate::instance::Instance;
use crate::solution::{DeltaEvaluator, SolutionState};

/// First-improvement local search bound to one instance.
#[derive(Debug, Clone, Copy)]
pub struct LocalSearch<'a> {
    eval: DeltaEvaluator<'a>,
}

impl<'a> LocalSearch<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            eval: DeltaEvaluator::new(instance),
        }
    }

    /// Climbs `state` to a local optimum and returns the number of flips
    /// applied.
    ///
    /// `state` must be feasible with consistent aggregates; the capacity
    /// pre-check keeps it feasible throughout.
    pub fn improve(&self, state: &mut SolutionState) -> usize {
        let n = self.eval.instance().item_count();
        let mut moves = 0;

        'scan: loop {
            for item in 0..n {
                match self.eval.evaluate_flip(state, item) {
                    Some(delta) if delta > 0 => {
                        self.eval.apply_flip(state, item, delta);
                        moves += 1;
                        continue 'scan;
                    }
                    _ => {}
                }
            }
            break;
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{arb_instance, forfeit_triple, greedy_trap, overlapping_ten};
    use proptest::prelude::*;

    fn is_local_optimum(instance: &Instance, state: &SolutionState) -> bool {
        let eval = DeltaEvaluator::new(instance);
        (0..instance.item_count())
            .all(|i| eval.evaluate_flip(state, i).is_none_or(|d| d <= 0))
    }

    #[test]
    fn test_improve_from_empty_fills_triple() {
        let instance = forfeit_triple(0);
        let mut state = SolutionState::empty(&instance);
        let moves = LocalSearch::new(&instance).improve(&mut state);
        assert_eq!(moves, 3);
        assert_eq!(state.objective(), 15);
    }

    #[test]
    fn test_improve_drops_heavily_penalized_item() {
        use crate::instance::ForfeitSet;
        let instance = Instance::new(
            vec![4, 6],
            vec![1, 1],
            2,
            vec![ForfeitSet::new(1, 9, vec![0, 1])],
        )
        .unwrap();
        let mut state = SolutionState::from_items(&instance, [0, 1]);
        assert_eq!(state.objective(), 10 - 9);

        LocalSearch::new(&instance).improve(&mut state);
        // dropping item 0 gives -4 + 9 = +5, found first in scan order
        assert_eq!(state.selected_items(), vec![1]);
        assert_eq!(state.objective(), 6);
    }

    #[test]
    fn test_improve_stops_at_local_optimum() {
        let instance = greedy_trap();
        let mut state = SolutionState::from_items(&instance, [0]);
        let moves = LocalSearch::new(&instance).improve(&mut state);
        assert_eq!(moves, 0);
        assert_eq!(state.objective(), 10);
    }

    #[test]
    fn test_improve_is_deterministic() {
        let instance = overlapping_ten();
        let ls = LocalSearch::new(&instance);
        let mut a = SolutionState::empty(&instance);
        let mut b = SolutionState::empty(&instance);
        ls.improve(&mut a);
        ls.improve(&mut b);
        assert_eq!(a, b);
        assert!(is_local_optimum(&instance, &a));
    }

    #[test]
    fn test_improve_empty_instance() {
        let instance = Instance::new(vec![], vec![], 0, vec![]).unwrap();
        let mut state = SolutionState::empty(&instance);
        assert_eq!(LocalSearch::new(&instance).improve(&mut state), 0);
        assert_eq!(state.objective(), 0);
    }

    proptest! {
        /// After `improve`, no feasible flip improves and capacity holds.
        #[test]
        fn prop_improve_reaches_fixed_point(instance in arb_instance()) {
            let mut state = SolutionState::empty(&instance);
            LocalSearch::new(&instance).improve(&mut state);
            prop_assert!(is_local_optimum(&instance, &state));
            prop_assert!(state.is_feasible(&instance));

            let mut fresh = state.clone();
            prop_assert_eq!(
                DeltaEvaluator::new(&instance).full_evaluate(&mut fresh),
                state.objective()
            );
        }
    }
}
