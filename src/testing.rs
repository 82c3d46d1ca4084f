//! Shared fixtures for unit and property tests.

use proptest::prelude::*;

use crate::instance::{ForfeitSet, Instance};
use crate::solution::{SolutionState, INFEASIBLE};

/// One group with penalty 5 over three unit-weight items of profit 10,
/// capacity 3. With `limit = 0` every member is charged (optimum 15, all
/// three); with `limit = 1` the first member is free (optimum 20).
pub(crate) fn forfeit_triple(limit: usize) -> Instance {
    Instance::new(
        vec![10, 10, 10],
        vec![1, 1, 1],
        3,
        vec![ForfeitSet::new(limit, 5, vec![0, 1, 2])],
    )
    .unwrap()
}

/// Positive weights with zero capacity: only the empty selection fits.
pub(crate) fn zero_capacity() -> Instance {
    Instance::new(
        vec![5, 8, 3, 9],
        vec![1, 2, 1, 4],
        0,
        vec![ForfeitSet::new(1, 2, vec![0, 1, 3])],
    )
    .unwrap()
}

/// Plain knapsack where the ratio-greedy start is a local optimum
/// (`{0}`, value 10) but `{1, 2}` is worth 14.
pub(crate) fn greedy_trap() -> Instance {
    Instance::new(vec![10, 7, 7], vec![6, 5, 5], 10, vec![]).unwrap()
}

/// Ten-item plain knapsack, small enough to enumerate.
pub(crate) fn plain_ten() -> Instance {
    Instance::new(
        vec![12, 9, 7, 15, 4, 11, 6, 8, 13, 5],
        vec![7, 5, 4, 9, 2, 6, 3, 5, 8, 3],
        25,
        vec![],
    )
    .unwrap()
}

/// Ten items with overlapping forfeit sets.
pub(crate) fn overlapping_ten() -> Instance {
    Instance::new(
        vec![12, 9, 7, 15, 4, 11, 6, 8, 13, 5],
        vec![7, 5, 4, 9, 2, 6, 3, 5, 8, 3],
        30,
        vec![
            ForfeitSet::new(1, 6, vec![0, 3, 8]),
            ForfeitSet::new(2, 4, vec![1, 2, 5, 6]),
            ForfeitSet::new(0, 3, vec![4, 9]),
            ForfeitSet::new(1, 10, vec![3, 5, 7]),
        ],
    )
    .unwrap()
}

/// Exhaustive optimum over all `2^n` selections.
pub(crate) fn brute_force_optimum(instance: &Instance) -> i64 {
    let n = instance.item_count();
    assert!(n <= 20, "brute force is limited to 20 items");
    (0u32..1 << n)
        .map(|mask| {
            let items = (0..n).filter(|&i| mask & (1 << i) != 0);
            SolutionState::from_items(instance, items).objective()
        })
        .filter(|&v| v != INFEASIBLE)
        .max()
        .unwrap_or(0)
}

/// Weight and occupancy recomputed directly from the selection.
pub(crate) fn brute_force_occupancy(
    instance: &Instance,
    state: &SolutionState,
) -> (i64, Vec<usize>) {
    let mut occupancy = vec![0; instance.group_count()];
    let mut weight = 0;
    for item in state.selected_items() {
        weight += instance.weight(item);
        for &g in instance.groups_of(item) {
            occupancy[g] += 1;
        }
    }
    (weight, occupancy)
}

/// Random instance with 1..12 items and up to 3 groups.
pub(crate) fn arb_instance() -> impl Strategy<Value = Instance> {
    (1usize..12, 0usize..4)
        .prop_flat_map(|(n, m)| {
            (
                prop::collection::vec(0i64..30, n),
                prop::collection::vec(0i64..10, n),
                0i64..40,
                prop::collection::vec(
                    (0usize..3, 0i64..10, prop::collection::vec(any::<bool>(), n)),
                    m,
                ),
            )
        })
        .prop_map(|(profits, weights, capacity, groups)| {
            let sets = groups
                .into_iter()
                .map(|(limit, penalty, mask)| {
                    let members = mask
                        .iter()
                        .enumerate()
                        .filter(|&(_, &member)| member)
                        .map(|(i, _)| i)
                        .collect();
                    ForfeitSet::new(limit, penalty, members)
                })
                .collect();
            Instance::new(profits, weights, capacity, sets).unwrap()
        })
}

/// Random instance plus a sequence of item indices to flip.
pub(crate) fn arb_instance_and_flips() -> impl Strategy<Value = (Instance, Vec<usize>)> {
    arb_instance().prop_flat_map(|instance| {
        let n = instance.item_count();
        (Just(instance), prop::collection::vec(0..n, 0..60))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forfeit_triple_optimum() {
        // limit 0: 1 item 10 - 5, 2 items 20 - 10, 3 items 30 - 15
        assert_eq!(brute_force_optimum(&forfeit_triple(0)), 15);
        // limit 1: 1 item 10, 2 items 20 - 5, 3 items 30 - 10
        assert_eq!(brute_force_optimum(&forfeit_triple(1)), 20);
    }

    #[test]
    fn test_greedy_trap_optimum() {
        assert_eq!(brute_force_optimum(&greedy_trap()), 14);
    }

    #[test]
    fn test_ten_item_optima() {
        assert_eq!(brute_force_optimum(&plain_ten()), 45);
        assert_eq!(brute_force_optimum(&overlapping_ten()), 43);
    }
}
