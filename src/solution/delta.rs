//! Single-flip delta evaluation.

use super::{SolutionState, INFEASIBLE};
use crate::instance::Instance;

/// Scores and applies single-item flips against one instance.
///
/// All three operations agree: for a feasible post-flip state,
/// `full_evaluate(apply_flip(s, i, d))` equals `s.objective() + d` where
/// `d = evaluate_flip(s, i)`.
#[derive(Debug, Clone, Copy)]
pub struct DeltaEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> DeltaEvaluator<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Objective change of toggling `item`, without mutating `state`.
    ///
    /// Returns `None` when `item` is unselected and adding it would exceed
    /// the capacity; such moves must be skipped, not scored.
    ///
    /// Removing an item relieves the penalty of every member group that is
    /// currently over its limit; adding one charges every member group that
    /// would end up over its limit.
    #[inline]
    pub fn evaluate_flip(&self, state: &SolutionState, item: usize) -> Option<i64> {
        let inst = self.instance;
        let groups = inst.groups_of(item);

        if state.is_selected(item) {
            let relief: i64 = groups
                .iter()
                .filter(|&&g| state.occupancy[g] > inst.group_limit(g))
                .map(|&g| inst.group_penalty(g))
                .sum();
            Some(relief - inst.profit(item))
        } else {
            if state.total_weight + inst.weight(item) > inst.capacity() {
                return None;
            }
            let charge: i64 = groups
                .iter()
                .filter(|&&g| state.occupancy[g] + 1 > inst.group_limit(g))
                .map(|&g| inst.group_penalty(g))
                .sum();
            Some(inst.profit(item) - charge)
        }
    }

    /// Toggles `item` and updates every aggregate.
    ///
    /// `delta` must come from [`evaluate_flip`](Self::evaluate_flip) against
    /// the current state; a stale delta silently corrupts the objective.
    #[inline]
    pub fn apply_flip(&self, state: &mut SolutionState, item: usize, delta: i64) {
        let inst = self.instance;
        state.selected.toggle(item);
        if state.selected.contains(item) {
            state.total_weight += inst.weight(item);
            for &g in inst.groups_of(item) {
                state.occupancy[g] += 1;
            }
        } else {
            state.total_weight -= inst.weight(item);
            for &g in inst.groups_of(item) {
                state.occupancy[g] -= 1;
            }
        }
        state.objective += delta;
    }

    /// Recomputes weight, occupancy and objective from the selection bits.
    ///
    /// Returns the new objective, which is [`INFEASIBLE`] when the selection
    /// exceeds the capacity.
    pub fn full_evaluate(&self, state: &mut SolutionState) -> i64 {
        let inst = self.instance;
        state.occupancy.iter_mut().for_each(|o| *o = 0);

        let mut weight = 0;
        let mut profit = 0;
        for item in state.selected.ones() {
            weight += inst.weight(item);
            profit += inst.profit(item);
            for &g in inst.groups_of(item) {
                state.occupancy[g] += 1;
            }
        }
        state.total_weight = weight;

        state.objective = if weight > inst.capacity() {
            INFEASIBLE
        } else {
            let penalty: i64 = state
                .occupancy
                .iter()
                .enumerate()
                .map(|(g, &o)| inst.group_cost(g, o))
                .sum();
            profit - penalty
        };
        state.objective
    }
}
