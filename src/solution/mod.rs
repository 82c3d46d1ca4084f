//! Incremental solution representation.
//!
//! A [`SolutionState`] is a selection bit-vector together with the
//! aggregates the search needs on every move: total weight, per-group
//! occupancy and the objective value. The aggregates are kept consistent by
//! [`DeltaEvaluator::apply_flip`], which costs `O(|groups_of[item]|)`, and
//! can be rebuilt from scratch by [`DeltaEvaluator::full_evaluate`].
//!
//! # Objective
//!
//! ```text
//! value = Σ profit[i] (i selected) − Σ_g max(0, occupancy[g] − limit[g]) · penalty[g]
//! ```
//!
//! Capacity is a hard constraint and never enters the objective: a state
//! whose weight exceeds the capacity has objective [`INFEASIBLE`].

mod delta;

pub use delta::DeltaEvaluator;

use fixedbitset::FixedBitSet;

use crate::instance::Instance;

/// Objective value reported for a capacity-infeasible state.
///
/// Far below any reachable objective, yet leaves headroom so adding a
/// delta to it cannot overflow.
pub const INFEASIBLE: i64 = i64::MIN / 4;

/// One candidate selection plus its derived aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionState {
    selected: FixedBitSet,
    total_weight: i64,
    occupancy: Vec<usize>,
    objective: i64,
}

impl SolutionState {
    /// The empty selection: weight 0, value 0.
    pub fn empty(instance: &Instance) -> Self {
        Self {
            selected: FixedBitSet::with_capacity(instance.item_count()),
            total_weight: 0,
            occupancy: vec![0; instance.group_count()],
            objective: 0,
        }
    }

    /// Builds a state selecting exactly `items`, with aggregates computed
    /// from scratch. The result may be capacity-infeasible.
    pub fn from_items(instance: &Instance, items: impl IntoIterator<Item = usize>) -> Self {
        let mut state = Self::empty(instance);
        for item in items {
            state.selected.insert(item);
        }
        DeltaEvaluator::new(instance).full_evaluate(&mut state);
        state
    }

    #[inline]
    pub fn is_selected(&self, item: usize) -> bool {
        self.selected.contains(item)
    }

    /// Selected item indices in ascending order.
    pub fn selected_items(&self) -> Vec<usize> {
        self.selected.ones().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.count_ones(..)
    }

    #[inline]
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    #[inline]
    pub fn occupancy(&self, group: usize) -> usize {
        self.occupancy[group]
    }

    pub fn occupancies(&self) -> &[usize] {
        &self.occupancy
    }

    /// Current objective value, or [`INFEASIBLE`].
    #[inline]
    pub fn objective(&self) -> i64 {
        self.objective
    }

    #[inline]
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        self.total_weight <= instance.capacity()
    }

    /// Flips the membership bit of `item` without touching the aggregates.
    ///
    /// Used by perturbation, which ignores feasibility while flipping. The
    /// aggregates are stale until [`DeltaEvaluator::full_evaluate`] runs.
    pub fn toggle_unchecked(&mut self, item: usize) {
        self.selected.toggle(item);
    }
}
