//! Problem data for the Knapsack Problem with Forfeit Sets (KPFS).
//!
//! An instance is a 0/1 knapsack (profits, weights, capacity) extended with
//! *forfeit sets*: groups of items that tolerate up to `limit` selected
//! members for free, each additional selected member costing `penalty`.
//!
//! Instances are immutable once built and are passed by reference to every
//! component; all membership lists are validated at construction so the
//! search code can index without further checks.
//!
//! # References
//!
//! - Cerulli, D'Ambrosio, Gentili & Raiconi (2022), "The knapsack problem
//!   with forfeit sets", *Computers & Operations Research* 151.

mod parse;

use crate::error::{KpfsError, KpfsResult};

/// A group of items with a free-occupancy limit and a per-excess penalty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForfeitSet {
    /// Number of selected members tolerated without penalty.
    pub limit: usize,
    /// Cost charged for every selected member beyond `limit`.
    pub penalty: i64,
    /// Member item indices.
    pub members: Vec<usize>,
}

impl ForfeitSet {
    pub fn new(limit: usize, penalty: i64, members: Vec<usize>) -> Self {
        Self {
            limit,
            penalty,
            members,
        }
    }
}

/// Immutable KPFS instance.
///
/// # Examples
///
/// ```
/// use u_kpfs::instance::{ForfeitSet, Instance};
///
/// let instance = Instance::new(
///     vec![10, 10, 10],
///     vec![1, 1, 1],
///     3,
///     vec![ForfeitSet::new(0, 5, vec![0, 1, 2])],
/// )
/// .unwrap();
/// assert_eq!(instance.item_count(), 3);
/// assert_eq!(instance.groups_of(1), &[0]);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    profits: Vec<i64>,
    weights: Vec<i64>,
    capacity: i64,
    sets: Vec<ForfeitSet>,
    groups_of: Vec<Vec<usize>>,
}

impl Instance {
    /// Builds and validates an instance.
    ///
    /// Fails if the profit and weight vectors differ in length, if a weight
    /// or the capacity is negative, or if a forfeit set lists an unknown or
    /// repeated item.
    pub fn new(
        profits: Vec<i64>,
        weights: Vec<i64>,
        capacity: i64,
        sets: Vec<ForfeitSet>,
    ) -> KpfsResult<Self> {
        if profits.len() != weights.len() {
            return Err(KpfsError::LengthMismatch {
                profits: profits.len(),
                weights: weights.len(),
            });
        }
        if capacity < 0 {
            return Err(KpfsError::Negative {
                what: "capacity",
                value: capacity,
            });
        }
        if let Some(&w) = weights.iter().find(|&&w| w < 0) {
            return Err(KpfsError::Negative {
                what: "item weight",
                value: w,
            });
        }

        let item_count = profits.len();
        let mut groups_of = vec![Vec::new(); item_count];
        for (g, set) in sets.iter().enumerate() {
            for &item in &set.members {
                if item >= item_count {
                    return Err(KpfsError::ItemOutOfRange {
                        group: g,
                        item,
                        item_count,
                    });
                }
                if groups_of[item].last() == Some(&g) {
                    return Err(KpfsError::DuplicateMember { group: g, item });
                }
                groups_of[item].push(g);
            }
        }

        Ok(Self {
            profits,
            weights,
            capacity,
            sets,
            groups_of,
        })
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.profits.len()
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.sets.len()
    }

    #[inline]
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    #[inline]
    pub fn profit(&self, item: usize) -> i64 {
        self.profits[item]
    }

    #[inline]
    pub fn weight(&self, item: usize) -> i64 {
        self.weights[item]
    }

    /// Indices of the forfeit sets `item` belongs to.
    #[inline]
    pub fn groups_of(&self, item: usize) -> &[usize] {
        &self.groups_of[item]
    }

    #[inline]
    pub fn group_limit(&self, group: usize) -> usize {
        self.sets[group].limit
    }

    #[inline]
    pub fn group_penalty(&self, group: usize) -> i64 {
        self.sets[group].penalty
    }

    pub fn forfeit_sets(&self) -> &[ForfeitSet] {
        &self.sets
    }

    /// Penalty charged by a group holding `occupancy` selected members.
    #[inline]
    pub fn group_cost(&self, group: usize, occupancy: usize) -> i64 {
        let set = &self.sets[group];
        occupancy.saturating_sub(set.limit) as i64 * set.penalty
    }
}
