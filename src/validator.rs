//! independent recomputation of feasibility and metrics.
//!
//! construction and local search maintain `total_profit`/`total_weight`
//! incrementally for speed. the validator recomputes them from scratch
//! and is the only authority on feasibility; tests and the driver must
//! call [`Validator::validate`] rather than trust cached aggregates.

use log::warn;

use crate::instance::{Instance, ItemId};
use crate::solution::Solution;

/// stateless validator bound to one instance.
pub struct Validator<'a> {
    inst: &'a Instance,
}

impl<'a> Validator<'a> {
    /// builds a validator for `inst`.
    pub fn new(inst: &'a Instance) -> Self {
        Self { inst }
    }

    /// O(1) probe: would adding an item of weight `item_weight` to a
    /// solution currently weighing `current_weight` keep it within
    /// capacity?
    pub fn check_capacity(&self, current_weight: i64, item_weight: i64) -> bool {
        current_weight + item_weight <= self.inst.capacity()
    }

    /// true iff `item` conflicts with no member of `selected`.
    /// O(|selected| * log d).
    pub fn check_conflicts<'s, I>(&self, item: ItemId, selected: I) -> bool
    where
        I: IntoIterator<Item = &'s ItemId>,
    {
        selected.into_iter().all(|&s| !self.inst.has_conflict(item, s))
    }

    /// full audit: recomputes profit and weight from scratch, checks
    /// capacity, and enumerates every unordered pair in `selected` to
    /// detect any remaining conflict. updates `solution`'s cached
    /// aggregates and feasibility flag, and returns the same boolean.
    pub fn validate(&self, solution: &mut Solution) -> bool {
        let items: Vec<ItemId> = solution.selected().iter().copied().collect();

        let mut profit = 0i64;
        let mut weight = 0i64;
        for &i in &items {
            profit += self.inst.profit(i);
            weight += self.inst.weight(i);
        }

        let capacity_ok = weight <= self.inst.capacity();

        let mut has_conflict = false;
        'pairs: for (idx, &i) in items.iter().enumerate() {
            for &j in &items[idx + 1..] {
                if self.inst.has_conflict(i, j) {
                    has_conflict = true;
                    break 'pairs;
                }
            }
        }

        let feasible = capacity_ok && !has_conflict;

        solution.set_aggregates(profit, weight);
        solution.set_feasible(feasible);

        if !feasible {
            warn!(
                "solution '{}' failed validation: capacity_ok={}, has_conflict={}",
                solution.method_name(),
                capacity_ok,
                has_conflict
            );
        }

        feasible
    }

    /// recomputes `total_profit`/`total_weight` only, leaving the
    /// feasibility flag untouched.
    pub fn recalculate_metrics(&self, solution: &mut Solution) {
        let mut profit = 0i64;
        let mut weight = 0i64;
        for &i in solution.selected() {
            profit += self.inst.profit(i);
            weight += self.inst.weight(i);
        }
        solution.set_aggregates(profit, weight);
    }
}
