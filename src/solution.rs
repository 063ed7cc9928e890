//! a selected set of items plus its cached aggregates.

use std::collections::BTreeSet;

use crate::instance::{ItemId, Instance};

/// a candidate solution: a set of selected items and the aggregates
/// maintained incrementally as items are added or removed.
///
/// `selected` is an ordered integer set (`BTreeSet`) so that membership
/// is O(log n) and iteration is always ascending. solutions compare by
/// `total_profit` only, never by the identity of `selected`, but the
/// ascending order keeps everything else (printing, dumping, auditing)
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    selected: BTreeSet<ItemId>,
    total_profit: i64,
    total_weight: i64,
    is_feasible: bool,
    computation_time: f64,
    method_name: String,
}

impl Solution {
    /// an empty solution produced by `method_name`.
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            selected: BTreeSet::new(),
            total_profit: 0,
            total_weight: 0,
            is_feasible: true,
            computation_time: 0.0,
            method_name: method_name.into(),
        }
    }

    /// items currently selected, in ascending order.
    pub fn selected(&self) -> &BTreeSet<ItemId> {
        &self.selected
    }

    /// number of selected items.
    pub fn num_items(&self) -> usize {
        self.selected.len()
    }

    /// true iff `i` is currently selected.
    pub fn contains(&self, i: ItemId) -> bool {
        self.selected.contains(&i)
    }

    /// cached total profit of the selected items.
    pub fn total_profit(&self) -> i64 {
        self.total_profit
    }

    /// cached total weight of the selected items.
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// cached feasibility flag. only authoritative after a call to
    /// [`crate::validator::Validator::validate`]; constructors and
    /// local search maintain it best-effort as they go.
    pub fn is_feasible(&self) -> bool {
        self.is_feasible
    }

    /// wall-clock time spent producing this solution, in seconds.
    pub fn computation_time(&self) -> f64 {
        self.computation_time
    }

    /// name of the method that produced this solution
    /// (e.g. `"Greedy_MAX_PROFIT"`, `"GRASP_100_0.3"`, `"VND"`).
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// sets the feasibility flag directly. used by
    /// [`crate::validator::Validator`] after a full audit.
    pub fn set_feasible(&mut self, feasible: bool) {
        self.is_feasible = feasible;
    }

    /// overwrites the cached aggregates directly. used by
    /// [`crate::validator::Validator::recalculate_metrics`].
    pub fn set_aggregates(&mut self, profit: i64, weight: i64) {
        self.total_profit = profit;
        self.total_weight = weight;
    }

    /// records elapsed wall-clock time.
    pub fn set_computation_time(&mut self, seconds: f64) {
        self.computation_time = seconds;
    }

    /// renames the producing method (local search reuses the
    /// constructor's solution in place and then relabels it).
    pub fn set_method_name(&mut self, name: impl Into<String>) {
        self.method_name = name.into();
    }

    /// adds item `i`, updating the cached aggregates. a no-op (aggregates
    /// untouched) if `i` is already selected.
    pub fn add_item(&mut self, inst: &Instance, i: ItemId) {
        if self.selected.insert(i) {
            self.total_profit += inst.profit(i);
            self.total_weight += inst.weight(i);
        }
    }

    /// removes item `i`, updating the cached aggregates. a no-op if `i`
    /// is not currently selected.
    pub fn remove_item(&mut self, inst: &Instance, i: ItemId) {
        if self.selected.remove(&i) {
            self.total_profit -= inst.profit(i);
            self.total_weight -= inst.weight(i);
        }
    }

    /// a deep copy used by neighbourhood generators that materialise
    /// every candidate neighbour before picking the best one.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Instance {
        Instance::new(5, vec![4, 3, 3], vec![3, 2, 2], vec![])
    }

    #[test]
    fn test_add_updates_aggregates() {
        let inst = tiny();
        let mut sol = Solution::new("test");
        sol.add_item(&inst, 0);
        assert_eq!(sol.total_profit(), 4);
        assert_eq!(sol.total_weight(), 3);
        assert_eq!(sol.num_items(), 1);
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let inst = tiny();
        let mut sol = Solution::new("test");
        sol.add_item(&inst, 0);
        sol.add_item(&inst, 0);
        assert_eq!(sol.total_profit(), 4);
        assert_eq!(sol.num_items(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let inst = tiny();
        let mut sol = Solution::new("test");
        sol.add_item(&inst, 0);
        let before = sol.clone();
        sol.remove_item(&inst, 1);
        assert_eq!(sol, before);
    }

    #[test]
    fn test_add_then_remove_is_identity() {
        let inst = tiny();
        let mut sol = Solution::new("test");
        let before = sol.clone();
        sol.add_item(&inst, 0);
        sol.remove_item(&inst, 0);
        assert_eq!(sol, before);
    }
}
