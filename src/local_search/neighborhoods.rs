//! shared neighbourhood generators used by both the hill climber and VND.
//!
//! every generator follows the same best-improvement rule: among all
//! feasible neighbours that strictly exceed the current solution's
//! `total_profit`, return the first one enumerated with the maximum
//! profit (`i` ascending over `selected`, `j` ascending over the
//! complement). ties are broken by enumeration order, never by value.

use crate::instance::{Instance, ItemId};
use crate::solution::Solution;
use crate::validator::Validator;

/// tracks the best-so-far neighbour across a generator, keeping the
/// first strictly-improving candidate seen at any given profit level.
struct BestTracker<'a> {
    current_profit: i64,
    best: Option<Solution>,
    validator: &'a Validator<'a>,
}

impl<'a> BestTracker<'a> {
    fn new(current_profit: i64, validator: &'a Validator<'a>) -> Self {
        Self {
            current_profit,
            best: None,
            validator,
        }
    }

    fn consider(&mut self, mut candidate: Solution) {
        self.validator.recalculate_metrics(&mut candidate);
        if candidate.total_profit() <= self.current_profit {
            return;
        }
        let improves = match &self.best {
            None => true,
            Some(b) => candidate.total_profit() > b.total_profit(),
        };
        if improves {
            self.best = Some(candidate);
        }
    }

    fn into_best(self) -> Option<Solution> {
        self.best
    }
}

/// N1 (add/drop): ADD moves (every `j` not selected whose addition stays
/// within capacity and conflicts with nothing selected), then DROP moves
/// (removing any single selected item). Neither kind needs a second
/// selected item, so this neighbourhood is always generated.
pub(super) fn best_add_drop(inst: &Instance, sol: &Solution) -> Option<Solution> {
    let validator = Validator::new(inst);
    let mut tracker = BestTracker::new(sol.total_profit(), &validator);

    // ADD moves, j ascending.
    for j in 0..inst.n_items() {
        if sol.contains(j) {
            continue;
        }
        if validator.check_capacity(sol.total_weight(), inst.weight(j))
            && validator.check_conflicts(j, sol.selected())
        {
            let mut candidate = sol.duplicate();
            candidate.add_item(inst, j);
            tracker.consider(candidate);
        }
    }

    // DROP moves, i ascending.
    for &i in sol.selected() {
        let mut candidate = sol.duplicate();
        candidate.remove_item(inst, i);
        tracker.consider(candidate);
    }

    tracker.into_best()
}

/// N2 (1-1 swap): for every `i` in `selected` and every `j` not in
/// `selected`, remove `i` and add `j` provided the result stays within
/// capacity and `j` conflicts with nothing in `selected \ {i}`.
pub(super) fn best_swap_1_1(inst: &Instance, sol: &Solution) -> Option<Solution> {
    let validator = Validator::new(inst);
    let mut tracker = BestTracker::new(sol.total_profit(), &validator);

    for &i in sol.selected() {
        let remaining_weight = sol.total_weight() - inst.weight(i);
        for j in 0..inst.n_items() {
            if sol.contains(j) {
                continue;
            }
            if !validator.check_capacity(remaining_weight, inst.weight(j)) {
                continue;
            }
            let conflicts_after_drop = sol
                .selected()
                .iter()
                .filter(|&&s| s != i)
                .any(|&s| inst.has_conflict(j, s));
            if conflicts_after_drop {
                continue;
            }
            let mut candidate = sol.duplicate();
            candidate.remove_item(inst, i);
            candidate.add_item(inst, j);
            tracker.consider(candidate);
        }
    }

    tracker.into_best()
}

/// N3 (2-1 swap): for every unordered pair `{i1, i2}` in `selected`
/// (`i1 < i2`, ascending) and every `j` not in `selected`, remove both
/// `i1` and `i2` and add `j`, admitted only when `profits[j]` strictly
/// exceeds `profits[i1] + profits[i2]` (checked before anything else;
/// this alone guarantees the resulting neighbour's profit exceeds the
/// current one), the weight stays within capacity, and `j` conflicts
/// with nothing in `selected \ {i1, i2}`. generates nothing when fewer
/// than two items are selected.
pub(super) fn best_swap_2_1(inst: &Instance, sol: &Solution) -> Option<Solution> {
    if sol.num_items() < 2 {
        return None;
    }
    let validator = Validator::new(inst);
    let mut tracker = BestTracker::new(sol.total_profit(), &validator);

    let selected: Vec<ItemId> = sol.selected().iter().copied().collect();
    for (idx1, &i1) in selected.iter().enumerate() {
        for &i2 in &selected[idx1 + 1..] {
            let pair_profit = inst.profit(i1) + inst.profit(i2);
            let remaining_weight = sol.total_weight() - inst.weight(i1) - inst.weight(i2);
            for j in 0..inst.n_items() {
                if sol.contains(j) {
                    continue;
                }
                // admission filter, applied before anything else.
                if inst.profit(j) <= pair_profit {
                    continue;
                }
                if !validator.check_capacity(remaining_weight, inst.weight(j)) {
                    continue;
                }
                let conflicts_after_drop = sol
                    .selected()
                    .iter()
                    .filter(|&&s| s != i1 && s != i2)
                    .any(|&s| inst.has_conflict(j, s));
                if conflicts_after_drop {
                    continue;
                }
                let mut candidate = sol.duplicate();
                candidate.remove_item(inst, i1);
                candidate.remove_item(inst, i2);
                candidate.add_item(inst, j);
                tracker.consider(candidate);
            }
        }
    }

    tracker.into_best()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_2_1_requires_two_items() {
        let inst = Instance::new(10, vec![6, 6, 10, 1], vec![5, 5, 9, 1], vec![]);
        let mut sol = Solution::new("test");
        sol.add_item(&inst, 0);
        assert!(best_swap_2_1(&inst, &sol).is_none());
    }

    #[test]
    fn test_add_drop_add_move() {
        let inst = Instance::new(10, vec![4, 3], vec![3, 2], vec![]);
        let sol = Solution::new("test");
        let neighbour = best_add_drop(&inst, &sol).expect("an improving ADD move must exist");
        assert!(neighbour.total_profit() > 0);
    }

    #[test]
    fn test_swap_1_1_no_move_on_local_optimum() {
        // n=3, capacity=10, profits [10,9,8], weights [5,5,5], conflict (0,1)
        let inst = Instance::new(10, vec![10, 9, 8], vec![5, 5, 5], vec![(0, 1)]);
        let mut sol = Solution::new("test");
        sol.add_item(&inst, 0);
        sol.add_item(&inst, 2);
        assert!(best_swap_1_1(&inst, &sol).is_none());
    }
}
