//! deterministic greedy construction.
//!
//! each [`GreedyStrategy`] computes a real-valued score per item; items
//! are visited in descending score (ties broken by ascending item index
//! for determinism) and added whenever they pass both the capacity and
//! conflict feasibility filters.

use std::time::Instant;

use ordered_float::OrderedFloat;

use crate::instance::{Instance, ItemId};
use crate::solution::Solution;
use crate::validator::Validator;

/// one of the four deterministic greedy orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreedyStrategy {
    /// highest profit first.
    MaxProfit,
    /// lowest weight first.
    MinWeight,
    /// highest profit-to-weight ratio first.
    MaxProfitWeight,
    /// lowest conflict degree first.
    MinConflicts,
}

impl GreedyStrategy {
    /// all four strategies, in the order [`constructAll`] runs them.
    pub const ALL: [GreedyStrategy; 4] = [
        GreedyStrategy::MaxProfit,
        GreedyStrategy::MinWeight,
        GreedyStrategy::MaxProfitWeight,
        GreedyStrategy::MinConflicts,
    ];

    /// short identifier used to build `method_name` (`"Greedy_<name>"`).
    pub fn label(&self) -> &'static str {
        match self {
            GreedyStrategy::MaxProfit => "MAX_PROFIT",
            GreedyStrategy::MinWeight => "MIN_WEIGHT",
            GreedyStrategy::MaxProfitWeight => "MAX_PROFIT_WEIGHT",
            GreedyStrategy::MinConflicts => "MIN_CONFLICTS",
        }
    }

    fn score(&self, inst: &Instance, i: ItemId) -> f64 {
        match self {
            GreedyStrategy::MaxProfit => inst.profit(i) as f64,
            GreedyStrategy::MinWeight => -(inst.weight(i) as f64),
            GreedyStrategy::MaxProfitWeight => {
                let w = inst.weight(i);
                if w == 0 {
                    1000.0 * inst.profit(i) as f64
                } else {
                    inst.profit(i) as f64 / w as f64
                }
            }
            GreedyStrategy::MinConflicts => -(inst.conflict_degree(i) as f64),
        }
    }
}

/// runs a single greedy pass with strategy `strategy`.
pub fn construct(inst: &Instance, strategy: GreedyStrategy) -> Solution {
    let t_start = Instant::now();
    let validator = Validator::new(inst);

    let mut order: Vec<ItemId> = (0..inst.n_items()).collect();
    order.sort_by_key(|&i| (std::cmp::Reverse(OrderedFloat(strategy.score(inst, i))), i));

    let mut sol = Solution::new(format!("Greedy_{}", strategy.label()));
    for i in order {
        if validator.check_capacity(sol.total_weight(), inst.weight(i))
            && validator.check_conflicts(i, sol.selected())
        {
            sol.add_item(inst, i);
        }
    }

    validator.validate(&mut sol);
    sol.set_computation_time(t_start.elapsed().as_secs_f64());
    sol
}

/// runs all four strategies and returns their solutions in
/// [`GreedyStrategy::ALL`] order. callers typically select the
/// max-profit solution among the four.
pub fn construct_all(inst: &Instance) -> Vec<Solution> {
    GreedyStrategy::ALL
        .iter()
        .map(|&strategy| construct(inst, strategy))
        .collect()
}
