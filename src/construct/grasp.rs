//! GRASP: Greedy Randomised Adaptive Search Procedure.
//!
//! each iteration builds a restricted candidate list (RCL) under an
//! adaptive threshold and draws one item uniformly from it, repeating
//! until the RCL empties out. the best feasible solution over
//! `iterations` restarts is retained.

use std::time::Instant;

use rand_core::RngCore;
use rand_mt::Mt19937GenRand32;

use crate::instance::{Instance, ItemId};
use crate::solution::Solution;
use crate::validator::Validator;

/// default number of GRASP restarts.
pub const DEFAULT_ITERATIONS: usize = 100;
/// default RCL threshold: 0 = pure greedy, 1 = uniform random.
pub const DEFAULT_ALPHA: f64 = 0.3;
/// default Mersenne-Twister seed, chosen for reproducible test fixtures.
pub const DEFAULT_SEED: u32 = 42;

/// diagnostics accumulated across a multi-start GRASP run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraspReport {
    /// sum of the profit of every per-iteration solution constructed
    /// (including ones discarded because they were not the best).
    pub profit_sum: i64,
    /// number of iterations whose solution strictly improved on the
    /// best-so-far at the time it was built.
    pub improved_count: usize,
}

/// adaptive randomised greedy constructor, parametrised by `alpha` and
/// seeded with a 32-bit Mersenne-Twister engine for reproducibility.
#[derive(Debug)]
pub struct GraspConstructor {
    iterations: usize,
    alpha: f64,
    rng: Mt19937GenRand32,
}

impl GraspConstructor {
    /// builds a constructor with the given parameters.
    pub fn new(iterations: usize, alpha: f64, seed: u32) -> Self {
        Self {
            iterations,
            alpha,
            rng: Mt19937GenRand32::new(seed),
        }
    }

    /// builds a constructor with the documented defaults
    /// (100 iterations, alpha = 0.3, seed = 42).
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_ITERATIONS, DEFAULT_ALPHA, DEFAULT_SEED)
    }

    /// re-seeds the random engine; any subsequent construction is
    /// deterministic from that seed onwards.
    pub fn set_seed(&mut self, seed: u32) {
        self.rng = Mt19937GenRand32::new(seed);
    }

    /// method name carried by produced solutions:
    /// `"GRASP_<iterations>_<alpha>"`.
    fn method_name(&self) -> String {
        format!("GRASP_{}_{}", self.iterations, self.alpha)
    }

    /// uniform draw in `[0, bound)` from the Mersenne-Twister engine.
    fn uniform_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.rng.next_u32() as u64 % bound as u64) as usize
    }

    /// one randomised-greedy construction: repeatedly build the RCL and
    /// draw one item from it until no feasible candidate remains.
    fn construct_once(&mut self, inst: &Instance, validator: &Validator) -> Solution {
        let mut sol = Solution::new(self.method_name());

        loop {
            let candidates: Vec<ItemId> = (0..inst.n_items())
                .filter(|&i| {
                    !sol.contains(i)
                        && validator.check_capacity(sol.total_weight(), inst.weight(i))
                        && validator.check_conflicts(i, sol.selected())
                })
                .collect();

            if candidates.is_empty() {
                break;
            }

            let scores: Vec<f64> = candidates
                .iter()
                .map(|&i| {
                    let base = if inst.weight(i) > 0 {
                        inst.profit(i) as f64 / inst.weight(i) as f64
                    } else {
                        1000.0 * inst.profit(i) as f64
                    };
                    // conflicts with currently-selected items is always 0
                    // here since `candidates` is already conflict-filtered.
                    let cf_selected = sol
                        .selected()
                        .iter()
                        .filter(|&&s| inst.has_conflict(i, s))
                        .count();
                    let cf = cf_selected + inst.conflict_degree(i);
                    base * (1.0 / (1.0 + 0.1 * cf as f64))
                })
                .collect();

            let s_max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let s_min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
            let threshold = s_max - self.alpha * (s_max - s_min);

            let rcl: Vec<ItemId> = candidates
                .iter()
                .zip(scores.iter())
                .filter(|&(_, &score)| score >= threshold)
                .map(|(&i, _)| i)
                .collect();

            let pick = self.uniform_index(rcl.len());
            sol.add_item(inst, rcl[pick]);
        }

        validator.validate(&mut sol);
        sol
    }

    /// runs `iterations` independent randomised-greedy constructions and
    /// retains the strictly-best feasible solution (ties keep the
    /// first). returns the best solution and diagnostics about the
    /// whole run.
    pub fn construct(&mut self, inst: &Instance) -> (Solution, GraspReport) {
        let t_start = Instant::now();
        let validator = Validator::new(inst);

        let mut report = GraspReport::default();
        let mut best: Option<Solution> = None;

        for _ in 0..self.iterations {
            let candidate = self.construct_once(inst, &validator);
            report.profit_sum += candidate.total_profit();

            let improves = match &best {
                None => true,
                Some(b) => candidate.is_feasible() && candidate.total_profit() > b.total_profit(),
            };
            if improves {
                report.improved_count += 1;
                best = Some(candidate);
            }
        }

        let mut best = best.unwrap_or_else(|| Solution::new(self.method_name()));
        best.set_computation_time(t_start.elapsed().as_secs_f64());
        (best, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity_tight() -> Instance {
        Instance::new(5, vec![4, 3, 3], vec![3, 2, 2], vec![])
    }

    #[test]
    fn test_grasp_produces_feasible_solution() {
        let inst = capacity_tight();
        let mut grasp = GraspConstructor::new(20, 0.3, 42);
        let (sol, _report) = grasp.construct(&inst);
        assert!(sol.is_feasible());
        assert!(sol.total_weight() <= inst.capacity());
    }

    #[test]
    fn test_grasp_reproducible_with_same_seed() {
        let inst = capacity_tight();
        let mut g1 = GraspConstructor::new(50, 0.3, 42);
        let (s1, _) = g1.construct(&inst);
        let mut g2 = GraspConstructor::new(50, 0.3, 42);
        let (s2, _) = g2.construct(&inst);
        assert_eq!(s1.selected(), s2.selected());
        assert_eq!(s1.total_profit(), s2.total_profit());
    }

    #[test]
    fn test_set_seed_resets_reproducibility() {
        let inst = capacity_tight();
        let mut grasp = GraspConstructor::new(30, 0.3, 1);
        let (first, _) = grasp.construct(&inst);
        grasp.set_seed(1);
        let (second, _) = grasp.construct(&inst);
        assert_eq!(first.selected(), second.selected());
    }

    #[test]
    fn test_alpha_zero_is_pure_greedy_like() {
        // alpha=0 -> RCL only contains the max-score candidates, so the
        // final profit should match (or beat, over restarts) a pure
        // greedy max-profit-weight construction on this easy instance.
        let inst = capacity_tight();
        let mut grasp = GraspConstructor::new(10, 0.0, 42);
        let (sol, _) = grasp.construct(&inst);
        assert!(sol.total_profit() >= 6);
    }

    #[test]
    fn test_method_name_format() {
        let inst = capacity_tight();
        let mut grasp = GraspConstructor::new(5, 0.3, 42);
        let (sol, _) = grasp.construct(&inst);
        assert_eq!(sol.method_name(), "GRASP_5_0.3");
    }

    #[test]
    fn test_trivial_singleton() {
        let inst = Instance::new(10, vec![5], vec![3], vec![]);
        let mut grasp = GraspConstructor::with_defaults();
        let (sol, _) = grasp.construct(&inst);
        assert_eq!(sol.total_profit(), 5);
        assert_eq!(sol.total_weight(), 3);
        assert!(sol.is_feasible());
    }
}
