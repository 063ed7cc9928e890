//! Variable Neighbourhood Descent over three neighbourhoods of
//! increasing strength: add/drop, 1-1 swap, 2-1 swap.

use std::time::Instant;

use crate::instance::Instance;
use crate::local_search::neighborhoods::{best_add_drop, best_swap_1_1, best_swap_2_1};
use crate::solution::Solution;
use crate::validator::Validator;

/// number of neighbourhoods in the VND cycle.
const NUM_NEIGHBORHOODS: usize = 3;

/// diagnostics accumulated over a VND run.
#[derive(Debug, Clone, Copy, Default)]
pub struct VndReport {
    /// number of accepted improving moves.
    pub improvements: usize,
    /// number of scheduler ticks performed (bounded by `max_iterations`).
    pub iterations: usize,
}

fn explore(k: usize, inst: &Instance, sol: &Solution) -> Option<Solution> {
    match k {
        1 => best_add_drop(inst, sol),
        2 => best_swap_1_1(inst, sol),
        3 => best_swap_2_1(inst, sol),
        _ => unreachable!("VND neighbourhood index out of range"),
    }
}

/// runs VND starting from `initial`. the schedule explores neighbourhood
/// `k` (starting at 1); an improving move restarts the cycle at `k = 1`,
/// otherwise `k` escalates. terminates when `k` exceeds
/// [`NUM_NEIGHBORHOODS`] (all neighbourhoods clean) or `max_iterations`
/// ticks have elapsed.
pub fn run(inst: &Instance, initial: Solution, max_iterations: usize) -> (Solution, VndReport) {
    let t_start = Instant::now();
    let validator = Validator::new(inst);

    let mut current = initial;
    let mut report = VndReport::default();
    let mut k = 1usize;
    let mut t = 0usize;

    while k <= NUM_NEIGHBORHOODS && t < max_iterations {
        match explore(k, inst, &current) {
            Some(better) => {
                current = better;
                report.improvements += 1;
                k = 1;
            }
            None => {
                k += 1;
            }
        }
        t += 1;
    }
    report.iterations = t;

    validator.validate(&mut current);
    current.set_method_name("VND");
    current.set_computation_time(t_start.elapsed().as_secs_f64());
    (current, report)
}
