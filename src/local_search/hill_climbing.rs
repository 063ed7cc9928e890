//! best-improvement hill climbing over the 1-1 swap neighbourhood.

use std::time::Instant;

use crate::instance::Instance;
use crate::local_search::neighborhoods::best_swap_1_1;
use crate::solution::Solution;
use crate::validator::Validator;

/// runs best-improvement hill climbing starting from `initial`, replacing
/// the current solution with its best strictly-improving 1-1 swap
/// neighbour until none exists (a local optimum) or `max_iterations` is
/// reached. strict improvement is required: equal-profit neighbours
/// never move the search.
pub fn run(inst: &Instance, initial: Solution, max_iterations: usize) -> Solution {
    let t_start = Instant::now();
    let validator = Validator::new(inst);

    let mut current = initial;
    let mut iterations = 0;
    while iterations < max_iterations {
        match best_swap_1_1(inst, &current) {
            Some(better) => current = better,
            None => break,
        }
        iterations += 1;
    }

    validator.validate(&mut current);
    current.set_method_name("HillClimbing");
    current.set_computation_time(t_start.elapsed().as_secs_f64());
    current
}
