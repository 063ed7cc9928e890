//! local-search phase: best-improvement hill climbing and Variable
//! Neighbourhood Descent (VND).

/// best-improvement hill climber over the 1-1 swap neighbourhood.
pub mod hill_climbing;

/// Variable Neighbourhood Descent over add/drop, 1-1 swap and 2-1 swap.
pub mod vnd;

mod neighborhoods;
