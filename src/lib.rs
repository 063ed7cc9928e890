//! heuristic solver for the Disjunctively Constrained Knapsack Problem
//! (DCKP): select a subset of items maximising total profit subject to a
//! single capacity constraint and a set of pairwise disjunction
//! (conflict) constraints.
//!
//! the stack is three layers: constructive heuristics
//! ([`construct::greedy`], [`construct::grasp`]) build an initial
//! feasible solution, local search ([`local_search::hill_climbing`],
//! [`local_search::vnd`]) improves it, and [`driver`] orchestrates both
//! over instances read from disk.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

/// command-line argument parsing (thin; opaque to the core).
pub mod cli;

/// constructive heuristics: greedy and GRASP.
pub mod construct;

/// experiment driver: single/batch run modes and result recording.
pub mod driver;

/// crate-wide error type.
pub mod error;

/// immutable problem instance and conflict graph.
pub mod instance;

/// local-search phase: hill climbing and VND.
pub mod local_search;

/// result records and CSV/solution-dump export.
pub mod record;

/// mutable candidate solution with cached aggregates.
pub mod solution;

/// independent feasibility/metrics recomputation.
pub mod validator;
