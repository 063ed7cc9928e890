//! command-line surface for the `dckp` binary.
//!
//! opaque to the core (the core only knows about [`crate::driver`] and
//! its [`crate::driver::DriverConfig`]): this module exists purely to
//! turn process arguments into a `Commands` value and a `DriverConfig`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::construct::grasp::{DEFAULT_ALPHA, DEFAULT_ITERATIONS, DEFAULT_SEED};
use crate::driver::DriverConfig;

/// heuristic solver for the Disjunctively Constrained Knapsack Problem.
#[derive(Debug, Parser)]
#[command(name = "dckp", version, about)]
pub struct Cli {
    /// subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// GRASP restarts.
    #[arg(long, global = true, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// GRASP RCL threshold in [0, 1].
    #[arg(long, global = true, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// GRASP Mersenne-Twister seed.
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// cap on local-search iterations.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub max_ls_iterations: usize,
}

/// the four run modes described in the external interface.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// run the full stack on a single instance file.
    Single {
        /// path to the instance file.
        path: PathBuf,
        /// optional path to write the result CSV.
        csv: Option<PathBuf>,
        /// optional directory to dump solutions into, one file per method.
        #[arg(long)]
        dump: Option<PathBuf>,
    },
    /// recursively run the combined constructive + local-search stack.
    Batch {
        /// directory to walk for instance files.
        dir: PathBuf,
        /// path to write the result CSV.
        csv: PathBuf,
    },
    /// recursively run the constructive layer only.
    BatchEtapa1 {
        /// directory to walk for instance files.
        dir: PathBuf,
        /// path to write the result CSV.
        csv: PathBuf,
    },
    /// recursively run GRASP, then HC and VND from the same GRASP seed.
    BatchEtapa2 {
        /// directory to walk for instance files.
        dir: PathBuf,
        /// path to write the result CSV.
        csv: PathBuf,
    },
}

impl Cli {
    /// builds the [`DriverConfig`] implied by the global flags.
    pub fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            grasp_iterations: self.iterations,
            grasp_alpha: self.alpha,
            grasp_seed: self.seed,
            max_ls_iterations: self.max_ls_iterations,
        }
    }
}
