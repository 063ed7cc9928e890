//! experiment driver: feeds instances through the heuristic stack and
//! produces one [`ResultRecord`] per (instance, method) pair.
//!
//! the driver never aborts a batch because a single instance failed to
//! load; it logs the failure and continues with the next file. a
//! `single` run surfaces the load failure to its caller instead, since
//! there is no "next instance" to fall back to.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::construct::{
    grasp::{GraspConstructor, DEFAULT_ALPHA, DEFAULT_ITERATIONS, DEFAULT_SEED},
    greedy,
};
use crate::error::DckpError;
use crate::instance::Instance;
use crate::local_search::{hill_climbing, vnd};
use crate::record::ResultRecord;
use crate::solution::Solution;

/// tunable knobs for a driver run, mirroring the GRASP and local-search
/// parameters exposed by the CLI.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    /// GRASP restarts.
    pub grasp_iterations: usize,
    /// GRASP RCL threshold.
    pub grasp_alpha: f64,
    /// GRASP Mersenne-Twister seed.
    pub grasp_seed: u32,
    /// cap on local-search iterations (hill climbing and VND alike).
    pub max_ls_iterations: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            grasp_iterations: DEFAULT_ITERATIONS,
            grasp_alpha: DEFAULT_ALPHA,
            grasp_seed: DEFAULT_SEED,
            max_ls_iterations: 10_000,
        }
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// recursively collects instance file paths under `dir`: every regular
/// file whose name does not start with `.` and whose path does not
/// contain `.csv`.
fn walk_instances(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            if path.to_string_lossy().contains(".csv") {
                continue;
            }
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

fn run_constructive(inst: &Instance, name: &str, cfg: &DriverConfig) -> (Vec<ResultRecord>, Vec<Solution>, Solution) {
    let mut records = Vec::new();
    let mut solutions = Vec::new();
    for sol in greedy::construct_all(inst) {
        records.push(ResultRecord::from_solution(name, &sol));
        solutions.push(sol);
    }

    let mut grasp = GraspConstructor::new(cfg.grasp_iterations, cfg.grasp_alpha, cfg.grasp_seed);
    let (grasp_sol, _report) = grasp.construct(inst);
    records.push(ResultRecord::from_solution(name, &grasp_sol));
    solutions.push(grasp_sol.clone());

    (records, solutions, grasp_sol)
}

/// outcome of [`single`]: one [`ResultRecord`] per method invocation,
/// paired position-for-position with the [`Solution`] it summarises (so
/// callers that need the actual selected-item set, e.g. the CLI's
/// `--dump`, don't have to re-run anything).
#[derive(Debug)]
pub struct SingleRun {
    /// tabular records, in method-invocation order.
    pub records: Vec<ResultRecord>,
    /// the solution backing each record, same order as `records`.
    pub solutions: Vec<Solution>,
}

/// loads one instance and runs all four greedy strategies plus GRASP
/// with defaults, then hill climbing and VND seeded by the GRASP
/// solution. returns one record per method invocation, or the load
/// error if the file could not be parsed.
pub fn single(path: &Path, cfg: &DriverConfig) -> Result<SingleRun, DckpError> {
    let inst = Instance::from_file(path)?;
    let name = basename(path);

    let (mut records, mut solutions, grasp_sol) = run_constructive(&inst, &name, cfg);

    let hc_sol = hill_climbing::run(&inst, grasp_sol.clone(), cfg.max_ls_iterations);
    records.push(ResultRecord::from_solution(&name, &hc_sol));
    solutions.push(hc_sol);

    let (vnd_sol, _vnd_report) = vnd::run(&inst, grasp_sol, cfg.max_ls_iterations);
    records.push(ResultRecord::from_solution(&name, &vnd_sol));
    solutions.push(vnd_sol);

    Ok(SingleRun { records, solutions })
}

/// recursively walks `dir` and runs the constructive layer only (all
/// four greedy strategies plus GRASP) on every instance found. a
/// per-instance load failure is logged and the instance is skipped.
pub fn batch_etapa1(dir: &Path, cfg: &DriverConfig) -> Vec<ResultRecord> {
    let mut records = Vec::new();
    let files = match walk_instances(dir) {
        Ok(files) => files,
        Err(err) => {
            warn!("failed to walk directory {}: {err}", dir.display());
            return records;
        }
    };
    for path in files {
        let name = basename(&path);
        match Instance::from_file(&path) {
            Ok(inst) => {
                let (instance_records, _solutions, _grasp_sol) = run_constructive(&inst, &name, cfg);
                info!("{name}: ran constructive layer ({} records)", instance_records.len());
                records.extend(instance_records);
            }
            Err(err) => warn!("skipping {}: {err}", path.display()),
        }
    }
    records
}

/// recursively walks `dir` and runs GRASP, then hill climbing and VND,
/// both seeded by the SAME GRASP solution (they do not chain). a
/// per-instance load failure is logged and the instance is skipped.
pub fn batch_etapa2(dir: &Path, cfg: &DriverConfig) -> Vec<ResultRecord> {
    let mut records = Vec::new();
    let files = match walk_instances(dir) {
        Ok(files) => files,
        Err(err) => {
            warn!("failed to walk directory {}: {err}", dir.display());
            return records;
        }
    };
    for path in files {
        let name = basename(&path);
        match Instance::from_file(&path) {
            Ok(inst) => {
                let mut grasp =
                    GraspConstructor::new(cfg.grasp_iterations, cfg.grasp_alpha, cfg.grasp_seed);
                let (grasp_sol, _report) = grasp.construct(&inst);
                records.push(ResultRecord::from_solution(&name, &grasp_sol));

                let hc_sol = hill_climbing::run(&inst, grasp_sol.clone(), cfg.max_ls_iterations);
                records.push(ResultRecord::from_solution(&name, &hc_sol));

                let (vnd_sol, _vnd_report) = vnd::run(&inst, grasp_sol, cfg.max_ls_iterations);
                records.push(ResultRecord::from_solution(&name, &vnd_sol));

                info!("{name}: ran GRASP + HC + VND");
            }
            Err(err) => warn!("skipping {}: {err}", path.display()),
        }
    }
    records
}

/// recursively walks `dir` and runs the combined constructive layer plus
/// both local searches (equivalent to running [`single`] over every
/// instance found, but never aborting the walk on a load failure).
pub fn batch(dir: &Path, cfg: &DriverConfig) -> Vec<ResultRecord> {
    let mut records = Vec::new();
    let files = match walk_instances(dir) {
        Ok(files) => files,
        Err(err) => {
            warn!("failed to walk directory {}: {err}", dir.display());
            return records;
        }
    };
    for path in files {
        match single(&path, cfg) {
            Ok(run) => {
                info!("{}: ran full stack ({} records)", basename(&path), run.records.len());
                records.extend(run.records);
            }
            Err(err) => warn!("skipping {}: {err}", path.display()),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_single_runs_all_methods() {
        let dir = std::env::temp_dir().join(format!("dckp_driver_single_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = write_fixture(&dir, "tiny.txt", "3 5 1\n4 3 3\n3 2 2\n2 3\n");

        let cfg = DriverConfig {
            grasp_iterations: 5,
            ..Default::default()
        };
        let run = single(&path, &cfg).unwrap();
        // 4 greedy + 1 grasp + 1 hc + 1 vnd
        assert_eq!(run.records.len(), 7);
        assert_eq!(run.solutions.len(), 7);
        assert!(run.records.iter().any(|r| r.method == "HillClimbing"));
        assert!(run.records.iter().any(|r| r.method == "VND"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_single_reports_load_failure() {
        let dir = std::env::temp_dir().join(format!("dckp_driver_fail_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = write_fixture(&dir, "bad.txt", "0 5 0\n");
        let err = single(&path, &DriverConfig::default()).unwrap_err();
        assert!(matches!(err, DckpError::InvalidDimensions { .. }));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_batch_skips_bad_instance_and_continues() {
        let dir = std::env::temp_dir().join(format!("dckp_driver_batch_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        write_fixture(&dir, "good.txt", "3 5 1\n4 3 3\n3 2 2\n2 3\n");
        write_fixture(&dir, "bad.txt", "0 5 0\n");
        write_fixture(&dir, ".hidden", "3 5 0\n1 1 1\n1 1 1\n");
        write_fixture(&dir, "results.csv", "Instance,Method\n");

        let cfg = DriverConfig {
            grasp_iterations: 5,
            ..Default::default()
        };
        let records = batch(&dir, &cfg);
        // only good.txt should have produced records
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.instance == "good.txt"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_batch_etapa2_runs_hc_and_vnd_from_same_grasp_seed() {
        let dir = std::env::temp_dir().join(format!("dckp_driver_etapa2_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        write_fixture(&dir, "tiny.txt", "3 5 1\n4 3 3\n3 2 2\n2 3\n");

        let cfg = DriverConfig {
            grasp_iterations: 5,
            ..Default::default()
        };
        let records = batch_etapa2(&dir, &cfg);
        assert_eq!(records.len(), 3); // grasp + hc + vnd
        std::fs::remove_dir_all(&dir).ok();
    }
}
