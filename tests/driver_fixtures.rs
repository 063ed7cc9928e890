//! exercises instance loading and the experiment driver against on-disk
//! fixture files, the way a `single`/`batch` CLI invocation would.

use std::path::PathBuf;

use dckp_solver::driver::{self, DriverConfig};
use dckp_solver::instance::Instance;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_capacity_tight_fixture_from_disk() {
    let inst = Instance::from_file(fixture("capacity_tight.txt")).unwrap();
    assert_eq!(inst.n_items(), 3);
    assert_eq!(inst.capacity(), 5);
    assert!(inst.has_conflict(1, 2));
}

#[test]
fn single_mode_runs_full_stack_on_fixture() {
    let cfg = DriverConfig {
        grasp_iterations: 10,
        ..Default::default()
    };
    let run = driver::single(&fixture("conflict_blocks_greedy.txt"), &cfg).unwrap();
    assert_eq!(run.records.len(), 7);
    let best_profit = run.records.iter().map(|r| r.profit).max().unwrap();
    assert_eq!(best_profit, 18);
    assert!(run.records.iter().all(|r| r.feasible));
}

#[test]
fn batch_etapa1_walks_fixtures_directory() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let cfg = DriverConfig {
        grasp_iterations: 5,
        ..Default::default()
    };
    let records = driver::batch_etapa1(&dir, &cfg);
    // two fixtures x (4 greedy + 1 grasp) = 10 records
    assert_eq!(records.len(), 10);
    assert!(records.iter().any(|r| r.instance == "capacity_tight.txt"));
    assert!(records.iter().any(|r| r.instance == "conflict_blocks_greedy.txt"));
}
