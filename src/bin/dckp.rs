//! command-line entry point for the DCKP solver.

use std::process::ExitCode;

use clap::Parser;

use dckp_solver::cli::{Cli, Commands};
use dckp_solver::driver;
use dckp_solver::record::{write_csv, write_solution_dump};

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = cli.driver_config();

    match cli.command {
        Commands::Single { path, csv, dump } => {
            println!("reading instance: {}...", path.display());
            let result = driver::single(&path, &cfg)?;
            for record in &result.records {
                println!(
                    "{}\tprofit={}\tweight={}\tfeasible={}",
                    record.method, record.profit, record.weight, record.feasible
                );
            }
            if let Some(csv_path) = csv {
                write_csv(&result.records, &csv_path)?;
                println!("wrote results to {}", csv_path.display());
            }
            if let Some(dump_dir) = dump {
                std::fs::create_dir_all(&dump_dir)?;
                for solution in &result.solutions {
                    let file_name = format!("{}.sol", solution.method_name());
                    write_solution_dump(solution, dump_dir.join(file_name))?;
                }
                println!("dumped {} solutions to {}", result.solutions.len(), dump_dir.display());
            }
        }
        Commands::Batch { dir, csv } => {
            let records = driver::batch(&dir, &cfg);
            write_csv(&records, &csv)?;
            println!("wrote {} records to {}", records.len(), csv.display());
        }
        Commands::BatchEtapa1 { dir, csv } => {
            let records = driver::batch_etapa1(&dir, &cfg);
            write_csv(&records, &csv)?;
            println!("wrote {} records to {}", records.len(), csv.display());
        }
        Commands::BatchEtapa2 { dir, csv } => {
            let records = driver::batch_etapa2(&dir, &cfg);
            write_csv(&records, &csv)?;
            println!("wrote {} records to {}", records.len(), csv.display());
        }
    }
    Ok(())
}

pub fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
