//! result records and CSV export.
//!
//! `ResultRecord` is the tabular row the driver emits per
//! (instance, method) pair: `Instance,Method,Profit,Weight,NumItems,Time,
//! Feasible`, elapsed seconds formatted with six fractional digits and
//! feasibility written as `Yes`/`No`.

use std::path::Path;

use serde::Serialize;

use crate::error::DckpError;
use crate::solution::Solution;

/// one row of the result table.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "Instance")]
    pub instance: String,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "Profit")]
    pub profit: i64,
    #[serde(rename = "Weight")]
    pub weight: i64,
    #[serde(rename = "NumItems")]
    pub num_items: usize,
    #[serde(rename = "Time", serialize_with = "serialize_six_decimals")]
    pub time: f64,
    #[serde(rename = "Feasible", serialize_with = "serialize_yes_no")]
    pub feasible: bool,
}

fn serialize_six_decimals<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{value:.6}"))
}

fn serialize_yes_no<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

impl ResultRecord {
    /// builds a record from an instance basename and a produced solution.
    pub fn from_solution(instance_name: impl Into<String>, solution: &Solution) -> Self {
        Self {
            instance: instance_name.into(),
            method: solution.method_name().to_string(),
            profit: solution.total_profit(),
            weight: solution.total_weight(),
            num_items: solution.num_items(),
            time: solution.computation_time(),
            feasible: solution.is_feasible(),
        }
    }
}

/// writes `records` to `path` as CSV with the header row
/// `Instance,Method,Profit,Weight,NumItems,Time,Feasible`.
pub fn write_csv<P: AsRef<Path>>(records: &[ResultRecord], path: P) -> Result<(), DckpError> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(DckpError::CsvWrite)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|source| DckpError::OutputIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// writes a solution dump: `total_profit total_weight num_items` on the
/// first line, then the (1-based) selected item indices on the second.
pub fn write_solution_dump<P: AsRef<Path>>(solution: &Solution, path: P) -> Result<(), DckpError> {
    let path = path.as_ref();
    let mut body = format!(
        "{} {} {}\n",
        solution.total_profit(),
        solution.total_weight(),
        solution.num_items()
    );
    let items: Vec<String> = solution.selected().iter().map(|i| (i + 1).to_string()).collect();
    body.push_str(&items.join(" "));
    body.push('\n');
    std::fs::write(path, body).map_err(|source| DckpError::OutputIo {
        path: path.to_path_buf(),
        source,
    })
}
