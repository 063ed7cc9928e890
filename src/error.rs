//! crate-wide error type.
//!
//! the core never panics across a public boundary: instance loading,
//! validation and output writing all return a `Result` built around this
//! enum rather than calling `panic!`/`unwrap`.

use std::path::PathBuf;

/// errors that can surface from the DCKP core and driver.
#[derive(Debug, thiserror::Error)]
pub enum DckpError {
    /// the instance file could not be opened or read.
    #[error("failed to read instance file {}: {source}", .path.display())]
    InstanceIo {
        /// path of the instance file
        path: PathBuf,
        /// underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// the instance file's header was missing tokens or contained
    /// non-numeric data.
    #[error("malformed instance header in {}: {reason}", .path.display())]
    MalformedHeader {
        /// path of the instance file
        path: PathBuf,
        /// human-readable explanation
        reason: String,
    },

    /// `n_items` or `capacity` was not a positive integer.
    #[error("instance {} has non-positive n_items or capacity", .path.display())]
    InvalidDimensions {
        /// path of the instance file
        path: PathBuf,
    },

    /// a result or dump file could not be written.
    #[error("failed to write output file {}: {source}", .path.display())]
    OutputIo {
        /// path of the output file
        path: PathBuf,
        /// underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// the CSV writer failed to serialize or flush a record.
    #[error("failed to write CSV record: {0}")]
    CsvWrite(#[from] csv::Error),
}
