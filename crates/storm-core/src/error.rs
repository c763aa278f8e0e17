use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the storm-impact crates.
#[derive(Error, Debug)]
pub enum StormError {
    /// A data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document could not be parsed.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A damage amount did not match any recognised encoding.
    #[error("Invalid damage amount: {0}")]
    DamageParse(String),

    /// A casualty count was not a non-negative integer.
    #[error("Invalid {column} count: {value}")]
    CountParse { column: String, value: String },

    /// A required column is missing from a table header.
    #[error("Column {column} not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// An error originating from the chart-rendering backend.
    #[error("Chart error: {0}")]
    Chart(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the storm-impact crates.
pub type Result<T> = std::result::Result<T, StormError>;
