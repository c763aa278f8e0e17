//! CSV file discovery and loading for storm-impact.
//!
//! Reads one yearly StormEvents detail file into a [`RawTable`]. Load
//! failures are logged and mapped to `None` so a bad or missing year never
//! aborts a run.

use std::path::{Path, PathBuf};

use storm_core::error::{Result, StormError};
use storm_core::models::FILE_PREFIX;
use tracing::{debug, warn};

/// One yearly table exactly as read from disk: header row plus data rows in
/// file order.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub path: PathBuf,
    pub headers: csv::StringRecord,
    pub rows: Vec<csv::StringRecord>,
}

/// Find all StormEvents CSV files directly under `data_dir`, sorted by path.
pub fn find_storm_files(data_dir: &Path) -> Vec<PathBuf> {
    if !data_dir.exists() {
        warn!("Data path does not exist: {}", data_dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_string_lossy().starts_with(FILE_PREFIX)
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "csv")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Parse one CSV file into a [`RawTable`].
///
/// Any failure (missing file, unreadable bytes, malformed CSV) is logged
/// with the path and cause and mapped to `None`; errors never propagate
/// past this boundary.
pub fn load_table(path: &Path) -> Option<RawTable> {
    match read_table(path) {
        Ok(table) => {
            debug!("Loaded {} rows from {}", table.rows.len(), path.display());
            Some(table)
        }
        Err(err) => {
            warn!("Error loading CSV file {}: {}", path.display(), err);
            None
        }
    }
}

fn read_table(path: &Path) -> Result<RawTable> {
    let file = std::fs::File::open(path).map_err(|source| StormError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(std::io::BufReader::new(file));
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }

    Ok(RawTable {
        path: path.to_path_buf(),
        headers,
        rows,
    })
}
