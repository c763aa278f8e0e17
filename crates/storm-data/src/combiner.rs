//! Multi-year combination of storm tables.
//!
//! Walks the year range newest-first, loads each expected file, normalizes
//! the damage columns, tags every row with its source year and concatenates
//! the survivors into one combined table.

use std::ops::RangeInclusive;
use std::path::Path;

use storm_core::damage::parse_damage;
use storm_core::error::{Result, StormError};
use storm_core::models::{storm_file_name, Metric, StormRecord};
use tracing::{debug, info, warn};

use crate::loader::{load_table, RawTable};
use crate::schema::ColumnCatalog;

/// Load and normalize every year in `range`, newest first.
///
/// A year whose file is missing, malformed or lacking the category column
/// contributes zero records; the run continues with whatever loaded.
pub fn combine_years(data_dir: &Path, range: RangeInclusive<i32>) -> Vec<StormRecord> {
    let total_years = (range.end() - range.start() + 1).max(0);
    let mut combined: Vec<StormRecord> = Vec::new();
    let mut years_loaded = 0u32;

    for year in range.rev() {
        let path = data_dir.join(storm_file_name(year));
        let Some(table) = load_table(&path) else {
            continue;
        };

        match ingest_table(&table, year) {
            Ok(mut records) => {
                years_loaded += 1;
                combined.append(&mut records);
            }
            Err(err) => warn!("Skipping {}: {}", path.display(), err),
        }
    }

    info!(
        "Combined {} records from {} of {} candidate years",
        combined.len(),
        years_loaded,
        total_years
    );

    combined
}

/// Single-year ingest: the one-year slice of [`combine_years`].
pub fn ingest_year(data_dir: &Path, year: i32) -> Vec<StormRecord> {
    combine_years(data_dir, year..=year)
}

/// Map a loaded table's rows to [`StormRecord`]s tagged with `year`.
///
/// Rows with an unparseable damage amount or casualty count are skipped
/// and logged; damage columns absent from this year's header leave the
/// fields `None` for the whole year.
fn ingest_table(table: &RawTable, year: i32) -> Result<Vec<StormRecord>> {
    let catalog = ColumnCatalog::resolve(&table.headers, &table.path)?;

    let mut records = Vec::with_capacity(table.rows.len());
    let mut rows_skipped = 0u64;

    for (row_idx, row) in table.rows.iter().enumerate() {
        match map_row(row, &catalog, year) {
            Ok(record) => records.push(record),
            Err(err) => {
                rows_skipped += 1;
                // Header is line 1, so data row i sits on line i + 2.
                warn!(
                    "Skipping row at line {} of {}: {}",
                    row_idx + 2,
                    table.path.display(),
                    err
                );
            }
        }
    }

    debug!(
        "File {}: {} rows read, {} skipped, {} ingested",
        table.path.display(),
        table.rows.len(),
        rows_skipped,
        records.len()
    );

    Ok(records)
}

fn map_row(row: &csv::StringRecord, catalog: &ColumnCatalog, year: i32) -> Result<StormRecord> {
    let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));

    Ok(StormRecord {
        event_type: row.get(catalog.event_type).unwrap_or("").to_string(),
        injuries_direct: parse_count(cell(catalog.injuries_direct), Metric::InjuriesDirect)?,
        deaths_direct: parse_count(cell(catalog.deaths_direct), Metric::DeathsDirect)?,
        damage_property: parse_damage_cell(cell(catalog.damage_property))?,
        damage_crops: parse_damage_cell(cell(catalog.damage_crops))?,
        year,
    })
}

/// An absent column or empty cell counts as zero casualties.
fn parse_count(raw: Option<&str>, metric: Metric) -> Result<u64> {
    let Some(text) = raw else {
        return Ok(0);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u64>()
        .map_err(|_| StormError::CountParse {
            column: metric.column().to_string(),
            value: text.to_string(),
        })
}

fn parse_damage_cell(raw: Option<&str>) -> Result<Option<f64>> {
    match raw {
        Some(text) => parse_damage(text),
        None => Ok(None),
    }
}
