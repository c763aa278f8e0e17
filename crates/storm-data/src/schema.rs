//! Column negotiation for yearly storm tables.
//!
//! Header layouts drift across years. The catalog resolves every expected
//! column to its index once per loaded table instead of re-checking names
//! row by row.

use std::path::Path;

use storm_core::error::{Result, StormError};
use storm_core::models::Metric;

/// Name of the required category column.
pub const EVENT_TYPE: &str = "EVENT_TYPE";

/// Column indices for one loaded table. `None` marks a column absent from
/// that year's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCatalog {
    pub event_type: usize,
    pub injuries_direct: Option<usize>,
    pub deaths_direct: Option<usize>,
    pub damage_property: Option<usize>,
    pub damage_crops: Option<usize>,
}

impl ColumnCatalog {
    /// Resolve the catalog from a header row.
    ///
    /// `EVENT_TYPE` is required; every other column is optional-presence.
    pub fn resolve(headers: &csv::StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|header| header == name);

        let event_type = find(EVENT_TYPE).ok_or_else(|| StormError::MissingColumn {
            column: EVENT_TYPE.to_string(),
            path: path.to_path_buf(),
        })?;

        Ok(Self {
            event_type,
            injuries_direct: find(Metric::InjuriesDirect.column()),
            deaths_direct: find(Metric::DeathsDirect.column()),
            damage_property: find(Metric::DamageProperty.column()),
            damage_crops: find(Metric::DamageCrops.column()),
        })
    }
}
