/// Fixed NOAA bulk-download naming prefix for yearly detail files.
pub const FILE_PREFIX: &str = "StormEvents_details-ftp_v1.0_d";

/// First year of the default multi-year range (inclusive).
pub const DEFAULT_START_YEAR: i32 = 2014;
/// Last year of the default multi-year range (inclusive).
pub const DEFAULT_END_YEAR: i32 = 2023;
/// Year analyzed by the single-year view when none is given.
pub const DEFAULT_SINGLE_YEAR: i32 = 2017;

/// Expected file name for one year's detail table.
pub fn storm_file_name(year: i32) -> String {
    format!("{}{}.csv", FILE_PREFIX, year)
}

/// One storm event row after normalization and year tagging.
#[derive(Debug, Clone, PartialEq)]
pub struct StormRecord {
    /// Category label, e.g. "Tornado" or "Flash Flood".
    pub event_type: String,
    /// Injuries directly attributed to the event.
    pub injuries_direct: u64,
    /// Deaths directly attributed to the event.
    pub deaths_direct: u64,
    /// Property damage in base US dollars. `None` when the column is absent
    /// from that year's schema or the cell was empty.
    pub damage_property: Option<f64>,
    /// Crop damage in base US dollars, same absence semantics.
    pub damage_crops: Option<f64>,
    /// Year of the source file, assigned during ingest.
    pub year: i32,
}

impl StormRecord {
    /// The value this record contributes to a metric sum. Absent damage
    /// amounts contribute nothing.
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::InjuriesDirect => self.injuries_direct as f64,
            Metric::DeathsDirect => self.deaths_direct as f64,
            Metric::DamageProperty => self.damage_property.unwrap_or(0.0),
            Metric::DamageCrops => self.damage_crops.unwrap_or(0.0),
        }
    }
}

/// The four impact metrics aggregated per storm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    InjuriesDirect,
    DeathsDirect,
    DamageProperty,
    DamageCrops,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Metric; 4] = [
        Metric::InjuriesDirect,
        Metric::DeathsDirect,
        Metric::DamageProperty,
        Metric::DamageCrops,
    ];

    /// CSV column this metric is summed from.
    pub fn column(self) -> &'static str {
        match self {
            Metric::InjuriesDirect => "INJURIES_DIRECT",
            Metric::DeathsDirect => "DEATHS_DIRECT",
            Metric::DamageProperty => "DAMAGE_PROPERTY",
            Metric::DamageCrops => "DAMAGE_CROPS",
        }
    }

    /// Human-readable label used in report headers and chart legends.
    pub fn label(self) -> &'static str {
        match self {
            Metric::InjuriesDirect => "Direct Injuries",
            Metric::DeathsDirect => "Direct Deaths",
            Metric::DamageProperty => "Property Damage",
            Metric::DamageCrops => "Crop Damage",
        }
    }

    /// File-name fragment for chart output.
    pub fn slug(self) -> &'static str {
        match self {
            Metric::InjuriesDirect => "direct_injuries",
            Metric::DeathsDirect => "direct_deaths",
            Metric::DamageProperty => "property_damage",
            Metric::DamageCrops => "crop_damage",
        }
    }
}

/// Ranked `(category, total)` pairs for one metric, highest total first.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedImpact {
    /// Metric label, e.g. "Direct Injuries".
    pub label: String,
    /// Categories with their summed metric values, descending.
    pub ranking: Vec<(String, f64)>,
}

impl RankedImpact {
    /// The first `n` entries of the ranking, or all of them when fewer.
    pub fn top(&self, n: usize) -> &[(String, f64)] {
        &self.ranking[..self.ranking.len().min(n)]
    }
}
