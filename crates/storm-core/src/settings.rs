use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::models::{DEFAULT_END_YEAR, DEFAULT_SINGLE_YEAR, DEFAULT_START_YEAR};

/// Storm-event impact analysis over NOAA StormEvents CSV files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "storm-impact",
    about = "Storm-event impact analysis over NOAA StormEvents CSV files",
    version
)]
pub struct Settings {
    /// Directory containing the yearly StormEvents CSV files
    #[arg(long, default_value = "./data")]
    pub data_dir: PathBuf,

    /// View mode
    #[arg(long, default_value = "year", value_parser = ["year", "decade"])]
    pub view: String,

    /// Year analyzed by the single-year view
    #[arg(long, default_value_t = DEFAULT_SINGLE_YEAR)]
    pub year: i32,

    /// First year of the multi-year range (inclusive)
    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    pub start_year: i32,

    /// Last year of the multi-year range (inclusive)
    #[arg(long, default_value_t = DEFAULT_END_YEAR)]
    pub end_year: i32,

    /// Ranked categories printed per metric (20 for year view, 10 for
    /// decade view when not given)
    #[arg(long)]
    pub top: Option<usize>,

    /// Directory where chart PNGs are written
    #[arg(long, default_value = "./charts")]
    pub charts_dir: PathBuf,

    /// Disable chart rendering
    #[arg(long)]
    pub no_charts: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

impl Settings {
    /// How many ranked categories the report prints per metric.
    pub fn report_depth(&self) -> usize {
        self.top.unwrap_or(match self.view.as_str() {
            "decade" => 10,
            _ => 20,
        })
    }

    /// The inclusive year range of the multi-year view.
    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Settings {
        let mut full = vec!["storm-impact"];
        full.extend_from_slice(args);
        Settings::parse_from(full)
    }

    #[test]
    fn test_defaults_match_fixed_constants() {
        let settings = parse(&[]);
        assert_eq!(settings.data_dir, PathBuf::from("./data"));
        assert_eq!(settings.view, "year");
        assert_eq!(settings.year, 2017);
        assert_eq!(settings.start_year, 2014);
        assert_eq!(settings.end_year, 2023);
        assert_eq!(settings.log_level, "INFO");
        assert!(!settings.no_charts);
    }

    #[test]
    fn test_report_depth_year_view() {
        let settings = parse(&[]);
        assert_eq!(settings.report_depth(), 20);
    }

    #[test]
    fn test_report_depth_decade_view() {
        let settings = parse(&["--view", "decade"]);
        assert_eq!(settings.report_depth(), 10);
    }

    #[test]
    fn test_report_depth_explicit_top_wins() {
        let settings = parse(&["--view", "decade", "--top", "5"]);
        assert_eq!(settings.report_depth(), 5);
    }

    #[test]
    fn test_year_range() {
        let settings = parse(&["--start-year", "2018", "--end-year", "2020"]);
        assert_eq!(settings.year_range(), 2018..=2020);
    }

    #[test]
    fn test_invalid_view_rejected() {
        let result = Settings::try_parse_from(["storm-impact", "--view", "monthly"]);
        assert!(result.is_err());
    }
}
