//! Multi-year figure: impact trends across years for the top storm
//! categories.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::path::Path;

use plotters::prelude::*;
use storm_core::error::Result;
use storm_core::formatting::compact_amount;
use storm_core::models::{Metric, StormRecord};
use storm_data::aggregator::ImpactAggregator;
use tracing::{info, warn};

use crate::{to_chart_err, FIGURE_SIZE};

/// Render one line per top category showing the yearly totals of `metric`.
///
/// Categories are the `top_n` highest by total across the whole range.
/// Years with no rows for a category are left as gaps: contiguous runs are
/// drawn as separate segments so no line bridges a missing year.
pub fn render_year_trend_chart(
    path: &Path,
    records: &[StormRecord],
    metric: Metric,
    years: RangeInclusive<i32>,
    top_n: usize,
) -> Result<()> {
    let ranking = ImpactAggregator::rank_by_metric(records, metric);
    let yearly = ImpactAggregator::yearly_totals(records, metric);

    let top: Vec<&str> = ranking
        .iter()
        .take(top_n)
        .map(|(category, _)| category.as_str())
        .collect();
    if top.is_empty() {
        warn!(
            "No categories to plot for {}; skipping {}",
            metric.label(),
            path.display()
        );
        return Ok(());
    }

    let series: Vec<(&str, Vec<Vec<(i32, f64)>>)> = top
        .iter()
        .map(|&category| (category, split_segments(&category_points(&yearly, category))))
        .collect();

    let y_max = series
        .iter()
        .flat_map(|(_, segments)| segments.iter().flatten())
        .map(|&(_, value)| value)
        .fold(1.0_f64, f64::max);

    let (start, end) = (*years.start(), *years.end());
    let title = format!("{} by Storm Type, {}-{}", metric.label(), start, end);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 28))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(start..end + 1, 0.0..y_max * 1.1)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .x_labels((end - start + 1).max(1) as usize)
        .x_label_formatter(&|year| format!("{}", year))
        .y_label_formatter(&|value| compact_amount(*value))
        .x_desc("Year")
        .y_desc(metric.label())
        .draw()
        .map_err(to_chart_err)?;

    for (idx, (category, segments)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        for (seg_idx, segment) in segments.iter().enumerate() {
            let drawn = chart
                .draw_series(LineSeries::new(
                    segment.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(to_chart_err)?;
            if seg_idx == 0 {
                drawn.label(*category).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(2))
                });
            }
        }

        chart
            .draw_series(
                segments
                    .iter()
                    .flatten()
                    .map(|&(year, value)| Circle::new((year, value), 3, color.filled())),
            )
            .map_err(to_chart_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.7))
        .border_style(&BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;
    info!("Wrote chart: {}", path.display());
    Ok(())
}

/// Yearly points for one category, ascending by year.
fn category_points(
    yearly: &BTreeMap<String, BTreeMap<i32, f64>>,
    category: &str,
) -> Vec<(i32, f64)> {
    yearly
        .get(category)
        .map(|by_year| by_year.iter().map(|(&year, &value)| (year, value)).collect())
        .unwrap_or_default()
}

/// Split year-ascending points into contiguous runs.
fn split_segments(points: &[(i32, f64)]) -> Vec<Vec<(i32, f64)>> {
    let mut segments: Vec<Vec<(i32, f64)>> = Vec::new();
    for &(year, value) in points {
        match segments.last_mut() {
            Some(segment)
                if segment
                    .last()
                    .map(|&(prev, _)| prev + 1 == year)
                    .unwrap_or(false) =>
            {
                segment.push((year, value));
            }
            _ => segments.push(vec![(year, value)]),
        }
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(event_type: &str, deaths: u64, year: i32) -> StormRecord {
        StormRecord {
            event_type: event_type.to_string(),
            injuries_direct: 0,
            deaths_direct: deaths,
            damage_property: None,
            damage_crops: None,
            year,
        }
    }

    // ── split_segments ───────────────────────────────────────────────────────

    #[test]
    fn test_split_segments_contiguous_run_stays_whole() {
        let segments = split_segments(&[(2014, 1.0), (2015, 2.0), (2016, 3.0)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 3);
    }

    #[test]
    fn test_split_segments_breaks_at_missing_year() {
        let segments = split_segments(&[(2014, 1.0), (2015, 2.0), (2017, 3.0)]);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![(2014, 1.0), (2015, 2.0)]);
        assert_eq!(segments[1], vec![(2017, 3.0)]);
    }

    #[test]
    fn test_split_segments_empty() {
        assert!(split_segments(&[]).is_empty());
    }

    // ── category_points ──────────────────────────────────────────────────────

    #[test]
    fn test_category_points_ascending_years() {
        let records = vec![
            record("Tornado", 1, 2021),
            record("Tornado", 2, 2015),
            record("Tornado", 3, 2018),
        ];
        let yearly = ImpactAggregator::yearly_totals(&records, Metric::DeathsDirect);

        let points = category_points(&yearly, "Tornado");
        assert_eq!(points, vec![(2015, 2.0), (2018, 3.0), (2021, 1.0)]);
    }

    #[test]
    fn test_category_points_unknown_category() {
        let yearly = ImpactAggregator::yearly_totals(&[], Metric::DeathsDirect);
        assert!(category_points(&yearly, "Tornado").is_empty());
    }

    // ── render_year_trend_chart ──────────────────────────────────────────────

    #[test]
    fn test_render_skips_empty_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trend.png");

        render_year_trend_chart(&path, &[], Metric::DeathsDirect, 2014..=2023, 10).unwrap();
        assert!(!path.exists());
    }
}
