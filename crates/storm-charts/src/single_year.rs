//! Single-year figure: metric values across ranked storm categories.

use std::collections::BTreeMap;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::FontTransform;
use storm_core::error::Result;
use storm_core::formatting::compact_amount;
use storm_core::models::RankedImpact;
use tracing::{info, warn};

use crate::{to_chart_err, FIGURE_SIZE};

const SERIES_COLORS: [RGBColor; 2] = [RGBColor(200, 0, 100), RGBColor(30, 144, 255)];

/// Draw every ranking in `summaries` as one line across storm categories.
///
/// The x axis lists categories in the first ranking's order; later rankings
/// are looked up per category and plot 0 where a category is absent from
/// their own ranking.
pub fn render_ranked_chart(
    path: &Path,
    title: &str,
    y_label: &str,
    summaries: &[&RankedImpact],
) -> Result<()> {
    let Some(first) = summaries.first() else {
        warn!("No series to plot; skipping {}", path.display());
        return Ok(());
    };

    let categories: Vec<&str> = first
        .ranking
        .iter()
        .map(|(category, _)| category.as_str())
        .collect();
    if categories.is_empty() {
        warn!("No categories to plot; skipping {}", path.display());
        return Ok(());
    }

    let series: Vec<(&str, Vec<f64>)> = summaries
        .iter()
        .map(|summary| (summary.label.as_str(), series_values(summary, &categories)))
        .collect();

    let y_max = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(1.0_f64, f64::max);

    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 180)
        .build_cartesian_2d(0..categories.len(), 0.0..y_max * 1.1)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .x_labels(categories.len().min(60))
        .x_label_formatter(&|idx| {
            categories
                .get(*idx)
                .map(|category| category.to_string())
                .unwrap_or_default()
        })
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .y_label_formatter(&|value| compact_amount(*value))
        .y_desc(y_label)
        .draw()
        .map_err(to_chart_err)?;

    for (idx, (label, values)) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];

        chart
            .draw_series(LineSeries::new(
                values.iter().copied().enumerate(),
                color.stroke_width(2),
            ))
            .map_err(to_chart_err)?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(2))
            });

        chart
            .draw_series(
                values
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(x, y)| Circle::new((x, y), 3, color.filled())),
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

/// Values for one ranking in `categories` order; absent categories plot 0.
fn series_values(summary: &RankedImpact, categories: &[&str]) -> Vec<f64> {
    let lookup: BTreeMap<&str, f64> = summary
        .ranking
        .iter()
        .map(|(category, value)| (category.as_str(), *value))
        .collect();

    categories
        .iter()
        .map(|category| lookup.get(category).copied().unwrap_or(0.0))
        .collect()
}
