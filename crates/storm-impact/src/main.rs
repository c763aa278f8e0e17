mod bootstrap;
mod report;

use anyhow::Result;
use clap::Parser;
use storm_charts::{multi_year, single_year, TREND_CATEGORIES};
use storm_core::models::{Metric, RankedImpact};
use storm_core::settings::Settings;
use storm_data::aggregator::ImpactAggregator;
use storm_data::combiner;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;
    bootstrap::ensure_charts_dir(&settings)?;

    tracing::info!("storm-impact v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, data dir: {}",
        settings.view,
        settings.data_dir.display()
    );
    bootstrap::data_diagnostics(&settings.data_dir);

    match settings.view.as_str() {
        "year" => run_year_view(&settings)?,
        "decade" => run_decade_view(&settings)?,
        unknown => eprintln!("Unknown view mode: {}", unknown),
    }

    Ok(())
}

/// Single-year pipeline: one file, top-20 report, two ranked figures.
fn run_year_view(settings: &Settings) -> Result<()> {
    let records = combiner::ingest_year(&settings.data_dir, settings.year);
    let summaries = ImpactAggregator::summarize_impact(&records, &Metric::ALL);

    report::print_summary(
        &summaries,
        settings.report_depth(),
        report::ReportScope::SingleYear,
    );

    if settings.no_charts {
        return Ok(());
    }

    // summarize_impact preserves Metric::ALL order: injuries, deaths,
    // property damage, crop damage.
    let casualties: [&RankedImpact; 2] = [&summaries[0], &summaries[1]];
    let damage: [&RankedImpact; 2] = [&summaries[2], &summaries[3]];

    single_year::render_ranked_chart(
        &settings
            .charts_dir
            .join(format!("casualties_{}.png", settings.year)),
        "Injuries and Deaths by Storm Type",
        "Count",
        &casualties,
    )?;
    single_year::render_ranked_chart(
        &settings
            .charts_dir
            .join(format!("damage_{}.png", settings.year)),
        "Property and Crop Damage by Storm Type",
        "Damage (USD)",
        &damage,
    )?;

    Ok(())
}

/// Multi-year pipeline: combined range, top-10 report, one trend figure per
/// metric.
fn run_decade_view(settings: &Settings) -> Result<()> {
    let range = settings.year_range();
    let records = combiner::combine_years(&settings.data_dir, range.clone());
    let summaries = ImpactAggregator::summarize_impact(&records, &Metric::ALL);

    report::print_summary(
        &summaries,
        settings.report_depth(),
        report::ReportScope::MultiYear,
    );

    if settings.no_charts {
        return Ok(());
    }

    for metric in Metric::ALL {
        multi_year::render_year_trend_chart(
            &settings
                .charts_dir
                .join(format!("{}_trend.png", metric.slug())),
            &records,
            metric,
            range.clone(),
            TREND_CATEGORIES,
        )?;
    }

    Ok(())
}
