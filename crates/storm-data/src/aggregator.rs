//! Impact aggregation by storm category.

use std::collections::BTreeMap;

use storm_core::models::{Metric, RankedImpact, StormRecord};

/// Stateless helper that ranks storm categories by summed impact metrics.
pub struct ImpactAggregator;

impl ImpactAggregator {
    /// Group `records` by event type and sum `metric` within each group.
    ///
    /// The ranking is sorted by total descending; equal totals order by
    /// category name ascending so repeated runs are deterministic.
    pub fn rank_by_metric(records: &[StormRecord], metric: Metric) -> Vec<(String, f64)> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for record in records {
            *totals.entry(record.event_type.as_str()).or_insert(0.0) +=
                record.metric_value(metric);
        }

        let mut ranking: Vec<(String, f64)> = totals
            .into_iter()
            .map(|(category, total)| (category.to_string(), total))
            .collect();
        ranking.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranking
    }

    /// One ranking per metric, in the order given.
    pub fn summarize_impact(records: &[StormRecord], metrics: &[Metric]) -> Vec<RankedImpact> {
        metrics
            .iter()
            .map(|&metric| RankedImpact {
                label: metric.label().to_string(),
                ranking: Self::rank_by_metric(records, metric),
            })
            .collect()
    }

    /// Per-category totals of `metric` for each year present in `records`.
    ///
    /// A category has no entry for a year it does not appear in; the trend
    /// charts rely on that to show gaps instead of zero-filling.
    pub fn yearly_totals(
        records: &[StormRecord],
        metric: Metric,
    ) -> BTreeMap<String, BTreeMap<i32, f64>> {
        let mut totals: BTreeMap<String, BTreeMap<i32, f64>> = BTreeMap::new();
        for record in records {
            *totals
                .entry(record.event_type.clone())
                .or_default()
                .entry(record.year)
                .or_insert(0.0) += record.metric_value(metric);
        }
        totals
    }
}
