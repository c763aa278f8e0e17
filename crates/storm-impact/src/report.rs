//! Console ranking report.

use storm_core::formatting::impact_line;
use storm_core::models::RankedImpact;

/// Which header variant the report prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    /// One year of data.
    SingleYear,
    /// The combined multi-year table.
    MultiYear,
}

/// Print the top `depth` categories for every metric.
pub fn print_summary(summaries: &[RankedImpact], depth: usize, scope: ReportScope) {
    print!("{}", render_summary(summaries, depth, scope));
}

/// Build the report text: a header per metric followed by up to `depth`
/// ranked lines.
fn render_summary(summaries: &[RankedImpact], depth: usize, scope: ReportScope) -> String {
    let mut out = String::new();

    for summary in summaries {
        match scope {
            ReportScope::SingleYear => {
                out.push_str(&format!("\nTop storm types for {}:\n", summary.label));
            }
            ReportScope::MultiYear => {
                out.push_str(&format!(
                    "\nMost impactful storm types for {} over 10 years:\n",
                    summary.label
                ));
            }
        }

        for (category, value) in summary.top(depth) {
            out.push_str(&impact_line(category, *value, &summary.label));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deaths_summary() -> RankedImpact {
        RankedImpact {
            label: "Direct Deaths".to_string(),
            ranking: vec![
                ("Tornado".to_string(), 10.0),
                ("Flood".to_string(), 3.0),
                ("Heat".to_string(), 1.0),
            ],
        }
    }

    #[test]
    fn test_single_year_header_and_lines() {
        let text = render_summary(&[deaths_summary()], 2, ReportScope::SingleYear);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "",
                "Top storm types for Direct Deaths:",
                "Tornado caused 10.00 direct deaths.",
                "Flood caused 3.00 direct deaths.",
            ]
        );
    }

    #[test]
    fn test_multi_year_header() {
        let text = render_summary(&[deaths_summary()], 1, ReportScope::MultiYear);
        assert!(text.contains("Most impactful storm types for Direct Deaths over 10 years:"));
        assert!(text.contains("Tornado caused 10.00 direct deaths."));
    }

    #[test]
    fn test_depth_truncates_ranking() {
        let text = render_summary(&[deaths_summary()], 2, ReportScope::SingleYear);
        assert!(!text.contains("Heat"));
    }

    #[test]
    fn test_depth_larger_than_ranking() {
        let text = render_summary(&[deaths_summary()], 20, ReportScope::SingleYear);
        assert!(text.contains("Heat caused 1.00 direct deaths."));
    }

    #[test]
    fn test_empty_summaries_print_nothing() {
        assert_eq!(render_summary(&[], 10, ReportScope::SingleYear), "");
    }
}
