/// Format one ranked report line.
///
/// # Examples
///
/// ```
/// use storm_core::formatting::impact_line;
///
/// assert_eq!(
///     impact_line("Tornado", 10.0, "Direct Deaths"),
///     "Tornado caused 10.00 direct deaths."
/// );
/// ```
pub fn impact_line(category: &str, value: f64, metric_label: &str) -> String {
    format!(
        "{} caused {:.2} {}.",
        category,
        value,
        metric_label.to_lowercase()
    )
}

/// Format an amount with a magnitude suffix for chart axis labels.
///
/// # Examples
///
/// ```
/// use storm_core::formatting::compact_amount;
///
/// assert_eq!(compact_amount(1.5e9), "1.5B");
/// assert_eq!(compact_amount(2_000_000.0), "2M");
/// assert_eq!(compact_amount(500_000.0), "500K");
/// assert_eq!(compact_amount(950.0), "950");
/// ```
pub fn compact_amount(value: f64) -> String {
    let (scaled, suffix) = if value.abs() >= 1e9 {
        (value / 1e9, "B")
    } else if value.abs() >= 1e6 {
        (value / 1e6, "M")
    } else if value.abs() >= 1e3 {
        (value / 1e3, "K")
    } else {
        return format!("{:.0}", value);
    };

    let text = format!("{:.1}", scaled);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, suffix)
}
