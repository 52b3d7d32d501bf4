//! Formatting helpers for presenting metrics.

/// Percentage with a fixed number of decimals; `—` for non-finite values.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.decimals$}%")
}

/// Whole percentile as shown on the summary row, e.g. `65%`.
pub fn format_percentile(percentile: i64) -> String {
    format!("{percentile}%")
}

/// Correct answers over total, e.g. `11/15`.
pub fn format_score(correct: i64, total: i64) -> String {
    format!("{correct}/{total}")
}
