//! Inline SVG markup for the distribution curve and the correctness donut.
//!
//! Inputs are drawn defensively: a marker outside the axis is pinned to the
//! nearest edge and donut slices are clamped into 0–100, so no path ever gets
//! a non-finite coordinate.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::core::derived::{DistributionInput, DonutInput};
use crate::core::format;

const CURVE_WIDTH: f64 = 520.0;
const CURVE_HEIGHT: f64 = 260.0;
const CURVE_LEFT: f64 = 24.0;
const CURVE_RIGHT: f64 = 16.0;
const CURVE_TOP: f64 = 36.0;
const CURVE_BOTTOM: f64 = 48.0;

const LINE_COLOR: &str = "rgb(147,112,219)";
const POINT_COLOR: &str = "rgba(138,43,226,1)";

const DONUT_SIZE: f64 = 160.0;
const DONUT_OUTER: f64 = 80.0;
/// Inner hole is 70% of the outer radius.
const DONUT_INNER: f64 = 56.0;
const CORRECT_COLOR: &str = "#4A90E2";
const WRONG_COLOR: &str = "#E0E0E0";

/// Horizontal pixel for a continuous bucket-axis position.
pub fn marker_pixel(marker_x: f64, last_index: usize) -> f64 {
    let last = last_index.max(1) as f64;
    let position = if marker_x.is_finite() {
        marker_x.clamp(0.0, last)
    } else {
        0.0
    };
    let step = (CURVE_WIDTH - CURVE_LEFT - CURVE_RIGHT) / last;
    CURVE_LEFT + position * step
}

pub fn distribution_svg(input: &DistributionInput, marker_label: &str, axis_label: &str) -> String {
    let last_index = input.buckets.len().saturating_sub(1);
    let plot_height = CURVE_HEIGHT - CURVE_TOP - CURVE_BOTTOM;
    let baseline = CURVE_HEIGHT - CURVE_BOTTOM;
    let max_count = input.max_count().max(1) as f64;

    let points: Vec<(f64, f64)> = input
        .counts
        .iter()
        .enumerate()
        .map(|(index, count)| {
            let x = marker_pixel(index as f64, last_index);
            let y = baseline - (*count as f64 / max_count) * plot_height;
            (x, y)
        })
        .collect();

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' class='distribution-chart' viewBox='0 0 {CURVE_WIDTH} {CURVE_HEIGHT}' role='img'>"
    );

    let path = points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(
        svg,
        "<polyline points='{path}' fill='none' stroke='{LINE_COLOR}' stroke-width='1'/>"
    );

    for ((x, y), count) in points.iter().zip(input.counts.iter()) {
        let _ = write!(
            svg,
            "<circle cx='{x:.1}' cy='{y:.1}' r='4' fill='{POINT_COLOR}'><title>numberOfStudents: {count}</title></circle>"
        );
    }

    for (index, bucket) in input.buckets.iter().enumerate() {
        let x = marker_pixel(index as f64, last_index);
        let _ = write!(
            svg,
            "<text x='{x:.1}' y='{:.1}' font-size='11' text-anchor='middle' fill='#6b7280'>{bucket}</text>",
            baseline + 16.0
        );
    }
    let _ = write!(
        svg,
        "<text x='{:.1}' y='{:.1}' font-size='12' text-anchor='middle' fill='#374151'>{}</text>",
        CURVE_WIDTH / 2.0,
        CURVE_HEIGHT - 8.0,
        escape_xml(axis_label)
    );

    let marker = marker_pixel(input.marker_x, last_index);
    let _ = write!(
        svg,
        "<line class='distribution-chart__marker' x1='{marker:.1}' x2='{marker:.1}' y1='{CURVE_TOP:.1}' y2='{baseline:.1}' stroke='{LINE_COLOR}' stroke-width='1'/>"
    );
    let _ = write!(
        svg,
        "<text x='{marker:.1}' y='{:.1}' font-size='12' font-weight='300' text-anchor='middle' fill='#4b5563'>{}</text>",
        CURVE_TOP - 8.0,
        escape_xml(marker_label)
    );

    svg.push_str("</svg>");
    svg
}

pub fn donut_svg(input: &DonutInput, correct_label: &str, wrong_label: &str) -> String {
    let (correct, _) = input.display_fractions();
    let radius = (DONUT_OUTER + DONUT_INNER) / 2.0;
    let thickness = DONUT_OUTER - DONUT_INNER;
    let circumference = 2.0 * PI * radius;
    let correct_len = circumference * correct / 100.0;
    let center = DONUT_SIZE / 2.0;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' class='donut-chart' viewBox='0 0 {DONUT_SIZE} {DONUT_SIZE}' role='img'>"
    );
    let _ = write!(
        svg,
        "<circle cx='{center}' cy='{center}' r='{radius}' fill='none' stroke='{WRONG_COLOR}' stroke-width='{thickness}'><title>{}: {}</title></circle>",
        escape_xml(wrong_label),
        trim_number(input.incorrect_fraction)
    );
    if correct_len > 0.0 {
        let _ = write!(
            svg,
            "<circle class='donut-chart__correct' cx='{center}' cy='{center}' r='{radius}' fill='none' stroke='{CORRECT_COLOR}' stroke-width='{thickness}' stroke-dasharray='{correct_len:.3} {:.3}' transform='rotate(-90 {center} {center})'><title>{}: {}</title></circle>",
            circumference - correct_len,
            escape_xml(correct_label),
            trim_number(input.correct_fraction)
        );
    }
    let _ = write!(
        svg,
        "<text x='{center}' y='{center}' font-size='36' text-anchor='middle' dominant-baseline='central'>🎯</text>"
    );
    svg.push_str("</svg>");
    svg
}

/// Raw tooltip number: integers without decimals, everything else to two places.
fn trim_number(value: f64) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format::format_percent(value, decimals)
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
