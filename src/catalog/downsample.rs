//! Index-based decimation of a sale history for charting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{ChartPoint, SaleEvent};

pub use crate::config::DEFAULT_MAX_CHART_POINTS as DEFAULT_MAX_POINTS;

/// Indices kept when reducing `len` items to at most `max_points`.
///
/// Short series are kept whole. Longer ones take every `len / max_points`-th
/// index starting at 0, truncated to `max_points`.
pub fn downsample_indices(len: usize, max_points: usize) -> Vec<usize> {
    if max_points == 0 || len == 0 {
        return Vec::new();
    }
    if len <= max_points {
        return (0..len).collect();
    }
    let stride = len / max_points;
    (0..len).step_by(stride).take(max_points).collect()
}

/// Downsample `items`, pairing each kept item with its original index.
pub fn downsample<T>(items: &[T], max_points: usize) -> Vec<(usize, &T)> {
    downsample_indices(items.len(), max_points)
        .into_iter()
        .map(|i| (i, &items[i]))
        .collect()
}

/// Chart points for a sale history. A sale without a price plots at 0.
pub fn chart_points(events: &[SaleEvent], max_points: usize) -> Vec<ChartPoint> {
    downsample(events, max_points)
        .into_iter()
        .map(|(original_index, event)| ChartPoint {
            value: event.price.unwrap_or(0.0),
            label: short_date(&event.date),
            original_index,
        })
        .collect()
}

/// The sale a chart point was built from.
pub fn resolve_point<'a>(events: &'a [SaleEvent], point: &ChartPoint) -> Option<&'a SaleEvent> {
    events.get(point.original_index)
}

/// Format a date as `"Mar 4"`; unparseable input is returned unchanged.
pub fn short_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
