//! What is available in a snapshot, to populate the control surface.
//!

use std::collections::BTreeSet;

use fairway_common::TimeWindow;
use fairway_formats::{PositionReport, MIN_EPOCH};

/// Earliest and latest valid timestamps, `None` when there is nothing valid.
///
pub fn time_bounds(reports: &[PositionReport]) -> Option<(i64, i64)> {
    reports
        .iter()
        .map(|r| r.timestamp)
        .filter(|&t| t >= MIN_EPOCH)
        .fold(None, |acc, t| match acc {
            None => Some((t, t)),
            Some((min, max)) => Some((min.min(t), max.max(t))),
        })
}

/// Distinct sources.
///
pub fn sources(reports: &[PositionReport]) -> BTreeSet<String> {
    reports.iter().map(|r| r.source.clone()).collect()
}

/// Distinct vessels seen during `window`.
///
pub fn vessels(reports: &[PositionReport], window: &TimeWindow) -> BTreeSet<String> {
    reports
        .iter()
        .filter(|r| window.contains(r.timestamp))
        .map(|r| r.vessel_id.clone())
        .collect()
}
