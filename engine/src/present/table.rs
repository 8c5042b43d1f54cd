//! Table view: one row per vessel, latest first.
//!

use fairway_common::format_epoch;
use fairway_formats::KinematicRecord;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

const HEADER: [&str; 5] = ["Vessel", "Source", "Speed (kn)", "Course", "Last Update"];

/// Already formatted row.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub vessel: String,
    pub source: String,
    pub speed: String,
    pub course: String,
    pub last_update: String,
    #[serde(skip)]
    pub timestamp: i64,
}

impl From<&KinematicRecord> for TableRow {
    fn from(rec: &KinematicRecord) -> Self {
        TableRow {
            vessel: rec.vessel_id().to_string(),
            source: rec.source().to_string(),
            speed: fmt_speed(rec.speed_knots),
            course: fmt_course(rec.course_degrees),
            last_update: fmt_time(rec.timestamp()),
            timestamp: rec.timestamp(),
        }
    }
}

/// `12.3` or `N/A`
///
pub fn fmt_speed(speed: f64) -> String {
    if speed.is_finite() {
        format!("{speed:.1}")
    } else {
        "N/A".to_string()
    }
}

/// `45.0°` or `N/A`
///
pub fn fmt_course(course: f64) -> String {
    if course.is_finite() {
        format!("{course:.1}°")
    } else {
        "N/A".to_string()
    }
}

/// `YYYY-MM-DD HH:MM:SS`, the raw epoch if out of range.
///
pub fn fmt_time(epoch: i64) -> String {
    format_epoch(epoch).unwrap_or_else(|| epoch.to_string())
}

/// Build the rows from each vessel's latest record, most recent first.
///
/// Ties keep the input order.
///
pub fn table_view<'a, I>(latest: I) -> Vec<TableRow>
where
    I: IntoIterator<Item = &'a KinematicRecord>,
{
    let mut rows: Vec<TableRow> = latest.into_iter().map(TableRow::from).collect();
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows
}

/// Text rendering for terminals.
///
pub fn render_table(rows: &[TableRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADER);
    rows.iter().for_each(|r| {
        builder.push_record([
            r.vessel.as_str(),
            r.source.as_str(),
            r.speed.as_str(),
            r.course.as_str(),
            r.last_update.as_str(),
        ]);
    });
    builder.build().with(Style::modern()).to_string()
}
