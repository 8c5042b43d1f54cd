//! Error module
//!

use thiserror::Error;

/// Conditions that halt the processing of an input batch.
///
/// Empty inputs are not errors, they propagate as empty results.
///
#[derive(Debug, Error, PartialEq)]
pub enum Status {
    #[error("Invalid report: {0}")]
    InvalidReport(String),
    #[error("Invalid geofence: need at least 3 vertices, got {0}")]
    InvalidGeofence(usize),
    #[error("Invalid geofence vertex ({0}, {1})")]
    InvalidVertex(f64, f64),
    #[error("Bad GeoJSON geofence: {0}")]
    BadGeoJson(String),
    #[error("No speed available for {0}, can not project")]
    NoKinematics(String),
    #[error("Timestamp {0} out of range")]
    BadTimestamp(i64),
}
