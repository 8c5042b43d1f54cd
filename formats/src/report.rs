//! `PositionReport` is the unit of input, one row of the `vessel_tracks` table.
//!

use serde::{Deserialize, Serialize};

use crate::Status;

/// Anything earlier is considered garbage (epoch in ms, zeroes, ...).
pub const MIN_EPOCH: i64 = 1_000_000_000;

/// One position report as delivered by the storage layer.
///
/// Field names on the wire follow the database columns.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PositionReport {
    /// Feed the report came from (AIS, radar, ...)
    pub source: String,
    /// Vessel name, used as identifier
    #[serde(rename = "vesselname")]
    pub vessel_id: String,
    /// Epoch in seconds
    #[serde(rename = "sourcedatetime")]
    pub timestamp: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl PositionReport {
    pub fn new(source: &str, vessel_id: &str, timestamp: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            source: source.to_string(),
            vessel_id: vessel_id.to_string(),
            timestamp,
            latitude,
            longitude,
        }
    }

    /// Check timestamp and coordinates, NaN coordinates are rejected as well.
    ///
    pub fn validate(&self) -> Result<(), Status> {
        if self.timestamp < MIN_EPOCH {
            return Err(Status::InvalidReport(format!(
                "{}: timestamp {} before {}",
                self.vessel_id, self.timestamp, MIN_EPOCH
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Status::InvalidReport(format!(
                "{}: latitude {} out of range",
                self.vessel_id, self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Status::InvalidReport(format!(
                "{}: longitude {} out of range",
                self.vessel_id, self.longitude
            )));
        }
        Ok(())
    }

    /// `(lat, lon)` couple, the order used by the map.
    ///
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1_000_000_000, 0., 0.)]
    #[case(1_700_000_000, 90., 180.)]
    #[case(1_700_000_000, -90., -180.)]
    fn test_validate_ok(#[case] ts: i64, #[case] lat: f64, #[case] lon: f64) {
        let r = PositionReport::new("AIS", "ALPHA", ts, lat, lon);
        assert!(r.validate().is_ok());
    }

    #[rstest]
    #[case(999_999_999, 0., 0.)]
    #[case(1_700_000_000, 90.5, 0.)]
    #[case(1_700_000_000, 0., -180.1)]
    #[case(1_700_000_000, f64::NAN, 0.)]
    fn test_validate_bad(#[case] ts: i64, #[case] lat: f64, #[case] lon: f64) {
        let r = PositionReport::new("AIS", "ALPHA", ts, lat, lon);
        assert!(matches!(r.validate(), Err(Status::InvalidReport(_))));
    }

    #[test]
    fn test_report_from_csv() {
        let data = "source,vesselname,sourcedatetime,latitude,longitude\nAIS,VOYAGER 06,1700000000,1.25,103.8\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let r: Vec<PositionReport> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(1, r.len());
        assert_eq!("VOYAGER 06", r[0].vessel_id);
        assert_eq!(1_700_000_000, r[0].timestamp);
    }
}
