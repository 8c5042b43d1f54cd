//! `Track` and `KinematicRecord`, the per-vessel views of the reports.
//!

use serde::Serialize;

use crate::PositionReport;

/// Time-ordered reports of a single vessel.
///
/// Ordering is established at construction with a stable sort, reports sharing a timestamp
/// keep their input order and are all retained.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Track {
    vessel_id: String,
    reports: Vec<PositionReport>,
}

impl Track {
    pub fn new(vessel_id: &str, mut reports: Vec<PositionReport>) -> Self {
        reports.sort_by_key(|r| r.timestamp);
        Self {
            vessel_id: vessel_id.to_string(),
            reports,
        }
    }

    pub fn vessel_id(&self) -> &str {
        &self.vessel_id
    }

    pub fn reports(&self) -> &[PositionReport] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn last(&self) -> Option<&PositionReport> {
        self.reports.last()
    }
}

/// A report enriched with what we know of the movement from the previous one.
///
/// `distance_km` is `None` and `speed_knots` is NaN for the first report of a track,
/// `course_degrees` is then 0.
///
#[derive(Clone, Debug, Serialize)]
pub struct KinematicRecord {
    #[serde(flatten)]
    pub report: PositionReport,
    pub distance_km: Option<f64>,
    pub speed_knots: f64,
    pub course_degrees: f64,
}

impl KinematicRecord {
    /// Record without predecessor.
    ///
    pub fn first(report: PositionReport) -> Self {
        Self {
            report,
            distance_km: None,
            speed_knots: f64::NAN,
            course_degrees: 0.,
        }
    }

    #[inline]
    pub fn vessel_id(&self) -> &str {
        &self.report.vessel_id
    }

    #[inline]
    pub fn source(&self) -> &str {
        &self.report.source
    }

    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.report.timestamp
    }

    #[inline]
    pub fn position(&self) -> (f64, f64) {
        self.report.position()
    }

    /// Speed is defined only when there was a predecessor.
    ///
    #[inline]
    pub fn has_speed(&self) -> bool {
        !self.speed_knots.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_is_sorted_and_stable() {
        let t = Track::new(
            "ALPHA",
            vec![
                PositionReport::new("B", "ALPHA", 1_000_000_200, 1., 1.),
                PositionReport::new("A", "ALPHA", 1_000_000_100, 2., 2.),
                PositionReport::new("C", "ALPHA", 1_000_000_200, 3., 3.),
            ],
        );
        let src: Vec<_> = t.reports().iter().map(|r| r.source.as_str()).collect();
        assert_eq!(vec!["A", "B", "C"], src);
        assert_eq!(3, t.len());
        assert_eq!("C", t.last().unwrap().source);
    }

    #[test]
    fn test_first_record() {
        let k = KinematicRecord::first(PositionReport::new("A", "ALPHA", 1_000_000_000, 1., 2.));
        assert!(!k.has_speed());
        assert_eq!(0., k.course_degrees);
        assert!(k.distance_km.is_none());
    }
}
