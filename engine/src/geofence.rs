//! Spatial filtering against a `Geofence`.
//!
//! Containment is strict: points on an edge or a vertex are outside.  Coordinates are swapped
//! here and only here, the polygon is built with x = longitude and y = latitude.
//!

use std::collections::{BTreeMap, BTreeSet};

use fairway_formats::{Geofence, KinematicRecord, PositionReport};
use geo::{Contains, LineString, Point, Polygon};
use tracing::debug;

/// Anything with a vessel and a position.
///
pub trait Located {
    fn vessel_id(&self) -> &str;
    /// `(lat, lon)`
    fn position(&self) -> (f64, f64);
}

impl Located for PositionReport {
    fn vessel_id(&self) -> &str {
        &self.vessel_id
    }

    fn position(&self) -> (f64, f64) {
        PositionReport::position(self)
    }
}

impl Located for KinematicRecord {
    fn vessel_id(&self) -> &str {
        KinematicRecord::vessel_id(self)
    }

    fn position(&self) -> (f64, f64) {
        KinematicRecord::position(self)
    }
}

/// Polygon ready for containment tests, built once per refresh.
///
#[derive(Clone, Debug)]
pub struct Fence {
    polygon: Polygon<f64>,
}

impl From<&Geofence> for Fence {
    fn from(value: &Geofence) -> Self {
        let ring: Vec<(f64, f64)> = value.vertices().iter().map(|&(lat, lon)| (lon, lat)).collect();
        // `Polygon::new` closes the ring
        let polygon = Polygon::new(LineString::from(ring), vec![]);
        Self { polygon }
    }
}

impl Fence {
    /// Strictly inside?
    ///
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.polygon.contains(&Point::new(lon, lat))
    }

    #[inline]
    pub fn contains_item<T: Located>(&self, item: &T) -> bool {
        let (lat, lon) = item.position();
        self.contains(lat, lon)
    }

    /// Keep every point inside, order is preserved.
    ///
    #[tracing::instrument(skip_all)]
    pub fn filter_points<T: Located + Clone>(&self, items: &[T]) -> Vec<T> {
        let res: Vec<T> = items
            .iter()
            .filter(|item| self.contains_item(*item))
            .cloned()
            .collect();
        debug!("{}/{} points inside", res.len(), items.len());
        res
    }

    /// Vessels whose latest point is inside.
    ///
    /// Tracks are expected in chronological order, empty ones are ignored.
    ///
    #[tracing::instrument(skip_all)]
    pub fn filter_vessels_by_last_point<T: Located>(
        &self,
        tracks: &BTreeMap<String, Vec<T>>,
    ) -> BTreeSet<String> {
        tracks
            .iter()
            .filter(|(_, track)| track.last().is_some_and(|last| self.contains_item(last)))
            .map(|(id, _)| id.clone())
            .collect()
    }
}
