//! Short-horizon linear extrapolation of a vessel position.
//!
//! This is a flat-Earth (equirectangular) step from the current position along the current
//! course.  It degrades near the poles where `cos(lat)` goes to 0 and is not meant to handle
//! the anti-meridian, both are left as is.
//!

use std::f64::consts::PI;

use fairway_formats::{KinematicRecord, Status};
use serde::Serialize;
use tracing::trace;

/// Earth radius used by the projection, in km
pub const PROJECTION_RADIUS_KM: f64 = 6378.1;

/// knots to km/h
pub const KNOTS_TO_KMH: f64 = 1.852;

/// Default horizon
pub const DEFAULT_HORIZON_MINUTES: f64 = 30.;

/// Two-point path, `(lat, lon)` each.
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Trajectory {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Trajectory {
    pub fn path(&self) -> [(f64, f64); 2] {
        [self.from, self.to]
    }
}

/// Project `record` `horizon_minutes` ahead.
///
/// Fails with `NoKinematics` when the speed is not known (first report of a track).
///
#[tracing::instrument(skip(record), fields(vessel = record.vessel_id()))]
pub fn project(record: &KinematicRecord, horizon_minutes: f64) -> Result<Trajectory, Status> {
    if !record.has_speed() || record.course_degrees.is_nan() {
        return Err(Status::NoKinematics(record.vessel_id().to_string()));
    }

    let (lat, lon) = record.position();

    let speed_kmh = record.speed_knots * KNOTS_TO_KMH;
    // Compass (0 = north, clockwise) to math angle (0 = east, counter-clockwise)
    let heading = (90. - record.course_degrees) * (PI / 180.);

    let distance = speed_kmh * (horizon_minutes / 60.) / PROJECTION_RADIUS_KM;

    // Latitude follows cos(heading), longitude sin(heading), as the map layer expects: a
    // course of 90 is drawn northward and a course of 0 eastward.
    let new_lat = lat + (distance * heading.cos()) * (180. / PI);
    let new_lon = lon + (distance * heading.sin() / (lat * (PI / 180.)).cos()) * (180. / PI);
    trace!("({lat}, {lon}) -> ({new_lat}, {new_lon})");

    Ok(Trajectory {
        from: (lat, lon),
        to: (new_lat, new_lon),
    })
}
