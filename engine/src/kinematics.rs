//! Speed, course and distance between consecutive reports of a track.
//!
//! Distances use the haversine formula on a sphere of radius 6371 km, course is the initial
//! great-circle bearing.  Nothing is rounded here, rounding is a display concern and the
//! projector needs the raw course.
//!

use std::collections::BTreeMap;

use fairway_formats::{KinematicRecord, Track};
use rayon::prelude::*;
use tracing::trace;

/// Mean Earth radius in km
pub const EARTH_RADIUS_KM: f64 = 6371.;

/// km/h to knots
pub const KMH_TO_KNOTS: f64 = 0.539957;

/// Great-circle distance in km, all arguments in degrees.
///
/// Argument order is (lon, lat) as for every x/y pair.
///
pub fn haversine(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lon1, lat1, lon2, lat2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );

    let d_lon = lon2 - lon1;
    let d_lat = lat2 - lat1;

    let a = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.).sin().powi(2);
    // Rounding can push `a` slightly above 1 for antipodal points
    let c = 2. * a.sqrt().min(1.).asin();
    c * EARTH_RADIUS_KM
}

/// Initial compass bearing from the first point to the second, in [0, 360).
///
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (x.atan2(y).to_degrees() + 360.) % 360.
}

/// Enrich every report of the track, output has the same length and order.
///
#[tracing::instrument(skip(track), fields(vessel = track.vessel_id(), len = track.len()))]
pub fn kinematics(track: &Track) -> Vec<KinematicRecord> {
    let reports = track.reports();

    let Some(first) = reports.first() else {
        return vec![];
    };

    let mut res = Vec::with_capacity(reports.len());
    res.push(KinematicRecord::first(first.clone()));

    for pair in reports.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);

        let distance = haversine(prev.longitude, prev.latitude, cur.longitude, cur.latitude);
        let dt = cur.timestamp - prev.timestamp;

        // Same timestamp (or duplicates) means no speed
        //
        let speed = if dt > 0 {
            distance / (dt as f64 / 3600.) * KMH_TO_KNOTS
        } else {
            0.
        };
        let course = initial_bearing(prev.latitude, prev.longitude, cur.latitude, cur.longitude);

        res.push(KinematicRecord {
            report: cur.clone(),
            distance_km: Some(distance),
            speed_knots: speed,
            course_degrees: course,
        });
    }
    trace!("{} records", res.len());
    res
}

/// Same as `kinematics()` over every vessel, vessels are independent so this runs in parallel.
///
pub fn kinematics_all(tracks: &BTreeMap<String, Track>) -> BTreeMap<String, Vec<KinematicRecord>> {
    tracks
        .par_iter()
        .map(|(id, track)| (id.clone(), kinematics(track)))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use fairway_formats::PositionReport;
    use geo::{point, HaversineDistance};
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn track(points: &[(i64, f64, f64)]) -> Track {
        let reports = points
            .iter()
            .map(|&(t, lat, lon)| PositionReport::new("AIS", "ALPHA", t, lat, lon))
            .collect();
        Track::new("ALPHA", reports)
    }

    #[rstest]
    #[case::north(0., 0., 1., 0., 0.)]
    #[case::east(0., 0., 0., 1., 90.)]
    #[case::south(1., 0., 0., 0., 180.)]
    #[case::west(0., 1., 0., 0., 270.)]
    fn test_bearing_cardinal(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
        #[case] exp: f64,
    ) {
        let b = initial_bearing(lat1, lon1, lat2, lon2);
        assert_abs_diff_eq!(exp, b, epsilon = 1e-9);
    }

    #[test]
    fn test_haversine_one_degree() {
        let d = haversine(0., 0., 0., 1.);
        assert_abs_diff_eq!(EARTH_RADIUS_KM.to_radians(), d, epsilon = 1e-9);
    }

    #[test]
    fn test_haversine_same_as_geo() {
        // geo uses 6371.0088 km
        let d = haversine(2.319671, 48.573174, 2.303015, 48.566757);
        let p1 = point!(x: 2.319671, y: 48.573174);
        let p2 = point!(x: 2.303015, y: 48.566757);
        let g = p1.haversine_distance(&p2) / 1000.;
        assert_abs_diff_eq!(g, d, epsilon = 1e-3);
    }

    #[test]
    fn test_kinematics_alpha() {
        let t = track(&[(1000, 1.0, 103.0), (1600, 1.01, 103.01)]);
        let k = kinematics(&t);

        assert_eq!(2, k.len());
        assert!(!k[0].has_speed());
        assert_eq!(0., k[0].course_degrees);

        let d = k[1].distance_km.unwrap();
        assert_abs_diff_eq!(1.5724, d, epsilon = 1e-4);
        // Haversine with R = 6371 km gives 1.5724 km, hence 5.0942 kn over 10 minutes
        // (not the 1.568 km / 1.693 kn sometimes quoted for this track)
        assert_abs_diff_eq!(5.0942, k[1].speed_knots, epsilon = 1e-4);
        assert!((40. ..50.).contains(&k[1].course_degrees));
    }

    #[test]
    fn test_kinematics_single_point() {
        let k = kinematics(&track(&[(1_000_000_000, 1.0, 103.0)]));
        assert_eq!(1, k.len());
        assert!(k[0].speed_knots.is_nan());
        assert!(k[0].distance_km.is_none());
        assert_eq!(0., k[0].course_degrees);
    }

    #[test]
    fn test_kinematics_duplicate_timestamp() {
        let k = kinematics(&track(&[(1_000_000_000, 1.0, 103.0), (1_000_000_000, 1.1, 103.0)]));
        assert_eq!(2, k.len());
        assert_eq!(0., k[1].speed_knots);
        assert!(k[1].distance_km.unwrap() > 0.);
    }

    #[test]
    fn test_kinematics_empty() {
        assert!(kinematics(&Track::new("NONE", vec![])).is_empty());
    }

    proptest! {
        #[test]
        fn prop_haversine_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = haversine(lon1, lat1, lon2, lat2);
            let b = haversine(lon2, lat2, lon1, lat1);
            prop_assert!((a - b).abs() < 1e-9);
            prop_assert!(a >= 0.);
        }

        #[test]
        fn prop_haversine_identity(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert_eq!(0., haversine(lon, lat, lon, lat));
        }

        #[test]
        fn prop_bearing_in_range(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let b = initial_bearing(lat1, lon1, lat2, lon2);
            prop_assert!((0. ..360.).contains(&b));
        }
    }
}
