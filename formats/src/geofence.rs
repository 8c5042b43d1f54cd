//! User-drawn polygon used to restrict the view.
//!
//! Vertices are kept as `(lat, lon)` like every other position we handle, closure is implicit.
//! The drawing layer speaks GeoJSON, that is `[lon, lat]` rings, explicitly closed.
//!

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::Status;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Geofence {
    vertices: Vec<(f64, f64)>,
}

impl Geofence {
    /// Build from `(lat, lon)` vertices, we need at least a triangle.
    ///
    /// An explicitly closed ring loses its closing vertex before being counted.
    ///
    pub fn new(mut vertices: Vec<(f64, f64)>) -> Result<Self, Status> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            return Err(Status::InvalidGeofence(vertices.len()));
        }
        if let Some(&(lat, lon)) = vertices
            .iter()
            .find(|(lat, lon)| !(-90.0..=90.0).contains(lat) || !(-180.0..=180.0).contains(lon))
        {
            return Err(Status::InvalidVertex(lat, lon));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Take the last polygon drawn from a GeoJSON document.
    ///
    /// Accept a `FeatureCollection`, a single `Feature` or a bare `Polygon` geometry.
    ///
    #[tracing::instrument(skip(input))]
    pub fn from_geojson(input: &str) -> Result<Self, Status> {
        let doc: Value =
            serde_json::from_str(input).map_err(|e| Status::BadGeoJson(e.to_string()))?;

        let geometry = match doc["type"].as_str() {
            Some("FeatureCollection") => doc["features"]
                .as_array()
                .and_then(|f| f.iter().rev().find(|f| is_polygon(&f["geometry"])))
                .map(|f| &f["geometry"]),
            Some("Feature") => Some(&doc["geometry"]).filter(|g| is_polygon(g)),
            Some("Polygon") => Some(&doc),
            _ => None,
        }
        .ok_or_else(|| Status::BadGeoJson("no polygon found".to_string()))?;

        // Outer ring only
        //
        let ring = geometry["coordinates"][0]
            .as_array()
            .ok_or_else(|| Status::BadGeoJson("no outer ring".to_string()))?;

        let vertices = ring
            .iter()
            .map(|pos| match (pos[0].as_f64(), pos[1].as_f64()) {
                (Some(lon), Some(lat)) => Ok((lat, lon)),
                _ => Err(Status::BadGeoJson(format!("bad position {pos}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        trace!("ring = {vertices:?}");
        debug!("{} positions in ring", vertices.len());
        Geofence::new(vertices)
    }
}

fn is_polygon(geometry: &Value) -> bool {
    geometry["type"].as_str() == Some("Polygon")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(vec![(0., 0.), (1., 1.)])]
    #[case(vec![(0., 0.), (1., 1.), (0., 0.)])]
    fn test_geofence_too_small(#[case] vertices: Vec<(f64, f64)>) {
        assert_eq!(Err(Status::InvalidGeofence(2)), Geofence::new(vertices));
    }

    #[test]
    fn test_geofence_closed_ring() {
        let g = Geofence::new(vec![(0., 0.), (0., 10.), (10., 10.), (0., 0.)]).unwrap();
        assert_eq!(&[(0., 0.), (0., 10.), (10., 10.)], g.vertices());
    }

    #[rstest]
    #[case((f64::NAN, 0.))]
    #[case((0., f64::NAN))]
    #[case((91., 0.))]
    #[case((0., -181.))]
    fn test_geofence_bad_vertex(#[case] bad: (f64, f64)) {
        let r = Geofence::new(vec![(0., 0.), (0., 10.), bad]);
        assert!(matches!(r, Err(Status::InvalidVertex(_, _))));
    }

    #[test]
    fn test_geofence_from_collection_takes_last() {
        let input = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}},
                {"type": "Feature", "geometry": {"type": "Polygon", "coordinates": [[[103.7,1.2],[103.9,1.2],[103.9,1.4],[103.7,1.4],[103.7,1.2]]]}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [5,5]}}
            ]
        }"#;
        let g = Geofence::from_geojson(input).unwrap();
        assert_eq!(
            &[(1.2, 103.7), (1.2, 103.9), (1.4, 103.9), (1.4, 103.7)],
            g.vertices()
        );
    }

    #[test]
    fn test_geofence_from_bare_polygon() {
        let input = r#"{"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10]]]}"#;
        let g = Geofence::from_geojson(input).unwrap();
        assert_eq!(&[(0., 0.), (0., 10.), (10., 10.)], g.vertices());
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"type": "Point", "coordinates": [0, 0]}"#)]
    #[case(r#"{"type": "FeatureCollection", "features": []}"#)]
    #[case(r#"{"type": "Polygon", "coordinates": [[[0,"a"],[1,1],[2,2]]]}"#)]
    fn test_geofence_bad_geojson(#[case] input: &str) {
        assert!(matches!(
            Geofence::from_geojson(input),
            Err(Status::BadGeoJson(_))
        ));
    }

    #[test]
    fn test_geofence_degenerate_ring() {
        let input = r#"{"type": "Polygon", "coordinates": [[[0,0],[1,1],[0,0]]]}"#;
        assert_eq!(Err(Status::InvalidGeofence(2)), Geofence::from_geojson(input));
    }
}
