//! Turn enriched tracks into things the rendering layer can draw.
//!
//! Primitives carry only geometry and style, nothing here knows about a given map library.
//!

use fairway_formats::KinematicRecord;
use serde::Serialize;

use crate::Trajectory;

pub use color::*;
pub use export::*;
pub use table::*;

mod color;
mod export;
mod table;

/// Styled line, positions as `(lat, lon)`.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline {
    pub positions: Vec<(f64, f64)>,
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    /// Dash pattern, e.g. `10,5`
    pub dash: Option<String>,
}

/// Marker for the last known position.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CircleMarker {
    pub center: (f64, f64),
    pub radius: u32,
    pub color: String,
    pub fill_opacity: f64,
    pub tooltip: String,
}

/// One vessel ready to be drawn.
///
#[derive(Clone, Debug, Serialize)]
pub struct RenderableTrack {
    pub vessel_id: String,
    pub color: String,
    pub coordinates: Vec<(f64, f64)>,
    pub last_position: KinematicRecord,
    pub tooltip: String,
}

impl RenderableTrack {
    /// `None` for an empty track.
    ///
    pub fn new(records: &[KinematicRecord], color: String) -> Option<Self> {
        let last = records.last()?;
        Some(RenderableTrack {
            vessel_id: last.vessel_id().to_string(),
            color,
            coordinates: records.iter().map(|r| r.position()).collect(),
            tooltip: tooltip(last),
            last_position: last.clone(),
        })
    }

    pub fn polyline(&self) -> Polyline {
        Polyline {
            positions: self.coordinates.clone(),
            color: self.color.clone(),
            weight: 3,
            opacity: 0.7,
            dash: None,
        }
    }

    pub fn marker(&self) -> CircleMarker {
        CircleMarker {
            center: self.last_position.position(),
            radius: 6,
            color: self.color.clone(),
            fill_opacity: 0.8,
            tooltip: self.tooltip.clone(),
        }
    }
}

/// `Vessel: X | Bearing: 45.0° | Source: AIS | Last Reported: 2024-01-01 00:00:00`
///
pub fn tooltip(rec: &KinematicRecord) -> String {
    format!(
        "Vessel: {} | Bearing: {} | Source: {} | Last Reported: {}",
        rec.vessel_id(),
        fmt_course(rec.course_degrees),
        rec.source(),
        fmt_time(rec.timestamp())
    )
}

/// Build tracks in the given order, the color index is the position in that order.
///
/// Empty tracks are skipped but still consume their index.
///
pub fn build_tracks<'a, I>(ordered: I, policy: &ColorPolicy) -> Vec<RenderableTrack>
where
    I: IntoIterator<Item = (&'a str, &'a [KinematicRecord])>,
{
    ordered
        .into_iter()
        .enumerate()
        .filter_map(|(idx, (id, records))| RenderableTrack::new(records, policy.color(idx, id)))
        .collect()
}

/// Dashed red line for the projected path.
///
pub fn trajectory_line(traj: &Trajectory) -> Polyline {
    Polyline {
        positions: traj.path().to_vec(),
        color: "red".to_string(),
        weight: 2,
        opacity: 0.7,
        dash: Some("10,5".to_string()),
    }
}
