use std::fs;

use eyre::Result;
use serde::Serialize;
use tracing::trace;

use fairway_engine::{refresh, render_table, CircleMarker, Polyline, RefreshRequest};
use fairway_formats::Geofence;

use crate::{load_snapshot, Config, ViewOpts};

/// What a map would draw for one vessel.
///
#[derive(Debug, Serialize)]
struct Drawable {
    vessel: String,
    polyline: Polyline,
    marker: CircleMarker,
}

/// Summary then either the table view or the drawable tracks in JSON.
///
#[tracing::instrument(skip(cfg))]
pub fn view_snapshot(opts: &ViewOpts, cfg: &Config) -> Result<String> {
    let (window, sources, snapshot) = load_snapshot(&opts.snapshot, cfg)?;

    let geofence = match &opts.geofence {
        Some(fname) => Some(Geofence::from_geojson(&fs::read_to_string(fname)?)?),
        None => None,
    };
    trace!("geofence = {geofence:?}");

    let header = format!("Sources: {sources}");
    let request = RefreshRequest {
        geofence,
        sources,
        selection: opts.selection.clone(),
        horizon_minutes: cfg.horizon_minutes,
        colors: cfg.color_policy(),
        ..RefreshRequest::default()
    };
    let res = refresh(&snapshot, &request)?;

    if opts.json {
        let drawables: Vec<_> = res
            .tracks
            .iter()
            .map(|t| Drawable {
                vessel: t.vessel_id.clone(),
                polyline: t.polyline(),
                marker: t.marker(),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&drawables)?);
    }

    let mut out = vec![res.current_time(), window.describe(), header, res.summary()];
    if !res.table.is_empty() {
        out.push(render_table(&res.table));
    }
    Ok(out.join("\n"))
}
