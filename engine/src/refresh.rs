//! One full recomputation from a snapshot.
//!
//! Nothing is kept between calls, the host calls `refresh()` on whatever schedule it likes
//! (timer, user action) with the latest snapshot and control-surface state.
//!

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use fairway_formats::{ExportRow, Geofence, KinematicRecord, Status};
use tracing::{debug, trace};

use crate::{
    build_tracks, export_rows, fmt_course, fmt_speed, fmt_time, kinematics_all, normalize, project,
    table_view, trajectory_line, ColorPolicy, Fence, Polyline, RenderableTrack, Snapshot,
    SourceFilter, TableRow, Trajectory, DEFAULT_HORIZON_MINUTES,
};

/// State of the control surface for one refresh.
///
#[derive(Clone, Debug)]
pub struct RefreshRequest {
    /// No geofence means no spatial restriction
    pub geofence: Option<Geofence>,
    pub sources: SourceFilter,
    /// Vessels picked for display and export, in selection order
    pub selection: Vec<String>,
    /// Vessel whose marker was clicked
    pub focus: Option<String>,
    pub horizon_minutes: f64,
    pub colors: ColorPolicy,
}

impl Default for RefreshRequest {
    fn default() -> Self {
        Self {
            geofence: None,
            sources: SourceFilter::All,
            selection: vec![],
            focus: None,
            horizon_minutes: DEFAULT_HORIZON_MINUTES,
            colors: ColorPolicy::default(),
        }
    }
}

/// Details about the focused vessel.
///
#[derive(Clone, Debug)]
pub struct FocusInfo {
    pub latest: KinematicRecord,
    /// `None` when the speed is unknown
    pub trajectory: Option<Trajectory>,
}

impl FocusInfo {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Selected Vessel: {}", self.latest.vessel_id()),
            format!("Source: {}", self.latest.source()),
            format!("Current Speed: {} knots", fmt_speed(self.latest.speed_knots)),
            format!("Current Course: {}", fmt_course(self.latest.course_degrees)),
            format!("Last Update: {}", fmt_time(self.latest.timestamp())),
        ]
    }

    pub fn trajectory_line(&self) -> Option<Polyline> {
        self.trajectory.as_ref().map(trajectory_line)
    }
}

#[derive(Clone, Debug)]
pub struct RefreshResult {
    pub tracks: Vec<RenderableTrack>,
    pub table: Vec<TableRow>,
    pub export: Vec<ExportRow>,
    pub vessels_in_view: usize,
    pub focus: Option<FocusInfo>,
    /// Wall clock, display only
    pub generated_at: DateTime<Utc>,
}

impl RefreshResult {
    pub fn summary(&self) -> String {
        format!("Vessels in view: {}", self.vessels_in_view)
    }

    pub fn current_time(&self) -> String {
        format!("Current Time: {}", self.generated_at.format(fairway_common::DATE_FMT))
    }
}

/// Recompute everything from `snapshot`.
///
pub fn refresh(snapshot: &Snapshot, request: &RefreshRequest) -> Result<RefreshResult, Status> {
    refresh_at(snapshot, request, Utc::now())
}

/// Same as `refresh()` with an explicit wall clock.
///
#[tracing::instrument(skip_all, fields(reports = snapshot.reports.len()))]
pub fn refresh_at(
    snapshot: &Snapshot,
    request: &RefreshRequest,
    now: DateTime<Utc>,
) -> Result<RefreshResult, Status> {
    // Kinematics are computed over every source, the filter only applies to what is shown
    //
    let tracks = normalize(snapshot.reports.iter().cloned())?;
    let enriched = kinematics_all(&tracks);

    let visible: BTreeMap<String, Vec<KinematicRecord>> = enriched
        .into_iter()
        .map(|(id, recs)| {
            let recs: Vec<_> = recs
                .into_iter()
                .filter(|r| request.sources.matches(r.source()))
                .collect();
            (id, recs)
        })
        .filter(|(_, recs)| !recs.is_empty())
        .collect();
    trace!("{} vessels after source filter {}", visible.len(), request.sources);

    let in_view: BTreeMap<String, Vec<KinematicRecord>> = match &request.geofence {
        Some(geofence) => {
            let fence = Fence::from(geofence);
            visible
                .iter()
                .map(|(id, recs)| (id.clone(), fence.filter_points(recs)))
                .filter(|(_, recs)| !recs.is_empty())
                .collect()
        }
        None => visible.clone(),
    };
    debug!("{} vessels in view", in_view.len());

    let table = table_view(in_view.values().filter_map(|recs| recs.last()));

    // Draw order, also the color index
    //
    let order: Vec<&str> = if request.selection.is_empty() {
        in_view.keys().map(String::as_str).collect()
    } else {
        let mut seen = BTreeSet::new();
        request
            .selection
            .iter()
            .map(String::as_str)
            .filter(|id| in_view.contains_key(*id) && seen.insert(*id))
            .collect()
    };
    let rendered = build_tracks(
        order.iter().map(|&id| (id, in_view[id].as_slice())),
        &request.colors,
    );

    let export = export_rows(&visible, &request.selection)?;

    let focus = request
        .focus
        .as_ref()
        .and_then(|id| visible.get(id))
        .and_then(|recs| recs.last())
        .map(|latest| FocusInfo {
            trajectory: project(latest, request.horizon_minutes).ok(),
            latest: latest.clone(),
        });

    Ok(RefreshResult {
        tracks: rendered,
        table,
        export,
        vessels_in_view: in_view.len(),
        focus,
        generated_at: now,
    })
}
