//! Rows for the CSV download.
//!

use std::collections::{BTreeMap, BTreeSet};

use fairway_formats::{ExportRow, KinematicRecord, Status};
use tracing::debug;

/// Every record of the selected vessels, grouped in selection order and chronological within a
/// vessel.  Unknown vessels are skipped, a vessel selected twice is exported once.
///
#[tracing::instrument(skip(tracks))]
pub fn export_rows(
    tracks: &BTreeMap<String, Vec<KinematicRecord>>,
    selection: &[String],
) -> Result<Vec<ExportRow>, Status> {
    let mut seen = BTreeSet::new();

    let rows = selection
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| tracks.get(id))
        .flatten()
        .map(ExportRow::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("{} rows", rows.len());
    Ok(rows)
}
