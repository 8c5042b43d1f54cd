//! Tabular export of the selected vessels.
//!

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};
use eyre::Result;
use fairway_common::format_epoch;
use serde::Serialize;

use crate::{KinematicRecord, Status};

/// One line of the CSV download.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Vessel Name")]
    pub vessel: String,
    #[serde(rename = "Datetime")]
    pub datetime: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl TryFrom<&KinematicRecord> for ExportRow {
    type Error = Status;

    fn try_from(rec: &KinematicRecord) -> Result<Self, Self::Error> {
        let datetime = format_epoch(rec.timestamp()).ok_or(Status::BadTimestamp(rec.timestamp()))?;
        Ok(ExportRow {
            vessel: rec.vessel_id().to_string(),
            datetime,
            latitude: rec.report.latitude,
            longitude: rec.report.longitude,
        })
    }
}

/// Write rows with the header `Vessel Name,Datetime,Latitude,Longitude`.
///
/// The header is always written, even without rows.
///
#[tracing::instrument(skip(rows, out))]
pub fn write_csv<W: Write>(rows: &[ExportRow], out: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(out);

    wtr.write_record(["Vessel Name", "Datetime", "Latitude", "Longitude"])?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
