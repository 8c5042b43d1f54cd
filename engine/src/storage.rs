//! Boundary with the storage layer.
//!
//! The engine never sees a transport error: a failed fetch is logged and becomes an empty
//! snapshot, everything downstream then degrades to empty views.
//!

use std::fmt::Debug;
use std::fs::File;
use std::path::{Path, PathBuf};

use eyre::Result;
use fairway_common::TimeWindow;
use fairway_formats::PositionReport;
use tracing::{debug, trace, warn};

use crate::SourceFilter;

/// Anything able to give us the reports of a time window.
///
pub trait ReportStore: Debug {
    fn fetch_reports(
        &self,
        window: &TimeWindow,
        sources: &SourceFilter,
    ) -> Result<Vec<PositionReport>>;
}

/// The raw reports one refresh works on.
///
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub reports: Vec<PositionReport>,
}

impl Snapshot {
    pub fn new(reports: Vec<PositionReport>) -> Self {
        Self { reports }
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Fetch from `store`, absorbing failures.
///
#[tracing::instrument(skip(store))]
pub fn fetch_snapshot(store: &dyn ReportStore, window: &TimeWindow, sources: &SourceFilter) -> Snapshot {
    match store.fetch_reports(window, sources) {
        Ok(reports) => {
            debug!("got {} reports", reports.len());
            Snapshot::new(reports)
        }
        Err(e) => {
            warn!("fetch failed, using empty snapshot: {e}");
            Snapshot::default()
        }
    }
}

/// A CSV dump of the `vessel_tracks` table.
///
/// Columns are `source,vesselname,sourcedatetime,latitude,longitude`, in any order.
///
#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Everything in the file, no filtering.
    ///
    #[tracing::instrument]
    pub fn read_all(&self) -> Result<Vec<PositionReport>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(File::open(&self.path)?);

        let reports = rdr
            .deserialize::<PositionReport>()
            .collect::<Result<Vec<_>, _>>()?;
        trace!("read {} reports from {:?}", reports.len(), self.path);
        Ok(reports)
    }
}

impl ReportStore for CsvStore {
    #[tracing::instrument]
    fn fetch_reports(
        &self,
        window: &TimeWindow,
        sources: &SourceFilter,
    ) -> Result<Vec<PositionReport>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|r| window.contains(r.timestamp) && sources.matches(&r.source))
            .collect())
    }
}
