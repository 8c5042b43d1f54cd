use std::path::Path;

use eyre::Result;

use fairway_engine::{sources, vessels, CsvStore};

use crate::{resolve_window, Config, SnapshotOpts};

/// All the sources in the file, one per line.
///
pub fn list_sources(file: &Path) -> Result<String> {
    let reports = CsvStore::new(file).read_all()?;
    Ok(sources(&reports).into_iter().collect::<Vec<_>>().join("\n"))
}

/// Vessels seen during the window, one per line.
///
pub fn list_vessels(opts: &SnapshotOpts, cfg: &Config) -> Result<String> {
    let store = CsvStore::new(&opts.file);
    let window = resolve_window(&store, opts, cfg)?;
    let filter = cfg.source_filter(&opts.sources);

    let reports: Vec<_> = store
        .read_all()?
        .into_iter()
        .filter(|r| filter.matches(&r.source))
        .collect();
    Ok(vessels(&reports, &window).into_iter().collect::<Vec<_>>().join("\n"))
}
