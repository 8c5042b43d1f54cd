//! Group raw reports into per-vessel tracks.
//!

use std::collections::BTreeMap;

use fairway_formats::{PositionReport, Status, Track};
use tracing::debug;

/// Validate every report then group by vessel, each group sorted by timestamp.
///
/// Duplicated timestamps are kept, in input order.  One bad report fails the whole batch.
///
#[tracing::instrument(skip(reports))]
pub fn normalize<I>(reports: I) -> Result<BTreeMap<String, Track>, Status>
where
    I: IntoIterator<Item = PositionReport>,
{
    let mut groups: BTreeMap<String, Vec<PositionReport>> = BTreeMap::new();

    for report in reports {
        report.validate()?;
        groups.entry(report.vessel_id.clone()).or_default().push(report);
    }
    debug!("{} vessels", groups.len());

    Ok(groups
        .into_iter()
        .map(|(id, reports)| {
            let track = Track::new(&id, reports);
            (id, track)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(src: &str, vessel: &str, t: i64) -> PositionReport {
        PositionReport::new(src, vessel, t, 1.3, 103.8)
    }

    #[test]
    fn test_normalize_groups_and_sorts() -> Result<(), Status> {
        let tracks = normalize(vec![
            report("AIS", "BRAVO", 1_000_000_300),
            report("AIS", "ALPHA", 1_000_000_200),
            report("AIS", "BRAVO", 1_000_000_100),
            report("AIS", "ALPHA", 1_000_000_100),
        ])?;

        assert_eq!(vec!["ALPHA", "BRAVO"], tracks.keys().map(String::as_str).collect::<Vec<_>>());
        let ts: Vec<_> = tracks["BRAVO"].reports().iter().map(|r| r.timestamp).collect();
        assert_eq!(vec![1_000_000_100, 1_000_000_300], ts);
        Ok(())
    }

    #[test]
    fn test_normalize_keeps_duplicates() -> Result<(), Status> {
        let tracks = normalize(vec![
            report("RADAR", "ALPHA", 1_000_000_100),
            report("AIS", "ALPHA", 1_000_000_100),
        ])?;
        let src: Vec<_> = tracks["ALPHA"].reports().iter().map(|r| r.source.as_str()).collect();
        assert_eq!(vec!["RADAR", "AIS"], src);
        Ok(())
    }

    #[test]
    fn test_normalize_empty() -> Result<(), Status> {
        assert!(normalize(Vec::<PositionReport>::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_normalize_bad_report() {
        let r = normalize(vec![report("AIS", "ALPHA", 1_000_000_100), report("AIS", "ALPHA", 42)]);
        assert!(matches!(r, Err(Status::InvalidReport(_))));
    }
}
