//! Module handling time windows expressed in epoch seconds.
//!
//! A window is what the control surface hands over to the storage layer: either an explicit
//! couple of epochs (the range slider) or a look-back period ending now.
//!

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format used everywhere for timestamps.
pub const DATE_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an epoch as `YYYY-MM-DD HH:MM:SS` (UTC), `None` if chrono can not represent it.
///
pub fn format_epoch(epoch: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(epoch, 0).map(|t| t.format(DATE_FMT).to_string())
}

/// Inclusive interval of epoch seconds.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimeWindow {
    pub begin: i64,
    pub end: i64,
}

impl TimeWindow {
    /// From two time points, reordered if needed.
    ///
    pub fn new(begin: i64, end: i64) -> Self {
        if begin <= end {
            Self { begin, end }
        } else {
            Self {
                begin: end,
                end: begin,
            }
        }
    }

    /// Everything before and after.
    ///
    pub fn unbounded() -> Self {
        Self {
            begin: i64::MIN,
            end: i64::MAX,
        }
    }

    /// The last `hours` hours ending at `now`.
    ///
    pub fn last_hours(now: i64, hours: f64) -> Self {
        let span = (hours.max(0.) * 3600.).round() as i64;
        Self::new(now.saturating_sub(span), now)
    }

    /// Same as `last_hours()` from the wall clock.
    ///
    pub fn since_hours(hours: f64) -> Self {
        Self::last_hours(Utc::now().timestamp(), hours)
    }

    #[inline]
    pub fn contains(&self, epoch: i64) -> bool {
        self.begin <= epoch && epoch <= self.end
    }

    /// Human readable version, as shown under the slider.
    ///
    pub fn describe(&self) -> String {
        let show = |e: i64| format_epoch(e).unwrap_or_else(|| e.to_string());
        format!(
            "Selected Datetime Range: {} to {}",
            show(self.begin),
            show(self.end)
        )
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "1970-01-01 00:00:00")]
    #[case(1_000_000_000, "2001-09-09 01:46:40")]
    #[case(1_700_000_000, "2023-11-14 22:13:20")]
    fn test_format_epoch(#[case] epoch: i64, #[case] out: &str) {
        assert_eq!(Some(out.to_string()), format_epoch(epoch));
    }

    #[test]
    fn test_format_epoch_out_of_range() {
        assert!(format_epoch(i64::MAX).is_none());
    }

    #[rstest]
    #[case(10, 20, 10, true)]
    #[case(10, 20, 20, true)]
    #[case(10, 20, 21, false)]
    #[case(20, 10, 15, true)]
    fn test_window_contains(
        #[case] b: i64,
        #[case] e: i64,
        #[case] t: i64,
        #[case] res: bool,
    ) {
        assert_eq!(res, TimeWindow::new(b, e).contains(t));
    }

    #[test]
    fn test_window_last_hours() {
        let w = TimeWindow::last_hours(1_700_000_000, 1.5);
        assert_eq!(1_700_000_000 - 5400, w.begin);
        assert_eq!(1_700_000_000, w.end);
    }

    #[test]
    fn test_window_since_hours() {
        let before = Utc::now().timestamp();
        let w = TimeWindow::since_hours(2.);
        let after = Utc::now().timestamp();

        assert!(before <= w.end && w.end <= after);
        assert_eq!(7200, w.end - w.begin);
    }

    #[test]
    fn test_window_describe() {
        let w = TimeWindow::new(1_000_000_000, 1_000_003_600);
        assert_eq!(
            "Selected Datetime Range: 2001-09-09 01:46:40 to 2001-09-09 02:46:40",
            w.describe()
        );
    }
}
