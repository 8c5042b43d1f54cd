use eyre::{eyre, Result};

use fairway_engine::{refresh, RefreshRequest};

use crate::{load_snapshot, Config, ProjectOpts};

/// Focus lines of one vessel followed by its projected path.
///
#[tracing::instrument(skip(cfg))]
pub fn project_vessel(opts: &ProjectOpts, cfg: &Config) -> Result<String> {
    let (_, sources, snapshot) = load_snapshot(&opts.snapshot, cfg)?;

    let horizon = opts.minutes.unwrap_or(cfg.horizon_minutes);
    let request = RefreshRequest {
        sources,
        focus: Some(opts.vessel.clone()),
        horizon_minutes: horizon,
        ..RefreshRequest::default()
    };
    let res = refresh(&snapshot, &request)?;

    let focus = res
        .focus
        .ok_or_else(|| eyre!("no report for {} in this window", opts.vessel))?;

    let mut lines = focus.lines();
    match &focus.trajectory {
        Some(t) => {
            let [(lat1, lon1), (lat2, lon2)] = t.path();
            lines.push(format!(
                "Projected Path ({horizon} min): {lat1:.5},{lon1:.5} -> {lat2:.5},{lon2:.5}"
            ));
        }
        None => lines.push("Projected Path: N/A".to_string()),
    }
    Ok(lines.join("\n"))
}
