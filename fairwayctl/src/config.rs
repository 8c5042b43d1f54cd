//! Configuration of `fairwayctl`.
//!
//! ```hcl
//! version = 1
//!
//! window_hours    = 2
//! horizon_minutes = 30
//! sources         = ["AIS", "RADAR"]
//!
//! colors {
//!   kind      = "highlight"
//!   vessels   = ["ALPHA"]
//!   highlight = "red"
//!   default   = "blue"
//! }
//! ```
//!

use serde::Deserialize;
use strum::{Display, EnumString};
use tracing::debug;

use fairway_common::Versioned;
use fairway_engine::{ColorPolicy, SourceFilter, DEFAULT_HORIZON_MINUTES};

/// Look-back when nothing is said
pub const DEFAULT_WINDOW_HOURS: f64 = 1.;

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, EnumString, PartialEq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorKind {
    #[default]
    Palette,
    Highlight,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Colors {
    #[serde(default)]
    pub kind: ColorKind,
    #[serde(default)]
    pub vessels: Vec<String>,
    pub highlight: Option<String>,
    pub default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: usize,
    #[serde(default = "default_window")]
    pub window_hours: f64,
    #[serde(default = "default_horizon")]
    pub horizon_minutes: f64,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub colors: Colors,
}

fn default_window() -> f64 {
    DEFAULT_WINDOW_HOURS
}

fn default_horizon() -> f64 {
    DEFAULT_HORIZON_MINUTES
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: Self::CVERSION,
            window_hours: DEFAULT_WINDOW_HOURS,
            horizon_minutes: DEFAULT_HORIZON_MINUTES,
            sources: vec![],
            colors: Colors::default(),
        }
    }
}

impl Versioned for Config {
    const CVERSION: usize = 1;

    fn version(&self) -> usize {
        self.version
    }
}

impl Config {
    pub fn color_policy(&self) -> ColorPolicy {
        debug!("colors: {}", self.colors.kind);
        match self.colors.kind {
            ColorKind::Palette => ColorPolicy::Palette,
            ColorKind::Highlight => {
                let vessels: Vec<&str> = self.colors.vessels.iter().map(String::as_str).collect();
                let mut policy = ColorPolicy::highlight(&vessels);
                if let ColorPolicy::Highlight {
                    highlight, default, ..
                } = &mut policy
                {
                    if let Some(h) = &self.colors.highlight {
                        *highlight = h.clone();
                    }
                    if let Some(d) = &self.colors.default {
                        *default = d.clone();
                    }
                }
                policy
            }
        }
    }

    /// CLI selection wins over the configured one.
    ///
    pub fn source_filter(&self, cli: &[String]) -> SourceFilter {
        if cli.is_empty() {
            SourceFilter::from_selection(&self.sources)
        } else {
            SourceFilter::from_selection(cli)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use fairway_common::ConfigFile;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_config_defaults() -> eyre::Result<()> {
        let cfg = ConfigFile::<Config>::parse("version = 1\n")?;
        assert_eq!(DEFAULT_WINDOW_HOURS, cfg.window_hours);
        assert_eq!(DEFAULT_HORIZON_MINUTES, cfg.horizon_minutes);
        assert_eq!(ColorPolicy::Palette, cfg.color_policy());
        assert_eq!(SourceFilter::All, cfg.source_filter(&[]));
        Ok(())
    }

    #[test]
    fn test_config_full() -> eyre::Result<()> {
        let data = r##"
version = 1
window_hours = 2.5
sources = ["AIS"]

colors {
  kind = "highlight"
  vessels = ["ALPHA"]
  highlight = "orange"
}
"##;
        let cfg = ConfigFile::<Config>::parse(data)?;
        assert_eq!(2.5, cfg.window_hours);
        assert!(cfg.source_filter(&[]).matches("AIS"));
        assert!(!cfg.source_filter(&[]).matches("RADAR"));
        assert!(cfg.source_filter(&["RADAR".to_string()]).matches("RADAR"));

        let policy = cfg.color_policy();
        assert_eq!("orange", policy.color(0, "ALPHA"));
        assert_eq!("blue", policy.color(0, "BRAVO"));
        Ok(())
    }

    #[test]
    fn test_config_version_mismatch() {
        assert!(ConfigFile::<Config>::parse("version = 3\n").is_err());
    }

    #[rstest]
    #[case("palette", ColorKind::Palette)]
    #[case("highlight", ColorKind::Highlight)]
    fn test_color_kind(#[case] s: &str, #[case] kind: ColorKind) {
        assert_eq!(kind, ColorKind::from_str(s).unwrap());
        assert_eq!(s, kind.to_string());
    }
}
