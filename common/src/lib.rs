//! This library is there to share some common code amongst all fairway modules.
//!

mod config;
mod logging;
mod window;

use clap::{crate_name, crate_version};
use thiserror::Error;

pub use config::*;
pub use logging::*;
pub use window::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

#[derive(Debug, Error)]
pub enum Status {
    #[error("Bad file version {0}")]
    BadFileVersion(usize),
    #[error("Missing configuration file {0}")]
    MissingConfig(String),
}
