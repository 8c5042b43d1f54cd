//! Vessel kinematics and geofence analytics.
//!
//! Raw reports go through the following stages, every one of them a pure function:
//!
//! - `normalize()` groups and orders reports into per-vessel tracks
//! - `kinematics()` adds distance, speed and course between consecutive reports
//! - `Fence` keeps what lies inside a user-drawn polygon
//! - `project()` extrapolates the position of a vessel a few minutes ahead
//! - the `present` module builds the renderable tracks, the table and the export rows
//!
//! `refresh()` chains them for one snapshot.  I/O is limited to the `ReportStore` boundary.
//!

pub use catalog::*;
pub use filter::*;
pub use geofence::*;
pub use kinematics::*;
pub use normalize::*;
pub use present::*;
pub use refresh::*;
pub use storage::*;
pub use trajectory::*;

mod catalog;
mod filter;
mod geofence;
mod kinematics;
mod normalize;
mod present;
mod refresh;
mod storage;
mod trajectory;

const NAME: &str = env!("CARGO_PKG_NAME");
const EVERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    format!("{}/{}", NAME, EVERSION)
}
