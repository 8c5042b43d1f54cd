//! Definition of the data we handle
//!
//! Everything starts as a `PositionReport` coming from the storage layer, gets grouped into a
//! `Track` per vessel and enriched into `KinematicRecord`s by the engine.  `Geofence` is the
//! user-drawn filter and `ExportRow` the shape of the CSV download.
//!

pub use error::*;
pub use export::*;
pub use geofence::*;
pub use report::*;
pub use track::*;

mod error;
mod export;
mod geofence;
mod report;
mod track;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
