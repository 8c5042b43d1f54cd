//! Library part of the `fairwayctl` utility.
//!
//! `fairwayctl` plays the host of the engine: it reads a snapshot file, builds the refresh
//! request from the command line and the configuration then prints the result.
//!

pub use cli::*;
pub use cmds::*;
pub use config::*;

mod cli;
mod cmds;
mod config;
