//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default location for the configuration file of `fairway`.
//! This is a configuration file/struct neutral loading engine, storing only the base directory
//! and with `load()` read the proper file or the default one.
//!
//! This encapsulates the configuration file, available with `.inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::Status;

/// Config filename
const CONFIG: &str = "config.hcl";

/// Main name for the directory base
const TAG: &str = "fairway";

/// Every configuration struct carries a version number checked at load time.
///
pub trait Versioned {
    /// Version this code understands.
    const CVERSION: usize;

    /// Version found in the file.
    fn version(&self) -> usize;
}

#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned + Default> {
    /// Tag is the project name.
    tag: String,
    /// This is the base directory for all files.
    basedir: PathBuf,
    inner: T,
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned + Default,
{
    #[tracing::instrument]
    fn new(tag: &str) -> Self {
        let basedir = match BaseDirs::new() {
            Some(base) => {
                #[cfg(unix)]
                let base = base.home_dir().join(".config");

                #[cfg(windows)]
                let base = base.data_local_dir().to_path_buf();

                base.join(tag)
            }
            None => {
                warn!("No home directory, using current one");
                PathBuf::from(".").join(tag)
            }
        };
        debug!("basedir = {basedir:?}");
        ConfigFile {
            tag: String::from(tag),
            basedir,
            inner: T::default(),
        }
    }

    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        self.config_path().join(CONFIG)
    }

    /// Project tag used for the base directory.
    ///
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (base on $HOME or $LOCALAPPDATA)
    ///
    /// An explicitly named file must exist, a missing default file gives `T::default()`.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<ConfigFile<T>> {
        let mut cfg = ConfigFile::<T>::new(TAG);

        let fname = match fname {
            Some(fname) => {
                if !fname.exists() {
                    return Err(Status::MissingConfig(fname.to_string_lossy().to_string()).into());
                }
                fname.to_path_buf()
            }
            None => {
                let def = cfg.default_file();
                if !def.exists() {
                    debug!("no default config in {def:?}, using defaults");
                    return Ok(cfg);
                }
                def
            }
        };

        trace!("Loading config file {fname:?}");
        cfg.inner = Self::parse(&fs::read_to_string(&fname)?)?;
        Ok(cfg)
    }

    /// Parse and check version of an in-memory configuration.
    ///
    pub fn parse(data: &str) -> Result<T> {
        let data: T = hcl::from_str(data).map_err(|e| eyre!("bad config: {e}"))?;
        debug!("struct data = {data:?}");

        if data.version() != T::CVERSION {
            return Err(Status::BadFileVersion(data.version()).into());
        }
        Ok(data)
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }
}
