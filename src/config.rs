//! Resolves command line settings into the set of WDC files to load.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use kpap::reading::{discover, WdcFile};

const APP_DIR: &str = "kpap";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub files: Vec<WdcFile>,
}

impl Config {
    /// Explicit files win; otherwise the data directory is searched for `kpYYYY.wdc`.
    pub fn resolve(data_dir: Option<PathBuf>, files: Vec<WdcFile>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        let mut files = if files.is_empty() {
            discover(&data_dir)
                .with_context(|| format!("failed to read data directory `{}`", data_dir.display()))?
        } else {
            files
        };

        if files.is_empty() {
            return Err(anyhow!(
                "no kpYYYY.wdc files found in `{}`",
                data_dir.display()
            ));
        }
        files.sort_by_key(|f| f.year);

        Ok(Config { data_dir, files })
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

// -- Tests -------------------------------------------------------------------
