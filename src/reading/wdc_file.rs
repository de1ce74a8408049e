//! Yearly WDC files and their discovery on disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A local WDC file and the calendar year its records belong to.
pub struct WdcFile {
    pub path: PathBuf,
    pub year: i32,
}

impl WdcFile {
    pub fn new(path: impl Into<PathBuf>, year: i32) -> Self {
        WdcFile {
            path: path.into(),
            year,
        }
    }

    /// Recognises the GFZ yearly naming scheme, e.g. `kp2020.wdc`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_lowercase();
        let year = file_name.strip_prefix("kp")?.strip_suffix(".wdc")?;

        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(WdcFile::new(path, year.parse().ok()?))
    }
}

/// Lists the yearly WDC files in `dir`, ordered by year.
pub fn discover(dir: &Path) -> io::Result<Vec<WdcFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(file) = WdcFile::from_path(&path) {
            files.push(file);
        }
    }
    files.sort_by_key(|f| f.year);

    Ok(files)
}

// -- Tests -------------------------------------------------------------------
