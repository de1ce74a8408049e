//! Turns WDC files into daily records.

use std::{
    fs::File,
    io::{self, BufRead},
    path::Path,
};

use tracing::debug;

use super::{DailyRecord, WdcFile};
use crate::error::ParseError;

/// Parses every file in turn. The first malformed file aborts the whole parse.
pub fn parse(files: &[WdcFile]) -> Result<Vec<DailyRecord>, ParseError> {
    let mut records = Vec::new();
    for file in files {
        records.extend(parse_file(file)?);
    }

    Ok(records)
}

pub fn parse_file(file: &WdcFile) -> Result<Vec<DailyRecord>, ParseError> {
    let handle = File::open(&file.path).map_err(|source| ParseError::Io {
        path: file.path.clone(),
        source,
    })?;

    parse_reader(io::BufReader::new(handle), &file.path, file.year)
}

/// Parses WDC lines from any reader. `path` is only used in error messages.
pub fn parse_reader<R: BufRead>(
    reader: R,
    path: &Path,
    year: i32,
) -> Result<Vec<DailyRecord>, ParseError> {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() || line.starts_with('#') {
            skipped += 1;
            continue;
        }

        let record = DailyRecord::from_line(line, year).map_err(|source| ParseError::Record {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        records.push(record);
    }

    debug!(
        path = %path.display(),
        year,
        records = records.len(),
        skipped,
        "parsed WDC file"
    );

    Ok(records)
}

// -- Tests -------------------------------------------------------------------
