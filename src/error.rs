//! Error types for parsing, building and querying the index table.

use std::{io, path::PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

/// A single WDC line could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("line is {0} characters long, expected at least {1}")]
    TooShort(usize, usize),
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidField { field: String, value: String },
    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// A WDC file could not be read or contains a malformed line.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: {source}", .path.display())]
    Record {
        path: PathBuf,
        line: usize,
        #[source]
        source: RecordError,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("no records to build an index table from")]
    Empty,
    #[error("more than one record for {0}")]
    DuplicateTime(NaiveDateTime),
}

/// Window mean arguments that cannot describe a window.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("window start must not exceed end: {start}h > {end}h")]
    Inverted { start: i32, end: i32 },
    #[error("window {start}h..={end}h is wider than {max} hours")]
    TooWide { start: i32, end: i32, max: i64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("index table has not been initialised")]
    Uninitialized,
    #[error(transparent)]
    Range(#[from] RangeError),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("parser task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// -- Tests -------------------------------------------------------------------
