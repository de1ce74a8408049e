//! One calendar day of three-hourly Kp and Ap values.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::RecordError;

/// Number of three-hour intervals in a day.
pub const BUCKETS_PER_DAY: usize = 8;
pub const HOURS_PER_BUCKET: u32 = 3;
/// A line must reach the last Ap field (column 55).
pub const MIN_LINE_LENGTH: usize = 55;

const MONTH_START: usize = 2;
const DAY_START: usize = 4;
const KP_START: usize = 12;
const KP_WIDTH: usize = 2;
const AP_START: usize = 31;
const AP_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    /// Noon of the record's calendar date.
    pub time: NaiveDateTime,
    pub kp: [f64; BUCKETS_PER_DAY],
    pub ap: [u16; BUCKETS_PER_DAY],
}

impl DailyRecord {
    /// Parses a WDC line. The year is not part of the record and comes from the file.
    pub fn from_line(line: &str, year: i32) -> Result<Self, RecordError> {
        if line.len() < MIN_LINE_LENGTH {
            return Err(RecordError::TooShort(line.len(), MIN_LINE_LENGTH));
        }

        let month = parse_field::<u32>(line, MONTH_START, 2, "month")?;
        let day = parse_field::<u32>(line, DAY_START, 2, "day")?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(RecordError::InvalidDate { year, month, day })?;
        let time = date.and_time(noon());

        let mut kp = [0.0; BUCKETS_PER_DAY];
        let mut ap = [0; BUCKETS_PER_DAY];
        for i in 0..BUCKETS_PER_DAY {
            let raw = parse_field::<u8>(line, KP_START + i * KP_WIDTH, KP_WIDTH, "kp")?;
            kp[i] = f64::from(raw) / 10.0;
            ap[i] = parse_field::<u16>(line, AP_START + i * AP_WIDTH, AP_WIDTH, "ap")?;
        }

        Ok(DailyRecord { time, kp, ap })
    }

    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// Arithmetic mean of the eight Ap values.
    pub fn ap_mean(&self) -> f64 {
        let sum: u32 = self.ap.iter().map(|&v| u32::from(v)).sum();
        f64::from(sum) / BUCKETS_PER_DAY as f64
    }
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("12:00:00 is a valid time of day")
}

fn parse_field<T: std::str::FromStr>(
    line: &str,
    start: usize,
    width: usize,
    name: &str,
) -> Result<T, RecordError> {
    let invalid = |value: &str| RecordError::InvalidField {
        field: format!("{}@{}", name, start + 1),
        value: value.to_string(),
    };

    // `get` refuses to split a multi-byte character
    let chunk = line.get(start..start + width).ok_or_else(|| invalid(""))?;
    chunk.trim().parse::<T>().map_err(|_| invalid(chunk))
}

// -- Tests -------------------------------------------------------------------
