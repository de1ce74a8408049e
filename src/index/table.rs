//! Nearest-neighbour lookup of daily records with flat extrapolation.

use chrono::NaiveDateTime;
use tracing::info;

use crate::{
    error::{BuildError, RangeError},
    reading::{DailyRecord, BUCKETS_PER_DAY, HOURS_PER_BUCKET},
};

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
/// A century of hours; wider windows are rejected.
pub const MAX_WINDOW_HOURS: i64 = 100 * 366 * 24;

/// Immutable table of daily records ordered by reference time.
#[derive(Debug, Clone)]
pub struct IndexTable {
    // Seconds since the epoch, parallel to `records`.
    times: Vec<i64>,
    records: Vec<DailyRecord>,
}

impl IndexTable {
    pub fn build(mut records: Vec<DailyRecord>) -> Result<Self, BuildError> {
        if records.is_empty() {
            return Err(BuildError::Empty);
        }

        records.sort_by_key(|r| r.time);
        if let Some(pair) = records.windows(2).find(|pair| pair[0].time == pair[1].time) {
            return Err(BuildError::DuplicateTime(pair[0].time));
        }

        let times = records.iter().map(|r| seconds(r.time)).collect();
        let table = IndexTable { times, records };

        info!(
            records = table.len(),
            first = %table.first().date(),
            last = %table.last().date(),
            "built index table"
        );

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a table cannot be built without records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> &DailyRecord {
        &self.records[0]
    }

    pub fn last(&self) -> &DailyRecord {
        &self.records[self.records.len() - 1]
    }

    /// The record nearest to `t`, or the boundary record when `t` lies outside the table.
    pub fn nearest(&self, t: NaiveDateTime) -> &DailyRecord {
        self.nearest_at(seconds(t))
    }

    pub fn kp(&self, t: NaiveDateTime) -> f64 {
        let secs = seconds(t);
        self.nearest_at(secs).kp[bucket_index(secs)]
    }

    pub fn ap(&self, t: NaiveDateTime) -> u16 {
        self.ap_at(seconds(t))
    }

    pub fn ap_daily_mean(&self, t: NaiveDateTime) -> f64 {
        self.nearest(t).ap_mean()
    }

    /// Mean of the Ap buckets at `t - h` hours for `h = start, start + 3, ...` while `h <= end`.
    pub fn ap_window_mean(&self, t: NaiveDateTime, start: i32, end: i32) -> Result<f64, RangeError> {
        check_window(start, end)?;

        let secs = seconds(t);
        let (sum, count) = window_offsets(start, end).fold((0u64, 0u32), |(sum, count), h| {
            let ap = self.ap_at(secs - i64::from(h) * SECONDS_PER_HOUR);
            (sum + u64::from(ap), count + 1)
        });

        Ok(sum as f64 / f64::from(count))
    }

    fn ap_at(&self, secs: i64) -> u16 {
        self.nearest_at(secs).ap[bucket_index(secs)]
    }

    fn nearest_at(&self, secs: i64) -> &DailyRecord {
        let idx = self.times.partition_point(|&k| k < secs);
        if idx == 0 {
            return &self.records[0];
        }
        if idx == self.times.len() {
            return self.last();
        }

        // ties go to the earlier record
        let before = secs - self.times[idx - 1];
        let after = self.times[idx] - secs;
        if after < before {
            &self.records[idx]
        } else {
            &self.records[idx - 1]
        }
    }
}

/// Rejects windows that are inverted or wider than [`MAX_WINDOW_HOURS`].
pub fn check_window(start: i32, end: i32) -> Result<(), RangeError> {
    if start > end {
        return Err(RangeError::Inverted { start, end });
    }
    if i64::from(end) - i64::from(start) > MAX_WINDOW_HOURS {
        return Err(RangeError::TooWide {
            start,
            end,
            max: MAX_WINDOW_HOURS,
        });
    }

    Ok(())
}

/// Hour offsets of a window, stepped by three and never past `end`.
pub fn window_offsets(start: i32, end: i32) -> impl Iterator<Item = i32> {
    (start..=end).step_by(HOURS_PER_BUCKET as usize)
}

fn bucket_index(secs: i64) -> usize {
    let hour = secs.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let bucket = (hour / i64::from(HOURS_PER_BUCKET)) as usize;
    bucket.min(BUCKETS_PER_DAY - 1)
}

fn seconds(t: NaiveDateTime) -> i64 {
    t.and_utc().timestamp()
}

// -- Tests -------------------------------------------------------------------
