//! The caller-owned index handle and the query API on top of it.

use chrono::NaiveDateTime;
use indicatif::ProgressBar;

use super::{table::check_window, IndexTable};
use crate::{
    error::{QueryError, RangeError, Result},
    load::load_records,
    reading::{parse, WdcFile},
};

/// How an Ap query aggregates buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApQuery {
    /// The three-hour bucket containing the query time.
    #[default]
    Point,
    /// Mean of the eight buckets of the query day.
    DailyMean,
    /// Mean of buckets `start..=end` hours before the query time, stepped by three.
    WindowMean { start: i32, end: i32 },
}

impl ApQuery {
    /// Checks the arguments of the query without needing a table.
    pub fn validate(&self) -> Result<(), RangeError> {
        match *self {
            ApQuery::Point | ApQuery::DailyMean => Ok(()),
            ApQuery::WindowMean { start, end } => check_window(start, end),
        }
    }
}

/// Either nothing has been loaded yet, or a table is ready to query.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    #[default]
    Uninitialized,
    Ready(IndexTable),
}

impl IndexState {
    /// Parses the files and builds a table on the calling thread.
    pub fn initialize(files: &[WdcFile]) -> Result<Self> {
        let records = parse(files)?;
        Ok(IndexState::Ready(IndexTable::build(records)?))
    }

    /// Like [`IndexState::initialize`], parsing the files concurrently.
    pub async fn load(files: &[WdcFile], progress_bar: ProgressBar) -> Result<Self> {
        let records = load_records(files, progress_bar).await?;
        Ok(IndexState::Ready(IndexTable::build(records)?))
    }

    /// Swaps in a freshly built state. The old table is dropped, never patched.
    pub fn replace(&mut self, state: IndexState) {
        *self = state;
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, IndexState::Ready(_))
    }

    pub fn table(&self) -> Result<&IndexTable, QueryError> {
        match self {
            IndexState::Ready(table) => Ok(table),
            IndexState::Uninitialized => Err(QueryError::Uninitialized),
        }
    }

    pub fn get_kp(&self, t: NaiveDateTime) -> Result<f64, QueryError> {
        Ok(self.table()?.kp(t))
    }

    /// Malformed window arguments fail with a range error even before initialisation.
    pub fn get_ap(&self, t: NaiveDateTime, query: ApQuery) -> Result<f64, QueryError> {
        query.validate()?;
        let table = self.table()?;
        let value = match query {
            ApQuery::Point => f64::from(table.ap(t)),
            ApQuery::DailyMean => table.ap_daily_mean(t),
            ApQuery::WindowMean { start, end } => table.ap_window_mean(t, start, end)?,
        };

        Ok(value)
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::error::{BuildError, Error};

    const DAY_1: &str = "2001012542250710131720232730138004007009012015018022027 14";
    const DAY_2: &str = "2001022542262020202020202020160007007007007007007007007  7";

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn fixture(dir: &TempDir, text: &str) -> Vec<WdcFile> {
        let path = dir.path().join("kp2020.wdc");
        fs::write(&path, text).unwrap();
        vec![WdcFile::new(path, 2020)]
    }

    #[test]
    fn should_fail_fast_when_uninitialized() {
        let state = IndexState::default();

        assert!(!state.is_ready());
        assert_eq!(state.get_kp(at(1, 0)), Err(QueryError::Uninitialized));
        assert_eq!(
            state.get_ap(at(1, 0), ApQuery::DailyMean),
            Err(QueryError::Uninitialized)
        );
    }

    #[test]
    fn should_answer_queries_once_initialized() {
        let dir = TempDir::new().unwrap();
        let state = IndexState::initialize(&fixture(&dir, &format!("{DAY_1}\n"))).unwrap();

        assert!(state.is_ready());
        assert_eq!(state.get_kp(at(1, 7)), Ok(1.3));
        assert_eq!(state.get_ap(at(1, 7), ApQuery::default()), Ok(9.0));
        assert_eq!(state.get_ap(at(1, 0), ApQuery::DailyMean), Ok(14.25));
    }

    #[test]
    fn should_average_window() {
        let dir = TempDir::new().unwrap();
        let state = IndexState::initialize(&fixture(&dir, &format!("{DAY_1}\n{DAY_2}\n"))).unwrap();

        // 2nd 05:00, 02:00 then 1st 23:00, 20:00: 7, 7, 27, 22
        let mean = state.get_ap(at(2, 5), ApQuery::WindowMean { start: 0, end: 9 });
        assert_eq!(mean, Ok(15.75));
    }

    #[test]
    fn should_reject_inverted_window() {
        let dir = TempDir::new().unwrap();
        let state = IndexState::initialize(&fixture(&dir, &format!("{DAY_1}\n"))).unwrap();

        let err = state
            .get_ap(at(1, 0), ApQuery::WindowMean { start: 21, end: 0 })
            .unwrap_err();
        assert_eq!(err, QueryError::Range(RangeError::Inverted { start: 21, end: 0 }));
    }

    #[test]
    fn should_reject_inverted_window_before_initialization() {
        let state = IndexState::Uninitialized;
        let window = ApQuery::WindowMean { start: 21, end: 0 };

        assert_eq!(
            state.get_ap(at(1, 0), window),
            Err(QueryError::Range(RangeError::Inverted { start: 21, end: 0 }))
        );
        // a valid window still needs a table
        assert_eq!(
            state.get_ap(at(1, 0), ApQuery::WindowMean { start: 0, end: 21 }),
            Err(QueryError::Uninitialized)
        );
    }

    #[test]
    fn should_validate_query_modes() {
        assert_eq!(ApQuery::Point.validate(), Ok(()));
        assert_eq!(ApQuery::DailyMean.validate(), Ok(()));
        assert_eq!(ApQuery::WindowMean { start: 0, end: 21 }.validate(), Ok(()));
        assert_eq!(
            ApQuery::WindowMean { start: 3, end: 0 }.validate(),
            Err(RangeError::Inverted { start: 3, end: 0 })
        );
    }

    #[test]
    fn should_surface_build_errors() {
        let dir = TempDir::new().unwrap();
        let files = fixture(&dir, &format!("{DAY_1}\n{DAY_1}\n"));

        let err = IndexState::initialize(&files).unwrap_err();
        assert!(matches!(err, Error::Build(BuildError::DuplicateTime(_))));
    }

    #[test]
    fn should_replace_state_wholesale() {
        let dir = TempDir::new().unwrap();
        let mut state = IndexState::Uninitialized;

        state.replace(IndexState::initialize(&fixture(&dir, &format!("{DAY_1}\n"))).unwrap());
        assert_eq!(state.table().unwrap().len(), 1);

        state.replace(IndexState::initialize(&fixture(&dir, &format!("{DAY_1}\n{DAY_2}\n"))).unwrap());
        assert_eq!(state.table().unwrap().len(), 2);
        assert_eq!(state.get_kp(at(2, 12)), Ok(2.0));
    }

    #[tokio::test]
    async fn should_load_concurrently() {
        let dir = TempDir::new().unwrap();
        let files = fixture(&dir, &format!("{DAY_1}\n{DAY_2}\n"));

        let state = IndexState::load(&files, ProgressBar::hidden()).await.unwrap();
        assert_eq!(state.get_ap(at(1, 23), ApQuery::Point), Ok(27.0));
    }
}
