//! Geomagnetic Kp and Ap indices read from yearly WDC files.
//!
//! Records are parsed from fixed-width WDC lines ([`reading`]), gathered into an
//! immutable [`IndexTable`] and queried through a caller-owned [`IndexState`].

pub mod error;
pub mod index;
pub mod load;
pub mod reading;

pub use error::{BuildError, Error, ParseError, QueryError, RangeError, RecordError, Result};
pub use index::{ApQuery, IndexState, IndexTable};
pub use reading::{DailyRecord, WdcFile};
