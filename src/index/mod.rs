//! Lookup of Kp and Ap values by time.

pub mod query;
pub mod table;

pub use query::{ApQuery, IndexState};
pub use table::{check_window, window_offsets, IndexTable, MAX_WINDOW_HOURS};
