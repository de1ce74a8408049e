pub mod parse;
pub mod record;
pub mod wdc_file;

pub use parse::{parse, parse_file, parse_reader};
pub use record::{DailyRecord, BUCKETS_PER_DAY, HOURS_PER_BUCKET};
pub use wdc_file::{discover, WdcFile};
