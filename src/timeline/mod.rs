pub mod date;
pub mod format;
pub mod ordering;

pub use date::{parse_record_date, PRESENT};
pub use format::{DurationFormatter, DurationLabels};
pub use ordering::{compare_experiences, sort_experiences};
