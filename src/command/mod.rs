mod check;

pub use check::{report_failure, run_check};
