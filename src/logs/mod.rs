//! Parsing for the benchmark timing logs.

pub mod parse;
pub mod row;

pub use parse::parse_log_file;
pub use row::{Measurement, ResultTable};
