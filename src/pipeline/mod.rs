//! Streaming conversion from text lines to fixed-size binary records
//!
//! - [`line_source`] - Bounded, buffer-reusing line reader
//! - [`writer`] - Append-only record sink
//! - [`convert`] - Per-line driver and run statistics

pub mod convert;
pub mod error;
pub mod line_source;
pub mod writer;

pub use convert::{ConvertStats, ExtractConfig, convert};
pub use error::ConvertError;
pub use line_source::{DEFAULT_MAX_LINE_LEN, LineSource, MAX_LINE_LEN_LIMIT};
pub use writer::RecordWriter;
