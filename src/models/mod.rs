//! Data models for ping measurement extraction.
//!
//! - [`PingRecord`] - The validated measurement and its fixed 20-byte encoding
//! - [`RawFields`] - Located-but-unparsed field spans inside one input line

pub mod raw;
pub mod record;

pub use raw::RawFields;
pub use record::{PingRecord, RECORD_SIZE};
