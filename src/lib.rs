//! Ping Extract - Convert ping measurement results into fixed-size binary records
//!
//! This library turns newline-delimited measurement documents (one JSON object
//! per line) into 20-byte records without building a document tree. It supports:
//!
//! - Anchored field extraction for two input layouts ([`Schema::Atlas`], [`Schema::Compact`])
//! - Strict validation: IPv4 only, numeric non-negative RTTs, in-range octets and probe ids
//! - Streaming conversion with bounded line length and per-reason skip counts
//! - Reading record files back for dumps, address listings and latency statistics
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use ping_extract::{ExtractConfig, RecordWriter, convert};
//!
//! let input = r#"{"dst_addr":"193.0.14.1","result":[{"rtt":12.34},{"rtt":11.9},{"rtt":13.0}],"prb_id":1234}"#;
//! let mut writer = RecordWriter::new(Vec::new());
//! let stats = convert(Cursor::new(input), &mut writer, &ExtractConfig::default())?;
//!
//! assert_eq!(stats.records, 1);
//! assert_eq!(writer.finish()?.len(), ping_extract::RECORD_SIZE);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod pipeline;
pub mod utils;

// Re-export commonly used types
pub use models::{PingRecord, RECORD_SIZE};
pub use parsers::{FieldLocator, LineError, Schema, parse_ping_line};
pub use pipeline::{ConvertError, ConvertStats, ExtractConfig, RecordWriter, convert};
