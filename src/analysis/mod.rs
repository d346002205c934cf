//! Companion operations over extracted record files
//!
//! - [`reader`] - Decode record streams and files
//! - [`dump`] - Render records as text
//! - [`addrs`] - Unique destination addresses
//! - [`stats`] - Sigma-clipped latency per (probe, destination)

pub mod addrs;
pub mod dump;
pub mod reader;
pub mod stats;

pub use addrs::{collect_destinations, unique_destinations};
pub use dump::dump_records;
pub use reader::{RecordReader, open_record_file, read_record_dir, read_record_file};
pub use stats::{LatencyInfo, PathStats, collect_path_stats, sigma_clip};
