//! Field extraction for newline-delimited ping measurement results
//!
//! # Extraction Strategy
//!
//! Lines are never parsed as JSON. Each input layout is a fixed sequence of
//! anchor tokens, and values are captured as byte spans between an anchor and
//! a delimiter:
//!
//! - **Locating**: A [`FieldLocator`] walks one forward [`scan::Cursor`] over the
//!   line. Every anchor search is bounded by a stop byte (or end of line), so a
//!   missing field cannot be satisfied by unrelated content further along.
//!
//! - **Guarding**: Values the 20-byte record cannot hold (IPv6 destinations,
//!   quoted RTT sentinels such as `"*"`) are rejected before numeric parsing.
//!
//! - **Parsing**: Spans are converted with strict rules: no trailing bytes,
//!   octets in [0, 255], non-negative probe ids and RTTs.
//!
//! Every failure is a [`LineError`]. A line either yields one complete
//! [`PingRecord`](crate::models::PingRecord) or nothing.

pub mod atlas;
pub mod compact;
pub mod error;
pub mod fields;
pub mod guard;
pub mod locator;
pub mod ping;
pub mod scan;

pub use atlas::AtlasLocator;
pub use compact::CompactLocator;
pub use error::{Field, LineError};
pub use locator::{FieldLocator, Schema};
pub use ping::parse_ping_line;
