use std::ops::Range;

use clap::ValueEnum;

use super::atlas::AtlasLocator;
use super::compact::CompactLocator;
use super::error::{Field, LineError};
use super::guard;
use super::scan::Cursor;
use crate::models::RawFields;

pub(crate) const DST_ADDR_ANCHOR: &[u8] = br#""dst_addr":""#;
pub(crate) const PRB_ID_ANCHOR: &[u8] = br#""prb_id":"#;

/// Finds the raw value spans of one input layout
///
/// Implementations never allocate and never look outside `line`.
pub trait FieldLocator {
    fn name(&self) -> &'static str;

    fn locate(&self, line: &[u8]) -> Result<RawFields, LineError>;
}

/// Input layouts understood by the extractor, chosen once per run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Schema {
    /// Per-attempt result objects: `"result":[{"rtt":..},..]`
    #[default]
    Atlas,
    /// Flat layout with a bare RTT array: `"rtts":[..]`
    Compact,
}

impl FieldLocator for Schema {
    fn name(&self) -> &'static str {
        match self {
            Schema::Atlas => AtlasLocator.name(),
            Schema::Compact => CompactLocator.name(),
        }
    }

    fn locate(&self, line: &[u8]) -> Result<RawFields, LineError> {
        match self {
            Schema::Atlas => AtlasLocator.locate(line),
            Schema::Compact => CompactLocator.locate(line),
        }
    }
}

/// Locate `"dst_addr":"a.b.c.d"` and split it into octet spans
///
/// The whole address runs to its closing quote; the address-family guard is
/// applied to it before the octets are split.
pub(crate) fn locate_dst_addr(
    cursor: &mut Cursor<'_>,
    line: &[u8],
) -> Result<(Range<usize>, [Range<usize>; 4]), LineError> {
    cursor.seek_anchor(DST_ADDR_ANCHOR, b"").ok_or(LineError::ExtractFailed(Field::DstAddr))?;
    let addr = cursor.take_until(b"\"", b"").ok_or(LineError::ExtractFailed(Field::DstAddr))?;

    guard::check_address(&line[addr.clone()])?;

    let mut octets = Cursor::within(line, &addr);
    let mut next_octet = |n: u8| {
        octets.take_until(b".", b"").ok_or(LineError::ExtractFailed(Field::Octet(n)))
    };
    let o1 = next_octet(1)?;
    let o2 = next_octet(2)?;
    let o3 = next_octet(3)?;
    let o4 = octets.take_rest();

    Ok((addr, [o1, o2, o3, o4]))
}
