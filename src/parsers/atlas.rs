//! Layout with per-attempt result objects
//!
//! ```text
//! {"dst_addr":"193.0.14.1","result":[{"rtt":12.34},{"rtt":11.9},{"rtt":13.0}],"prb_id":1234}
//! ```
//!
//! Anchors are found strictly in this order: destination address, result
//! array, three `{"rtt":` objects (never past the closing `]`), probe id.

use std::ops::Range;

use super::error::{Field, LineError};
use super::locator::{FieldLocator, PRB_ID_ANCHOR, locate_dst_addr};
use super::scan::Cursor;
use crate::models::RawFields;

const RESULT_ANCHOR: &[u8] = br#""result":["#;
const RTT_ANCHOR: &[u8] = br#"{"rtt":"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct AtlasLocator;

impl FieldLocator for AtlasLocator {
    fn name(&self) -> &'static str {
        "atlas"
    }

    fn locate(&self, line: &[u8]) -> Result<RawFields, LineError> {
        let mut cursor = Cursor::new(line);

        let (dst_addr, octets) = locate_dst_addr(&mut cursor, line)?;

        cursor.seek_anchor(RESULT_ANCHOR, b"").ok_or(LineError::ExtractFailed(Field::Result))?;

        let mut rtt: [Range<usize>; 3] = Default::default();
        for (i, slot) in rtt.iter_mut().enumerate() {
            let failed = LineError::ExtractFailed(Field::Rtt(i as u8 + 1));
            cursor.seek_anchor(RTT_ANCHOR, b"]").ok_or_else(|| failed.clone())?;
            *slot = cursor.take_until(b"},", b"]").ok_or(failed)?;
        }

        cursor.seek_anchor(PRB_ID_ANCHOR, b"").ok_or(LineError::ExtractFailed(Field::PrbId))?;
        let prb_id =
            cursor.take_until(b",}", b"\"").ok_or(LineError::ExtractFailed(Field::PrbId))?;

        Ok(RawFields { dst_addr, octets, rtt, prb_id })
    }
}
