//! Flat layout with the probe id first and a bare RTT array
//!
//! ```text
//! {"prb_id":1234,"dst_addr":"193.0.14.1","rtts":[12.34,11.9,13.0]}
//! ```
//!
//! The array must hold exactly three samples: the first two end at `,`, the
//! last at `]`.

use super::error::{Field, LineError};
use super::locator::{FieldLocator, PRB_ID_ANCHOR, locate_dst_addr};
use super::scan::Cursor;
use crate::models::RawFields;

const RTTS_ANCHOR: &[u8] = br#""rtts":["#;

#[derive(Debug, Clone, Copy, Default)]
pub struct CompactLocator;

impl FieldLocator for CompactLocator {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn locate(&self, line: &[u8]) -> Result<RawFields, LineError> {
        let mut cursor = Cursor::new(line);

        cursor.seek_anchor(PRB_ID_ANCHOR, b"").ok_or(LineError::ExtractFailed(Field::PrbId))?;
        let prb_id =
            cursor.take_until(b",", b"\"}").ok_or(LineError::ExtractFailed(Field::PrbId))?;

        let (dst_addr, octets) = locate_dst_addr(&mut cursor, line)?;

        cursor.seek_anchor(RTTS_ANCHOR, b"").ok_or(LineError::ExtractFailed(Field::Rtt(1)))?;
        let rtt1 = cursor.take_until(b",", b"]").ok_or(LineError::ExtractFailed(Field::Rtt(1)))?;
        let rtt2 = cursor.take_until(b",", b"]").ok_or(LineError::ExtractFailed(Field::Rtt(2)))?;
        let rtt3 = cursor.take_until(b"]", b",").ok_or(LineError::ExtractFailed(Field::Rtt(3)))?;

        Ok(RawFields { dst_addr, octets, rtt: [rtt1, rtt2, rtt3], prb_id })
    }
}
