use super::error::{Field, LineError};
use super::fields::{parse_octet, parse_prb_id, parse_rtt};
use super::guard;
use super::locator::FieldLocator;
use crate::models::{PingRecord, RawFields};

/// Extract one [`PingRecord`] from a raw input line
///
/// Runs the locator for the active layout, the RTT encoding guard and the
/// typed field parsers. Either all eight fields are valid and a record is
/// returned, or the first failure is reported and nothing is produced.
///
/// # Examples
///
/// ```
/// use ping_extract::parsers::{Schema, parse_ping_line};
///
/// let line = br#"{"dst_addr":"193.0.14.1","result":[{"rtt":12.34},{"rtt":11.9},{"rtt":13.0}],"prb_id":1234}"#;
/// let record = parse_ping_line(&Schema::Atlas, line).unwrap();
/// assert_eq!(record.prb_id, 1234);
/// assert_eq!(record.dst_addr, [193, 0, 14, 1]);
/// ```
pub fn parse_ping_line<L>(locator: &L, line: &[u8]) -> Result<PingRecord, LineError>
where
    L: FieldLocator + ?Sized,
{
    let raw = locator.locate(line)?;

    for (i, span) in raw.rtt.iter().enumerate() {
        guard::check_rtt(RawFields::slice(line, span), Field::Rtt(i as u8 + 1))?;
    }

    let mut dst_addr = [0u8; 4];
    for (i, span) in raw.octets.iter().enumerate() {
        dst_addr[i] = parse_octet(RawFields::slice(line, span), Field::Octet(i as u8 + 1))?;
    }

    let mut rtt = [0f32; 3];
    for (i, span) in raw.rtt.iter().enumerate() {
        rtt[i] = parse_rtt(RawFields::slice(line, span), Field::Rtt(i as u8 + 1))?;
    }

    let prb_id = parse_prb_id(RawFields::slice(line, &raw.prb_id))?;

    Ok(PingRecord { prb_id, dst_addr, rtt })
}
