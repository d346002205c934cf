//! Strict conversion of raw spans into typed field values
//!
//! A span is accepted only if, after optional leading ASCII whitespace, the
//! whole remainder parses. Trailing bytes of any kind reject the value.

use std::str;

use super::error::{Field, LineError};

fn span_text(raw: &[u8], field: Field) -> Result<&str, LineError> {
    str::from_utf8(raw.trim_ascii_start()).map_err(|_| LineError::InvalidFieldValue(field))
}

fn parse_integer(raw: &[u8], field: Field) -> Result<i64, LineError> {
    span_text(raw, field)?.parse::<i64>().map_err(|_| LineError::InvalidFieldValue(field))
}

/// Base-10 integer in [0, 255]
pub fn parse_octet(raw: &[u8], field: Field) -> Result<u8, LineError> {
    let value = parse_integer(raw, field)?;
    u8::try_from(value).map_err(|_| LineError::InvalidFieldValue(field))
}

/// Base-10 non-negative integer that fits in 32 bits
pub fn parse_prb_id(raw: &[u8]) -> Result<u32, LineError> {
    let value = parse_integer(raw, Field::PrbId)?;
    u32::try_from(value).map_err(|_| LineError::InvalidFieldValue(Field::PrbId))
}

/// Finite, non-negative floating point sample
pub fn parse_rtt(raw: &[u8], field: Field) -> Result<f32, LineError> {
    let value = span_text(raw, field)?
        .parse::<f32>()
        .map_err(|_| LineError::InvalidFieldValue(field))?;

    if !value.is_finite() || value < 0.0 {
        return Err(LineError::InvalidFieldValue(field));
    }
    Ok(value)
}
