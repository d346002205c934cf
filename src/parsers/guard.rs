//! Rejects values the fixed record layout cannot represent, before any numeric parsing

use super::error::{Field, LineError};

/// Only dotted IPv4 addresses fit the four-octet layout
pub fn check_address(addr: &[u8]) -> Result<(), LineError> {
    if addr.contains(&b':') {
        return Err(LineError::UnsupportedAddressFamily);
    }
    Ok(())
}

/// A quoted RTT is a sentinel such as a timeout marker, not a sample
pub fn check_rtt(value: &[u8], field: Field) -> Result<(), LineError> {
    if value.trim_ascii_start().starts_with(b"\"") {
        return Err(LineError::UnsupportedValueEncoding(field));
    }
    Ok(())
}
