use std::fmt;

use thiserror::Error;

/// Logical field of a ping measurement, used to label line errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DstAddr,
    Octet(u8),
    Result,
    Rtt(u8),
    PrbId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::DstAddr => f.write_str("dst_addr"),
            Field::Octet(n) => write!(f, "dst_addr octet {}", n),
            Field::Result => f.write_str("result"),
            Field::Rtt(n) => write!(f, "rtt {}", n),
            Field::PrbId => f.write_str("prb_id"),
        }
    }
}

/// Reasons a single input line yields no record
///
/// All of these are recovered at the line boundary by skipping the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("{0}: anchor or delimiter not found")]
    ExtractFailed(Field),

    #[error("destination address is not IPv4")]
    UnsupportedAddressFamily,

    #[error("{0}: value is not numeric")]
    UnsupportedValueEncoding(Field),

    #[error("{0}: invalid value")]
    InvalidFieldValue(Field),

    #[error("line exceeds {max} bytes")]
    LineTooLong { max: usize },

    #[error("line contains a NUL byte")]
    ContainsNul,
}

impl LineError {
    /// Short stable label used for skip statistics
    pub fn kind(&self) -> &'static str {
        match self {
            LineError::ExtractFailed(_) => "extract_failed",
            LineError::UnsupportedAddressFamily => "unsupported_address_family",
            LineError::UnsupportedValueEncoding(_) => "unsupported_value_encoding",
            LineError::InvalidFieldValue(_) => "invalid_field_value",
            LineError::LineTooLong { .. } => "line_too_long",
            LineError::ContainsNul => "contains_nul",
        }
    }
}
