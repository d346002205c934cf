use std::fmt;
use std::net::Ipv4Addr;

/// Size in bytes of one encoded [`PingRecord`]
pub const RECORD_SIZE: usize = 20;

/// One validated ping measurement
///
/// Encoded layout (little-endian, IEEE-754 single precision), no padding:
///
/// | offset | size | field              |
/// |--------|------|--------------------|
/// | 0      | 4    | `prb_id` (u32)     |
/// | 4      | 4    | `dst_addr` octets  |
/// | 8      | 4    | `rtt[0]` (f32)     |
/// | 12     | 4    | `rtt[1]` (f32)     |
/// | 16     | 4    | `rtt[2]` (f32)     |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingRecord {
    pub prb_id: u32,
    pub dst_addr: [u8; 4],
    pub rtt: [f32; 3],
}

impl PingRecord {
    /// Destination address as an [`Ipv4Addr`]
    pub fn dst_ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.dst_addr)
    }

    /// Encode into the fixed 20-byte layout
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[0..4].copy_from_slice(&self.prb_id.to_le_bytes());
        buf[4..8].copy_from_slice(&self.dst_addr);
        for (i, rtt) in self.rtt.iter().enumerate() {
            let offset = 8 + i * 4;
            buf[offset..offset + 4].copy_from_slice(&rtt.to_le_bytes());
        }
        buf
    }

    /// Decode from the fixed 20-byte layout
    pub fn from_bytes(buf: &[u8; RECORD_SIZE]) -> Self {
        let word = |offset: usize| [buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]];

        Self {
            prb_id: u32::from_le_bytes(word(0)),
            dst_addr: word(4),
            rtt: [
                f32::from_le_bytes(word(8)),
                f32::from_le_bytes(word(12)),
                f32::from_le_bytes(word(16)),
            ],
        }
    }
}

impl fmt::Display for PingRecord {
    /// `a.b.c.d|prb_id|rtt1|rtt2|rtt3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{:.6}|{:.6}|{:.6}",
            self.dst_ip(),
            self.prb_id,
            self.rtt[0],
            self.rtt[1],
            self.rtt[2]
        )
    }
}
