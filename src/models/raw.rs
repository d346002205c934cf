use std::ops::Range;

/// Byte spans of the eight raw field values inside one input line
///
/// Spans index into the line the locator was given; nothing is copied.
/// `dst_addr` is the whole address string, kept for the address-family check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub dst_addr: Range<usize>,
    pub octets: [Range<usize>; 4],
    pub rtt: [Range<usize>; 3],
    pub prb_id: Range<usize>,
}

impl RawFields {
    /// Resolve a span against the line it was located in
    pub fn slice<'a>(line: &'a [u8], span: &Range<usize>) -> &'a [u8] {
        &line[span.clone()]
    }
}
