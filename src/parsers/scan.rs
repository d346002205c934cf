//! Bounded forward scanning over a raw line
//!
//! Every field search is built on one primitive: scan forward from the cursor
//! until either the target matches or a stop byte is reached. End of input is
//! an implicit stop. The cursor only ever moves forward.

use std::ops::Range;

/// What a scan is looking for
#[derive(Debug, Clone, Copy)]
pub enum Target<'t> {
    /// An exact multi-byte literal, such as an anchor token
    Literal(&'t [u8]),
    /// Any single byte from the set, such as a value delimiter
    AnyOf(&'t [u8]),
}

/// Forward-only cursor over one line
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self { line, pos: 0 }
    }

    /// Cursor over `line[start..end]` that still reports positions relative to `line`
    pub fn within(line: &'a [u8], span: &Range<usize>) -> Self {
        Self { line: &line[..span.end], pos: span.start }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Absolute range of the first match of `target` at or after the cursor
    ///
    /// Returns `None` if a byte in `stops` (or end of input) comes first.
    /// Stop bytes are checked before the target at each position.
    pub fn scan_until(&self, target: Target<'_>, stops: &[u8]) -> Option<Range<usize>> {
        let rest = &self.line[self.pos..];
        for (i, byte) in rest.iter().enumerate() {
            if stops.contains(byte) {
                return None;
            }
            let matched_len = match target {
                Target::Literal(literal) => rest[i..].starts_with(literal).then_some(literal.len()),
                Target::AnyOf(set) => set.contains(byte).then_some(1),
            };
            if let Some(len) = matched_len {
                let start = self.pos + i;
                return Some(start..start + len);
            }
        }
        None
    }

    /// Move the cursor just past the next occurrence of `anchor`
    pub fn seek_anchor(&mut self, anchor: &[u8], stops: &[u8]) -> Option<()> {
        let found = self.scan_until(Target::Literal(anchor), stops)?;
        self.pos = found.end;
        Some(())
    }

    /// Capture the span from the cursor up to the next byte in `delims`
    ///
    /// The cursor moves past the delimiter; the delimiter is not part of the span.
    pub fn take_until(&mut self, delims: &[u8], stops: &[u8]) -> Option<Range<usize>> {
        let found = self.scan_until(Target::AnyOf(delims), stops)?;
        let span = self.pos..found.start;
        self.pos = found.end;
        Some(span)
    }

    /// Capture everything from the cursor to the end of input
    pub fn take_rest(&mut self) -> Range<usize> {
        let span = self.pos..self.line.len();
        self.pos = self.line.len();
        span
    }
}
