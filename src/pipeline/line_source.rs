use std::io::{self, BufRead};

use crate::parsers::LineError;

/// Default bound on line length, excluding the line terminator
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Largest accepted line bound (16 MiB)
pub const MAX_LINE_LEN_LIMIT: usize = 16 * 1024 * 1024;

/// Bounded line reader over a buffered input stream
///
/// One buffer is reused for every line and cleared before each read, so a
/// returned line never contains bytes from an earlier one. Lines longer than
/// the bound are drained up to their newline and reported as
/// [`LineError::LineTooLong`] instead of being truncated.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    max_len: usize,
    line_number: u64,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        // The buffer grows on demand past the default size
        let capacity = max_len.min(DEFAULT_MAX_LINE_LEN) + 1;
        Self { reader, buf: Vec::with_capacity(capacity), max_len, line_number: 0 }
    }

    /// 1-based number of the line most recently returned
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Read the next line without its `\n` or `\r\n` terminator
    ///
    /// Returns `Ok(None)` at end of stream. Only I/O failures are errors at
    /// the outer level; a line that cannot be used is `Some(Err(..))`.
    pub fn next_line(&mut self) -> io::Result<Option<Result<&[u8], LineError>>> {
        self.buf.clear();
        let mut overflow = false;
        let mut saw_input = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            saw_input = true;

            let newline = available.iter().position(|&b| b == b'\n');
            let chunk = match newline {
                Some(i) => &available[..i],
                None => available,
            };

            // One extra byte leaves room for a '\r' that is stripped below
            let limit = self.max_len.saturating_add(1);
            if !overflow && self.buf.len() + chunk.len() > limit {
                overflow = true;
                self.buf.clear();
            }
            if !overflow {
                self.buf.extend_from_slice(chunk);
            }

            let consumed = newline.map_or(available.len(), |i| i + 1);
            self.reader.consume(consumed);
            if newline.is_some() {
                break;
            }
        }

        if !saw_input {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if overflow || self.buf.len() > self.max_len {
            return Ok(Some(Err(LineError::LineTooLong { max: self.max_len })));
        }
        if self.buf.contains(&0) {
            return Ok(Some(Err(LineError::ContainsNul)));
        }
        Ok(Some(Ok(self.buf.as_slice())))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use super::*;

    fn collect(input: &[u8], max_len: usize) -> Vec<Result<Vec<u8>, LineError>> {
        let mut source = LineSource::new(Cursor::new(input.to_vec()), max_len);
        let mut lines = Vec::new();
        while let Some(line) = source.next_line().unwrap() {
            lines.push(line.map(|l| l.to_vec()));
        }
        lines
    }

    #[test]
    fn test_splits_lines_and_strips_terminators() {
        let lines = collect(b"a\nbb\r\nccc", 16);
        assert_eq!(lines, vec![Ok(b"a".to_vec()), Ok(b"bb".to_vec()), Ok(b"ccc".to_vec())]);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(collect(b"", 16).is_empty());
    }

    #[test]
    fn test_blank_lines_are_preserved() {
        let lines = collect(b"\n\nx\n", 16);
        assert_eq!(lines, vec![Ok(vec![]), Ok(vec![]), Ok(b"x".to_vec())]);
    }

    #[test]
    fn test_line_at_bound_accepted() {
        let lines = collect(b"12345\n12345\r\n", 5);
        assert_eq!(lines, vec![Ok(b"12345".to_vec()), Ok(b"12345".to_vec())]);
    }

    #[test]
    fn test_oversized_line_rejected_and_next_line_intact() {
        let lines = collect(b"123456\nok\n", 5);
        assert_eq!(lines, vec![Err(LineError::LineTooLong { max: 5 }), Ok(b"ok".to_vec())]);
    }

    #[test]
    fn test_oversized_line_across_buffer_refills() {
        // A tiny BufReader capacity forces the long line to arrive in pieces
        let mut input = vec![b'x'; 100];
        input.extend_from_slice(b"\nshort\n");
        let reader = BufReader::with_capacity(8, Cursor::new(input));
        let mut source = LineSource::new(reader, 16);

        assert_eq!(source.next_line().unwrap(), Some(Err(LineError::LineTooLong { max: 16 })));
        assert_eq!(source.next_line().unwrap(), Some(Ok(&b"short"[..])));
        assert_eq!(source.line_number(), 2);
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_unbounded_max_len_does_not_overflow() {
        let lines = collect(b"abc\r\nxyz\n", usize::MAX);
        assert_eq!(lines, vec![Ok(b"abc".to_vec()), Ok(b"xyz".to_vec())]);
    }

    #[test]
    fn test_large_bound_starts_with_small_buffer() {
        let source = LineSource::new(Cursor::new(Vec::new()), MAX_LINE_LEN_LIMIT);
        assert!(source.buf.capacity() < MAX_LINE_LEN_LIMIT);
    }

    #[test]
    fn test_nul_byte_rejected() {
        let lines = collect(b"a\0b\nc\n", 16);
        assert_eq!(lines, vec![Err(LineError::ContainsNul), Ok(b"c".to_vec())]);
    }

    #[test]
    fn test_shorter_line_does_not_see_previous_content() {
        let lines = collect(b"abcdef\nxy\n", 16);
        assert_eq!(lines[1], Ok(b"xy".to_vec()));
    }
}
