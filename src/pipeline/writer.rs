use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::error::ConvertError;
use crate::models::PingRecord;

/// Append-only sink of encoded [`PingRecord`]s
///
/// Records are written back to back with no header or separator.
pub struct RecordWriter<W> {
    inner: W,
    written: u64,
}

impl RecordWriter<BufWriter<File>> {
    /// Create (or truncate) the output file
    pub fn create(path: &Path) -> Result<Self, ConvertError> {
        let file = File::create(path).map_err(ConvertError::SinkFailure)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn write_record(&mut self, record: &PingRecord) -> io::Result<()> {
        self.inner.write_all(&record.to_bytes())?;
        self.written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.written
    }

    /// Flush buffered records and hand back the underlying sink
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
