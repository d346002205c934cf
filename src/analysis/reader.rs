use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::warn;

use crate::models::{PingRecord, RECORD_SIZE};
use crate::utils::list_record_files;

/// Iterator over the fixed-size records of a binary stream
///
/// A trailing fragment shorter than one record is reported once as an
/// [`io::ErrorKind::UnexpectedEof`] error, after all complete records.
pub struct RecordReader<R> {
    inner: R,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, done: false }
    }

    fn read_one(&mut self) -> io::Result<Option<PingRecord>> {
        let mut buf = [0u8; RECORD_SIZE];
        let mut filled = 0;

        while filled < RECORD_SIZE {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        match filled {
            0 => Ok(None),
            RECORD_SIZE => Ok(Some(PingRecord::from_bytes(&buf))),
            partial => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("trailing partial record ({} of {} bytes)", partial, RECORD_SIZE),
            )),
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = io::Result<PingRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_one() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Open a record file for sequential reading
pub fn open_record_file(path: &Path) -> Result<RecordReader<BufReader<File>>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open record file: {}", path.display()))?;
    Ok(RecordReader::new(BufReader::new(file)))
}

/// Read every record in a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or ends with a partial record.
pub fn read_record_file(path: &Path) -> Result<Vec<PingRecord>> {
    open_record_file(path)?
        .collect::<io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read records from {}", path.display()))
}

/// Read every record file directly inside `dir`, in parallel
///
/// Files that cannot be read are logged and left out. Records are returned
/// grouped per file, in file-name order.
///
/// # Errors
///
/// Returns an error only if the directory itself cannot be listed.
pub fn read_record_dir(dir: &Path) -> Result<Vec<Vec<PingRecord>>> {
    let files = list_record_files(dir)?;

    let loaded: Vec<Vec<PingRecord>> = files
        .par_iter()
        .filter_map(|path| match read_record_file(path) {
            Ok(records) => Some(records),
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                None
            }
        })
        .collect();

    Ok(loaded)
}
