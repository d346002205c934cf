use std::io::{Read, Write};

use anyhow::{Context, Result};

use super::reader::RecordReader;

/// Print records as `a.b.c.d|prb_id|rtt1|rtt2|rtt3`, one per line
///
/// Stops after `limit` records if given. Returns the number printed.
///
/// # Errors
///
/// Returns an error if the input cannot be read, ends with a partial record,
/// or the output cannot be written. Records before the failure are printed.
pub fn dump_records<R, W>(input: R, out: &mut W, limit: Option<usize>) -> Result<usize>
where
    R: Read,
    W: Write,
{
    let mut printed = 0;
    for record in RecordReader::new(input).take(limit.unwrap_or(usize::MAX)) {
        let record = record.context("Failed to read record")?;
        writeln!(out, "{}", record).context("Failed to write output")?;
        printed += 1;
    }
    out.flush().context("Failed to write output")?;
    Ok(printed)
}
