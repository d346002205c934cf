//! Line-by-line conversion driver
//!
//! Each line is read, located, guarded, validated and written before the
//! next one is read. Records come out in input order, minus skipped lines.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::error::ConvertError;
use super::line_source::{DEFAULT_MAX_LINE_LEN, LineSource};
use super::writer::RecordWriter;
use crate::parsers::{FieldLocator, LineError, Schema, parse_ping_line};

/// Settings for one extraction run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    pub schema: Schema,
    pub max_line_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { schema: Schema::default(), max_line_len: DEFAULT_MAX_LINE_LEN }
    }
}

/// Counters collected over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Non-blank lines seen
    pub lines: u64,
    pub blank_lines: u64,
    pub records: u64,
    /// Skipped lines keyed by [`LineError::kind`]
    pub skipped: BTreeMap<&'static str, u64>,
}

impl ConvertStats {
    pub fn skipped_total(&self) -> u64 {
        self.skipped.values().sum()
    }

    fn record_skip(&mut self, err: &LineError) {
        *self.skipped.entry(err.kind()).or_insert(0) += 1;
    }
}

/// Convert every usable line of `input` into a record on `sink`
///
/// Unusable lines are counted and skipped. Only read or write failures stop
/// the run; records written before such a failure stay in the sink.
///
/// # Errors
///
/// - [`ConvertError::Source`] if the input stream fails
/// - [`ConvertError::SinkFailure`] if a record cannot be written
pub fn convert<R, W>(
    input: R,
    sink: &mut RecordWriter<W>,
    config: &ExtractConfig,
) -> Result<ConvertStats, ConvertError>
where
    R: BufRead,
    W: Write,
{
    let mut source = LineSource::new(input, config.max_line_len);
    let mut stats = ConvertStats::default();

    debug!(
        schema = config.schema.name(),
        max_line_len = config.max_line_len,
        "starting conversion"
    );

    while let Some(line) = source.next_line().map_err(ConvertError::Source)? {
        if matches!(&line, Ok(text) if text.trim_ascii().is_empty()) {
            stats.blank_lines += 1;
            continue;
        }
        stats.lines += 1;

        match line.and_then(|text| parse_ping_line(&config.schema, text)) {
            Ok(record) => {
                sink.write_record(&record).map_err(ConvertError::SinkFailure)?;
                stats.records += 1;
            }
            Err(e) => {
                debug!(line = source.line_number(), reason = %e, "skipping line");
                stats.record_skip(&e);
            }
        }
    }

    info!(
        lines = stats.lines,
        records = stats.records,
        skipped = stats.skipped_total(),
        "conversion finished"
    );

    Ok(stats)
}
