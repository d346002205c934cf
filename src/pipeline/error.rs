use std::io;

use thiserror::Error;

/// Failures that end a conversion run
///
/// Per-line problems are never surfaced here; see
/// [`LineError`](crate::parsers::LineError).
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read input")]
    Source(#[source] io::Error),

    #[error("failed to write records")]
    SinkFailure(#[source] io::Error),
}
