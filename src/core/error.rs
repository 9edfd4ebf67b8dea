//! Error taxonomy for a frequency run
//!
//! Every variant is fatal to the run. The CLI layer turns them into a single
//! diagnostic line and a non-zero exit.

use thiserror::Error;

use crate::core::mode::Mode;

#[derive(Debug, Error)]
pub enum FreqError {
    /// The `--by` selector is not one of the known modes
    #[error(
        "unsupported --by value: {0} (expected one of: {expected})",
        expected = Mode::available_modes().join(", ")
    )]
    UnsupportedMode(String),

    /// The `--format` selector is not one of the known output formats
    #[error("unsupported --format value: {0}")]
    UnsupportedFormat(String),

    /// The input stream failed mid-scan
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    /// The output sink failed
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),

    /// A single token grew past the configured bound
    #[error("token too long (maximum is {max} bytes)")]
    TokenTooLong { max: usize },
}

pub type Result<T, E = FreqError> = std::result::Result<T, E>;
