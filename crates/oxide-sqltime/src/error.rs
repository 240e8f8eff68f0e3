//! Error types for the TIME codec.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced while decoding a TIME value.
#[derive(Debug, Error)]
pub enum TimeError {
    /// A colon-separated segment of the text form is not a decimal integer.
    #[error("invalid time segment {segment:?}: {source}")]
    InvalidSegment {
        /// The offending segment (lossily decoded if it was not UTF-8).
        segment: String,
        /// The integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// `scan` was called with a driver value it cannot read a TIME from.
    #[error("unsupported scan source type: {0}")]
    UnsupportedScanType(&'static str),

    /// JSON input was not `null` or a JSON string.
    #[error("invalid JSON time: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for TIME codec operations.
pub type Result<T> = std::result::Result<T, TimeError>;
