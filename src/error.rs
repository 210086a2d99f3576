//! Error types for the acquisition pipeline.
//!
//! Two layers:
//!
//! - **`FormatError`**: what can go wrong while decoding a single raw VNA
//!   response (bad header, truncated payload, non-numeric segment).
//! - **`PipelineError`**: everything `process_sample` can report to the
//!   request adapter. Decoding failures are wrapped together with the
//!   response they came from, length mismatches are caught before a record
//!   is built, and filesystem failures carry the path that failed.
//!
//! A directory that already exists is never an error; see
//! [`crate::storage::ensure_dir`].

use std::fmt;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results using the pipeline error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Malformed raw instrument response.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("response is empty")]
    Empty,

    #[error("response must start with '#', found {0:?}")]
    MissingMarker(char),

    #[error("header length {0:?} is not a decimal digit")]
    BadHeaderDigit(char),

    #[error("response is {len} bytes but its header requires at least {needed}")]
    Truncated { len: usize, needed: usize },

    #[error("segment {index} ({segment:?}) is not a valid float")]
    BadValue {
        index: usize,
        segment: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("segment {index} ({segment:?}) is not a finite number")]
    NonFinite { index: usize, segment: String },

    #[error("payload does not end with a trailing ',' (last segment {0:?})")]
    MissingTrailingDelimiter(String),
}

/// Which of the two VNA queries a response answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Frequency,
    Trace,
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseKind::Frequency => write!(f, "frequency"),
            ResponseKind::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("malformed VNA {response} response: {source}")]
    Format {
        response: ResponseKind,
        #[source]
        source: FormatError,
    },

    #[error(
        "sequence lengths differ: {freq} frequency, {real} real, {imaginary} imaginary values"
    )]
    LengthMismatch {
        freq: usize,
        real: usize,
        imaginary: usize,
    },

    #[error("survey directory {0:?} must be a non-empty relative path without '..'")]
    InvalidSurveyDir(String),

    #[error("could not determine the user's home directory")]
    NoHomeDir,

    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize sample: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PipelineError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
