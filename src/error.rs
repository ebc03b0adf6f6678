//! Error types for the analyzer boundary.

use std::io;
use thiserror::Error;

/// Failure of a whole fetch call against the external analyzer.
///
/// The variants exist so logs can say what actually went wrong; callers
/// treat every variant the same way (the entire fetch failed, no retry,
/// no partial result).
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("analyzer runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    #[error("failed to launch analyzer: {0}")]
    Launch(#[from] io::Error),

    #[error("analyzer exited with {status}: {detail}")]
    AnalyzerFailed { status: String, detail: String },

    #[error("analyzer produced non-UTF-8 output")]
    BadOutput(#[from] std::string::FromUtf8Error),
}
