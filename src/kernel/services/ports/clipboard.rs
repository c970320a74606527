//! Clipboard contracts.
//!
//! A copy is attempted on the primary (system) clipboard first; when that
//! fails the legacy path runs. Both report a two-branch `CopyAttempt` so each
//! path can be exercised on its own.

use super::runtime::BoxFuture;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("clipboard not available")]
    Unavailable,
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
    #[error("text too large for clipboard ({0} bytes)")]
    TooLarge(usize),
    #[error("io error: {0}")]
    Io(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyAttempt {
    Copied,
    Failed(CopyError),
}

impl CopyAttempt {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyAttempt::Copied)
    }
}

impl From<Result<(), CopyError>> for CopyAttempt {
    fn from(result: Result<(), CopyError>) -> Self {
        match result {
            Ok(()) => CopyAttempt::Copied,
            Err(err) => CopyAttempt::Failed(err),
        }
    }
}

/// Which path ended up placing the text on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    Failed {
        primary: CopyError,
        fallback: CopyError,
    },
}

/// Asynchronous system clipboard.
pub trait ClipboardWriter: Send + Sync {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, CopyAttempt>;
}

/// Synchronous legacy copy, run off the UI thread.
pub trait LegacyCopy: Send + Sync {
    fn copy(&self, text: &str) -> CopyAttempt;
}
