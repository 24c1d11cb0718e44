//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` through a
//! `#[from]` variant where they need to surface it.

use thiserror::Error;

/// Errors raised when parsing `crowd-core` values from text.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown destination preset {0:?}: expected \"hold\" or \"exit\"")]
    UnknownPreset(String),
}

/// Shorthand result type for `crowd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
