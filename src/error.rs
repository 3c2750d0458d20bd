//! Error types.
//!
//! Every fallible operation returns [`Result`]. Store *load* problems are not
//! represented here: a missing or unreadable store is logged and treated as
//! empty.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Target(#[from] TargetError),
}

/// A pattern fragment that does not compile.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("invalid pattern `{pattern}`: {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Failures persisting the secret store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to serialize secret store: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write secret store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures reading or rewriting a configured target file.
#[derive(Error, Debug)]
pub enum TargetError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
