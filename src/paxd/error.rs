use crate::flags::FlagError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the attribute store adapter.
///
/// `NotFound` is kept apart from `Io` because callers routinely tolerate it:
/// on write it means the target path does not exist, on read it means the
/// file carries no markings. Messages leave the path out; callers add it
/// as context.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    InvalidFlag(#[from] FlagError),

    #[error("no such file or attribute")]
    NotFound(PathBuf),

    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[derive(Error, Debug)]
pub enum PaxError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not open {}: {source}", path.display())]
    ConfigOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line from {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not an elf binary", .0.display())]
    NotElf(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaxError>;
