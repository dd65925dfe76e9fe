//! # Storage Layer
//!
//! PaX markings live in a single extended attribute, [`PAX_ATTR`], on the
//! marked file itself. There is no database and no in-memory copy: every
//! operation goes to the filesystem afresh.
//!
//! The layer has two levels:
//!
//! - [`AttributeBackend`]: a raw get/set/remove-by-name byte store. The
//!   production implementation is [`fs::XattrBackend`]; tests use
//!   [`memory::MemBackend`], which needs no xattr-capable filesystem.
//! - [`PaxStore`]: the adapter the rest of the crate talks to. It validates
//!   flags before writing and sorts failures into [`StoreError`] variants.
//!
//! Writes replace the stored value wholesale; there is no merging. Nothing is
//! cached and nothing is retried.

use crate::error::StoreError;
use crate::flags::{self, PAX_LEN};
use std::io;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Name of the attribute holding the flag string.
pub const PAX_ATTR: &str = "user.pax.flags";

/// Abstract interface for a named byte-array attribute store.
pub trait AttributeBackend {
    /// Read the attribute `name` of `path`.
    /// Returns Ok(None) if the file exists but carries no such attribute.
    fn get(&self, path: &Path, name: &str) -> io::Result<Option<Vec<u8>>>;

    /// Replace the attribute `name` of `path` with `value`.
    /// A missing `path` must surface as `io::ErrorKind::NotFound`.
    fn set(&self, path: &Path, name: &str, value: &[u8]) -> io::Result<()>;

    /// Delete the attribute. Returns Ok(false) if there was nothing to delete.
    fn remove(&self, path: &Path, name: &str) -> io::Result<bool>;
}

/// Reads and writes PaX flag strings through an [`AttributeBackend`].
pub struct PaxStore<B: AttributeBackend> {
    backend: B,
}

impl<B: AttributeBackend> PaxStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate `flags` and store them on `path` exactly as given.
    pub fn write(&self, path: &Path, flags: &[u8]) -> Result<(), StoreError> {
        flags::validate(flags)?;
        self.backend
            .set(path, PAX_ATTR, flags)
            .map_err(|e| classify_write_error(path, e))
    }

    /// Return the raw stored bytes, at most `capacity` of them.
    ///
    /// An absent attribute is `StoreError::NotFound`; a missing path is an
    /// ordinary `StoreError::Io`.
    pub fn read(&self, path: &Path, capacity: usize) -> Result<Vec<u8>, StoreError> {
        let value = self
            .backend
            .get(path, PAX_ATTR)
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Some(mut bytes) => {
                bytes.truncate(capacity);
                Ok(bytes)
            }
            None => Err(StoreError::NotFound(path.to_path_buf())),
        }
    }

    /// Read with the capacity of one full flag string.
    pub fn read_flags(&self, path: &Path) -> Result<Vec<u8>, StoreError> {
        self.read(path, PAX_LEN)
    }

    /// Remove any markings from `path`. Returns whether something was removed.
    pub fn clear(&self, path: &Path) -> Result<bool, StoreError> {
        self.backend
            .remove(path, PAX_ATTR)
            .map_err(|e| classify_write_error(path, e))
    }
}

fn classify_write_error(path: &Path, source: io::Error) -> StoreError {
    if source.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(path.to_path_buf())
    } else {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
