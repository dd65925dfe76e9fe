use super::AttributeBackend;
use std::io;
use std::path::{Path, PathBuf};

/// Extended attributes on the real filesystem.
///
/// Symlinks are resolved first, so marking `/usr/bin/foo` marks the binary it
/// points to. A missing path fails with `io::ErrorKind::NotFound`.
#[derive(Debug, Default, Clone, Copy)]
pub struct XattrBackend;

impl XattrBackend {
    pub fn new() -> Self {
        Self
    }

    fn resolve(path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

impl AttributeBackend for XattrBackend {
    fn get(&self, path: &Path, name: &str) -> io::Result<Option<Vec<u8>>> {
        xattr::get(Self::resolve(path)?, name)
    }

    fn set(&self, path: &Path, name: &str, value: &[u8]) -> io::Result<()> {
        xattr::set(Self::resolve(path)?, name, value)
    }

    fn remove(&self, path: &Path, name: &str) -> io::Result<bool> {
        let path = Self::resolve(path)?;
        if xattr::get(&path, name)?.is_none() {
            return Ok(false);
        }
        xattr::remove(&path, name)?;
        Ok(true)
    }
}
