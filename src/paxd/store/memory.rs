use super::AttributeBackend;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory attribute backend for testing.
///
/// Only paths registered with [`MemBackend::add_file`] exist; everything else
/// behaves like a missing file. Uses `RefCell` since paxd is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    files: RefCell<HashMap<PathBuf, HashMap<String, Vec<u8>>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `path` exist, with no attributes.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        self.files.borrow_mut().entry(path.into()).or_default();
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn missing(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: no such file", path.display()),
        )
    }

    fn check_writable(&self) -> io::Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write error",
            ));
        }
        Ok(())
    }
}

impl AttributeBackend for MemBackend {
    fn get(&self, path: &Path, name: &str) -> io::Result<Option<Vec<u8>>> {
        let files = self.files.borrow();
        let attrs = files.get(path).ok_or_else(|| Self::missing(path))?;
        Ok(attrs.get(name).cloned())
    }

    fn set(&self, path: &Path, name: &str, value: &[u8]) -> io::Result<()> {
        self.check_writable()?;
        let mut files = self.files.borrow_mut();
        let attrs = files.get_mut(path).ok_or_else(|| Self::missing(path))?;
        attrs.insert(name.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, path: &Path, name: &str) -> io::Result<bool> {
        self.check_writable()?;
        let mut files = self.files.borrow_mut();
        let attrs = files.get_mut(path).ok_or_else(|| Self::missing(path))?;
        Ok(attrs.remove(name).is_some())
    }
}
