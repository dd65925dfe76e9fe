//! # API Facade
//!
//! A thin entry point over the command layer. It owns the [`PaxStore`] and
//! dispatches to `commands::*`; it neither prints nor exits.
//!
//! `PaxApi<B: AttributeBackend>` is generic over the attribute backend:
//! - Production: `PaxApi<XattrBackend>`
//! - Testing: `PaxApi<MemBackend>`

use crate::commands;
use crate::commands::show::{FlagReport, ShowOptions};
use crate::config::PaxdConfig;
use crate::error::{Result, StoreError};
use crate::store::fs::XattrBackend;
use crate::store::{AttributeBackend, PaxStore};
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, CmdResult, Halt, LineOutcome, LineReport, MessageLevel};

pub struct PaxApi<B: AttributeBackend> {
    store: PaxStore<B>,
    config: PaxdConfig,
}

impl PaxApi<XattrBackend> {
    /// An API backed by real extended attributes.
    pub fn system(config: PaxdConfig) -> Self {
        Self::new(XattrBackend::new(), config)
    }
}

impl<B: AttributeBackend> PaxApi<B> {
    pub fn new(backend: B, config: PaxdConfig) -> Self {
        Self {
            store: PaxStore::new(backend),
            config,
        }
    }

    pub fn store(&self) -> &PaxStore<B> {
        &self.store
    }

    pub fn config(&self) -> &PaxdConfig {
        &self.config
    }

    /// Apply the configured directive file.
    pub fn apply(&self) -> Result<CmdResult> {
        commands::apply::run(&self.store, self.config.conf_path())
    }

    /// Apply a directive file other than the configured one.
    pub fn apply_file(&self, conf_path: &Path) -> Result<CmdResult> {
        commands::apply::run(&self.store, conf_path)
    }

    pub fn show(&self, paths: &[PathBuf], options: ShowOptions) -> CmdResult {
        commands::show::run(&self.store, paths, options)
    }

    /// Markings of a single file, regardless of its type.
    pub fn inspect(&self, path: &Path) -> std::result::Result<FlagReport, StoreError> {
        commands::show::read_report(&self.store, path)
    }

    pub fn set(&self, flags: &str, paths: &[PathBuf]) -> Result<CmdResult> {
        commands::set::run(&self.store, flags, paths)
    }

    pub fn clear(&self, paths: &[PathBuf]) -> CmdResult {
        commands::set::clear(&self.store, paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use std::fs;
    use tempfile::TempDir;

    fn api_with(paths: &[&str], conf_path: PathBuf) -> PaxApi<MemBackend> {
        let backend = MemBackend::new();
        for p in paths {
            backend.add_file(*p);
        }
        PaxApi::new(backend, PaxdConfig { conf_path })
    }

    #[test]
    fn apply_reads_configured_file() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("paxd.conf");
        fs::write(&conf, "em /usr/bin/java\n").unwrap();

        let api = api_with(&["/usr/bin/java"], conf);
        let result = api.apply().unwrap();

        assert!(result.is_success());
        assert_eq!(
            api.inspect(Path::new("/usr/bin/java")).unwrap().flags,
            "em---"
        );
    }

    #[test]
    fn set_then_inspect() {
        let api = api_with(&["/bin/a"], PathBuf::from("/unused"));
        api.set("s", &[PathBuf::from("/bin/a")]).unwrap();
        assert_eq!(api.inspect(Path::new("/bin/a")).unwrap().flags, "----s");

        api.clear(&[PathBuf::from("/bin/a")]);
        assert!(!api.inspect(Path::new("/bin/a")).unwrap().marked);
    }
}
