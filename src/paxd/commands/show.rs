//! Report the markings of ELF binaries.
//!
//! Without `recursive`, every given path must be an ELF file. With it, each
//! path is a root to walk: symlinks named on the command line are followed,
//! symlinks found inside the tree are not, and only regular ELF files are
//! reported.

use crate::commands::{CmdMessage, CmdResult};
use crate::elf;
use crate::error::{PaxError, StoreError};
use crate::flags::{decode_for_display, UNSET};
use crate::store::{AttributeBackend, PaxStore};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The markings of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagReport {
    pub path: PathBuf,
    /// Fixed-width rendering, e.g. `pe---`.
    pub flags: String,
    /// Whether the attribute exists at all.
    pub marked: bool,
}

impl FlagReport {
    /// Whether at least one flag is set.
    pub fn has_flags(&self) -> bool {
        self.flags.chars().any(|c| c != UNSET)
    }

    /// The `<flags> <path>` report line.
    pub fn line(&self) -> String {
        format!("{} {}", self.flags, self.path.display())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
    pub recursive: bool,
    /// Hide files without any flag set.
    pub filter: bool,
}

pub fn run<B: AttributeBackend>(
    store: &PaxStore<B>,
    paths: &[PathBuf],
    options: ShowOptions,
) -> CmdResult {
    let mut result = CmdResult::default();

    for path in paths {
        if options.recursive {
            walk(store, path, options.filter, &mut result);
        } else {
            match elf::is_elf(path) {
                Ok(true) => inspect_into(store, path, options.filter, &mut result),
                Ok(false) => result.fail(PaxError::NotElf(path.clone()).to_string()),
                Err(e) => result.fail(format!("'{}': {}", path.display(), e)),
            }
        }
    }

    result
}

fn walk<B: AttributeBackend>(
    store: &PaxStore<B>,
    root: &Path,
    filter: bool,
    result: &mut CmdResult,
) {
    let entries = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                result.add_message(CmdMessage::warning(e.to_string()));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match elf::is_elf(entry.path()) {
            Ok(true) => inspect_into(store, entry.path(), filter, result),
            Ok(false) => {}
            Err(e) => result.add_message(CmdMessage::info(format!(
                "skipping '{}': {}",
                entry.path().display(),
                e
            ))),
        }
    }
}

fn inspect_into<B: AttributeBackend>(
    store: &PaxStore<B>,
    path: &Path,
    filter: bool,
    result: &mut CmdResult,
) {
    match inspect(store, path, filter) {
        Ok(Some(report)) => result.reports.push(report),
        Ok(None) => {}
        Err(e) => result.fail(format!("failed to get pax for '{}': {}", path.display(), e)),
    }
}

/// Read and decode the markings of `path`.
///
/// Returns Ok(None) when `filter` is set and no flag is set on the file.
pub fn inspect<B: AttributeBackend>(
    store: &PaxStore<B>,
    path: &Path,
    filter: bool,
) -> Result<Option<FlagReport>, StoreError> {
    let report = read_report(store, path)?;
    if filter && !report.has_flags() {
        return Ok(None);
    }
    Ok(Some(report))
}

/// Read and decode the markings of `path`. An unmarked file reports `-----`.
pub fn read_report<B: AttributeBackend>(
    store: &PaxStore<B>,
    path: &Path,
) -> Result<FlagReport, StoreError> {
    let (stored, marked) = match store.read_flags(path) {
        Ok(bytes) => (bytes, true),
        Err(StoreError::NotFound(_)) => (Vec::new(), false),
        Err(e) => return Err(e),
    };

    Ok(FlagReport {
        path: path.to_path_buf(),
        flags: decode_for_display(&stored),
        marked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;
    use std::fs;
    use tempfile::TempDir;

    const ELF: &[u8] = b"\x7fELF\x02\x01\x01\x00";

    fn store_with<P: AsRef<Path>>(paths: &[P]) -> PaxStore<MemBackend> {
        let backend = MemBackend::new();
        for p in paths {
            backend.add_file(p.as_ref());
        }
        PaxStore::new(backend)
    }

    #[test]
    fn inspect_renders_fixed_width() {
        let path = Path::new("/bin/true");
        let store = store_with(&[path]);
        store.write(path, b"sP").unwrap();

        let report = inspect(&store, path, false).unwrap().unwrap();
        assert_eq!(report.flags, "p---s");
        assert!(report.marked);
        assert_eq!(report.line(), "p---s /bin/true");
    }

    #[test]
    fn inspect_unmarked_file() {
        let path = Path::new("/bin/true");
        let store = store_with(&[path]);

        let report = inspect(&store, path, false).unwrap().unwrap();
        assert_eq!(report.flags, "-----");
        assert!(!report.marked);
        assert!(inspect(&store, path, true).unwrap().is_none());
    }

    #[test]
    fn filter_hides_empty_markings() {
        let path = Path::new("/bin/true");
        let store = store_with(&[path]);
        store.write(path, b"").unwrap();
        assert!(inspect(&store, path, true).unwrap().is_none());

        store.write(path, b"m").unwrap();
        assert!(inspect(&store, path, true).unwrap().is_some());
    }

    #[test]
    fn inspect_propagates_read_failures() {
        let store = store_with::<&Path>(&[]);
        let err = inspect(&store, Path::new("/gone"), false).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn rejects_non_elf_paths() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("script.sh");
        fs::write(&script, b"#!/bin/sh\n").unwrap();
        let store = store_with(&[&script]);

        let result = run(&store, &[script.clone()], ShowOptions::default());

        assert!(result.failed);
        assert!(result.reports.is_empty());
        assert_eq!(
            result.messages[0].content,
            format!("'{}' is not an elf binary", script.display())
        );
    }

    #[test]
    fn walks_tree_for_elf_files_only() {
        let dir = TempDir::new().unwrap();
        let bin = dir.path().join("bin");
        let lib = dir.path().join("lib").join("deep");
        fs::create_dir_all(&bin).unwrap();
        fs::create_dir_all(&lib).unwrap();

        let a = bin.join("a");
        let b = lib.join("b.so");
        let text = bin.join("README");
        fs::write(&a, ELF).unwrap();
        fs::write(&b, ELF).unwrap();
        fs::write(&text, b"not a binary").unwrap();

        let store = store_with(&[&a, &b, &text]);
        store.write(&a, b"pe").unwrap();

        let result = run(
            &store,
            &[dir.path().to_path_buf()],
            ShowOptions {
                recursive: true,
                filter: false,
            },
        );

        assert!(result.is_success());
        let lines: Vec<String> = result.reports.iter().map(|r| r.line()).collect();
        assert_eq!(
            lines,
            vec![
                format!("pe--- {}", a.display()),
                format!("----- {}", b.display()),
            ]
        );
    }

    #[test]
    fn recursive_filter_keeps_marked_files() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, ELF).unwrap();
        fs::write(&b, ELF).unwrap();

        let store = store_with(&[&a, &b]);
        store.write(&b, b"r").unwrap();

        let result = run(
            &store,
            &[dir.path().to_path_buf()],
            ShowOptions {
                recursive: true,
                filter: true,
            },
        );

        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].path, b);
        assert_eq!(result.reports[0].flags, "---r-");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = FlagReport {
            path: PathBuf::from("/bin/true"),
            flags: "pe---".into(),
            marked: true,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"path": "/bin/true", "flags": "pe---", "marked": true})
        );
    }
}
