use paxd::error::StoreError;
use paxd::store::fs::XattrBackend;
use paxd::store::{AttributeBackend, PaxStore, PAX_ATTR};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> Option<(TempDir, PaxStore<XattrBackend>)> {
    let dir = TempDir::new().unwrap();
    let probe = dir.path().join(".probe");
    fs::write(&probe, b"").unwrap();
    if xattr::set(&probe, "user.paxd.probe", b"1").is_err() {
        // No user xattrs on this filesystem (e.g. older tmpfs).
        return None;
    }
    Some((dir, PaxStore::new(XattrBackend::new())))
}

fn touch(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, b"").unwrap();
    path
}

#[test]
fn test_write_lands_in_named_attribute() {
    let Some((dir, store)) = setup() else { return };
    let path = touch(&dir, "bin");

    store.write(&path, b"pe").unwrap();

    assert_eq!(xattr::get(&path, PAX_ATTR).unwrap(), Some(b"pe".to_vec()));
}

#[test]
fn test_write_replaces_previous_value() {
    let Some((dir, store)) = setup() else { return };
    let path = touch(&dir, "bin");

    store.write(&path, b"pemrs").unwrap();
    store.write(&path, b"e").unwrap();

    assert_eq!(store.read_flags(&path).unwrap(), b"e");
}

#[test]
fn test_unmarked_file_reads_not_found() {
    let Some((dir, store)) = setup() else { return };
    let path = touch(&dir, "bin");

    assert!(store.read_flags(&path).unwrap_err().is_not_found());
}

#[test]
fn test_missing_path_write_is_not_found() {
    let Some((dir, store)) = setup() else { return };

    let err = store.write(&dir.path().join("absent"), b"p").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_missing_path_read_is_io() {
    let Some((dir, store)) = setup() else { return };

    let err = store.read_flags(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn test_symlink_marks_target() {
    let Some((dir, store)) = setup() else { return };
    let target = touch(&dir, "real");
    let link = dir.path().join("link");
    std::os::unix::fs::symlink(&target, &link).unwrap();

    store.write(&link, b"m").unwrap();

    assert_eq!(store.read_flags(&target).unwrap(), b"m");
}

#[test]
fn test_remove_reports_whether_anything_was_removed() {
    let Some((dir, _store)) = setup() else { return };
    let path = touch(&dir, "bin");
    let backend = XattrBackend::new();

    assert!(!backend.remove(Path::new(&path), PAX_ATTR).unwrap());
    backend.set(&path, PAX_ATTR, b"s").unwrap();
    assert!(backend.remove(&path, PAX_ATTR).unwrap());
    assert_eq!(backend.get(&path, PAX_ATTR).unwrap(), None);
}
