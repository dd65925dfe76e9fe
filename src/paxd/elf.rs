use goblin::elf::header::{ELFMAG, SELFMAG};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Whether `bytes` starts with the ELF magic.
pub fn has_elf_magic(bytes: &[u8]) -> bool {
    bytes.len() >= SELFMAG && bytes[..SELFMAG] == ELFMAG[..]
}

/// Checks the first bytes of the file at `path` for the ELF magic.
/// Files shorter than the magic are simply not ELF.
pub fn is_elf(path: &Path) -> io::Result<bool> {
    let mut header = [0u8; SELFMAG];
    let mut file = File::open(path)?;
    match file.read_exact(&mut header) {
        Ok(()) => Ok(has_elf_magic(&header)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn recognizes_magic() {
        assert!(has_elf_magic(b"\x7fELF\x02\x01\x01"));
        assert!(!has_elf_magic(b"#!/bin/sh\n"));
        assert!(!has_elf_magic(b"\x7fEL"));
    }

    #[test]
    fn probes_files() {
        let dir = TempDir::new().unwrap();
        let elf = dir.path().join("bin");
        let script = dir.path().join("script");
        let tiny = dir.path().join("tiny");
        fs::write(&elf, b"\x7fELF\x02\x01\x01\x00").unwrap();
        fs::write(&script, b"#!/bin/sh\nexit 0\n").unwrap();
        fs::write(&tiny, b"\x7f").unwrap();

        assert!(is_elf(&elf).unwrap());
        assert!(!is_elf(&script).unwrap());
        assert!(!is_elf(&tiny).unwrap());
        assert!(is_elf(&dir.path().join("missing")).is_err());
    }
}
