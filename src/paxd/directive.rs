//! Line parser for the paxd configuration file.
//!
//! Grammar of a directive line:
//!
//! ```text
//! <ws>* <flags> <ws>+ <path> <ws>* [\n]
//! ```
//!
//! `<ws>` is a space or a tab. `<path>` must start with `/`. Lines that are
//! empty or whose very first byte is `#` are skipped; a `#` after leading
//! whitespace is not a comment. The flags token is not checked here, see
//! [`crate::flags::validate`].
//!
//! Lines are handled as raw bytes so that non-UTF-8 paths survive intact.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Root marker a path token must start with.
const PATH_ROOT: u8 = b'/';

/// Classification of one configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Blank line or comment.
    Skip,
    /// Structurally broken; carries the line without leading whitespace or
    /// terminator, for reporting.
    Malformed(&'a [u8]),
    Directive(Directive<'a>),
}

/// A flags token paired with the path it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    pub flags: &'a [u8],
    pub path: &'a Path,
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn skip_blanks(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&b| !is_blank(b)).unwrap_or(s.len());
    &s[start..]
}

pub fn parse_line(line: &[u8]) -> ParsedLine<'_> {
    match line.first() {
        None | Some(b'\n') | Some(b'#') => return ParsedLine::Skip,
        _ => {}
    }

    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let rest = skip_blanks(line);

    let split = rest.iter().position(|&b| is_blank(b)).unwrap_or(rest.len());
    let path = skip_blanks(&rest[split..]);

    if split == rest.len() || path.first() != Some(&PATH_ROOT) {
        return ParsedLine::Malformed(rest);
    }

    // Trailing blanks (and a CR from CRLF files) are never part of the path.
    let end = path
        .iter()
        .rposition(|&b| !is_blank(b) && b != b'\r')
        .map_or(0, |i| i + 1);

    ParsedLine::Directive(Directive {
        flags: &rest[..split],
        path: Path::new(OsStr::from_bytes(&path[..end])),
    })
}
