use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::flags;
use crate::store::{AttributeBackend, PaxStore};
use std::path::PathBuf;

/// Store `flags` on every path, replacing whatever was there.
///
/// The flags are validated once up front; an invalid token fails the whole
/// command before any file is touched. Unlike the config applier, a missing
/// path is an error here: the user named it explicitly.
pub fn run<B: AttributeBackend>(
    store: &PaxStore<B>,
    flags: &str,
    paths: &[PathBuf],
) -> Result<CmdResult> {
    flags::validate(flags.as_bytes()).map_err(StoreError::from)?;
    let mut result = CmdResult::default();

    for path in paths {
        match store.write(path, flags.as_bytes()) {
            Ok(()) => result.add_message(CmdMessage::success(format!(
                "set pax flags {} on {}",
                flags::decode_for_display(flags.as_bytes()),
                path.display()
            ))),
            Err(e) => result.fail(format!(
                "failed to set pax flags on {}: {}",
                path.display(),
                e
            )),
        }
    }

    Ok(result)
}

/// Remove the markings from every path. Paths without markings are fine.
pub fn clear<B: AttributeBackend>(store: &PaxStore<B>, paths: &[PathBuf]) -> CmdResult {
    let mut result = CmdResult::default();

    for path in paths {
        match store.clear(path) {
            Ok(true) => result.add_message(CmdMessage::success(format!(
                "cleared pax flags on {}",
                path.display()
            ))),
            Ok(false) => result.add_message(CmdMessage::info(format!(
                "{} has no pax flags",
                path.display()
            ))),
            Err(e) => result.fail(format!(
                "failed to clear pax flags on {}: {}",
                path.display(),
                e
            )),
        }
    }

    result
}
