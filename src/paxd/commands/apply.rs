//! Batch-apply markings from a configuration file.
//!
//! Every line is handled on its own: a bad flag token or a failed write is
//! reported and the run goes on, but the run as a whole is marked failed.
//! A target path that does not exist is silently skipped, since one
//! configuration is usually shared by hosts with different software.
//!
//! A structurally malformed line is the exception: it is reported and no
//! further lines are read. Failing to open or read the file is fatal.

use crate::commands::{CmdMessage, CmdResult, Halt, LineOutcome, LineReport};
use crate::directive::{parse_line, Directive, ParsedLine};
use crate::error::{PaxError, Result, StoreError};
use crate::store::{AttributeBackend, PaxStore};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Apply the configuration file at `conf_path`.
///
/// Returns `Err` only if the file cannot be opened; everything after that is
/// described by the returned result.
pub fn run<B: AttributeBackend>(store: &PaxStore<B>, conf_path: &Path) -> Result<CmdResult> {
    let file = File::open(conf_path).map_err(|source| PaxError::ConfigOpen {
        path: conf_path.to_path_buf(),
        source,
    })?;

    Ok(apply_lines(store, BufReader::new(file), conf_path))
}

/// Apply directives read from `reader`. `source` names the input in messages.
pub fn apply_lines<B: AttributeBackend, R: BufRead>(
    store: &PaxStore<B>,
    mut reader: R,
    source: &Path,
) -> CmdResult {
    let mut result = CmdResult::default();
    let mut buf = Vec::new();

    for n in 1.. {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source_err) => {
                let err = PaxError::ConfigRead {
                    path: source.to_path_buf(),
                    source: source_err,
                };
                result.fail(err.to_string());
                result.halt = Some(Halt::Read(err));
                break;
            }
        }

        let outcome = match parse_line(&buf) {
            ParsedLine::Skip => LineOutcome::Skipped,
            ParsedLine::Malformed(text) => LineOutcome::Malformed {
                text: String::from_utf8_lossy(text).into_owned(),
            },
            ParsedLine::Directive(directive) => apply_directive(store, &directive),
        };

        report(&mut result, n, &outcome);
        let malformed = matches!(outcome, LineOutcome::Malformed { .. });
        result.lines.push(LineReport { line: n, outcome });

        if malformed {
            result.halt = Some(Halt::Malformed { line: n });
            break;
        }
    }

    result
}

fn apply_directive<B: AttributeBackend>(
    store: &PaxStore<B>,
    directive: &Directive<'_>,
) -> LineOutcome {
    let path = directive.path.to_path_buf();
    match store.write(directive.path, directive.flags) {
        Ok(()) => LineOutcome::Applied {
            flags: String::from_utf8_lossy(directive.flags).into_owned(),
            path,
        },
        Err(StoreError::InvalidFlag(e)) => LineOutcome::InvalidFlags { token: e.token },
        Err(StoreError::NotFound(_)) => LineOutcome::PathMissing { path },
        Err(StoreError::Io { source, .. }) => LineOutcome::StoreFailed {
            path,
            reason: source.to_string(),
        },
    }
}

fn report(result: &mut CmdResult, n: usize, outcome: &LineOutcome) {
    match outcome {
        LineOutcome::Skipped => {}
        LineOutcome::Applied { flags, path } => result.add_message(CmdMessage::success(format!(
            "line {}: set pax flags {} on {}",
            n,
            flags,
            path.display()
        ))),
        LineOutcome::PathMissing { path } => result.add_message(CmdMessage::info(format!(
            "line {}: {} does not exist, skipping",
            n,
            path.display()
        ))),
        LineOutcome::InvalidFlags { token } => {
            result.fail(format!("line {}: invalid pax flags: {}", n, token))
        }
        LineOutcome::StoreFailed { path, reason } => result.fail(format!(
            "failed to set pax flags on {}: {}",
            path.display(),
            reason
        )),
        LineOutcome::Malformed { text } => {
            result.fail(format!("line {}: ignoring invalid line: {}", n, text))
        }
    }
}
