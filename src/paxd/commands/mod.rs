//! # Command Layer
//!
//! One module per operation. Commands take a [`PaxStore`](crate::store::PaxStore)
//! and plain Rust arguments and return a [`CmdResult`]. They never print:
//! diagnostics travel back as [`CmdMessage`]s and the caller decides where
//! they go.
//!
//! A command only returns `Err` for failures that stop it before it can do
//! any work (e.g. the configuration file cannot be opened). Per-item failures
//! are recorded as messages and flip [`CmdResult::failed`].

use crate::error::PaxError;
use std::path::PathBuf;

pub mod apply;
pub mod set;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    /// Warnings and errors are always shown; the rest only when verbose.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self.level, MessageLevel::Warning | MessageLevel::Error)
    }
}

/// What happened to one configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line or comment.
    Skipped,
    Applied { flags: String, path: PathBuf },
    /// The target does not exist on this host. Tolerated.
    PathMissing { path: PathBuf },
    InvalidFlags { token: String },
    StoreFailed { path: PathBuf, reason: String },
    Malformed { text: String },
}

impl LineOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            LineOutcome::InvalidFlags { .. }
                | LineOutcome::StoreFailed { .. }
                | LineOutcome::Malformed { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// 1-based, counting skipped lines too.
    pub line: usize,
    pub outcome: LineOutcome,
}

/// Why an apply run stopped before the end of its input.
#[derive(Debug)]
pub enum Halt {
    Malformed { line: usize },
    Read(PaxError),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub lines: Vec<LineReport>,
    pub halt: Option<Halt>,
    pub reports: Vec<show::FlagReport>,
    pub messages: Vec<CmdMessage>,
    pub failed: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Record an error message and mark the run failed.
    pub fn fail(&mut self, content: impl Into<String>) {
        self.add_message(CmdMessage::error(content));
        self.failed = true;
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }
}
