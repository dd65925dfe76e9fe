//! # CLI Layer
//!
//! The only place that parses arguments, writes to the terminal and decides
//! the exit status.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and per-command handlers
//! - `print`: message and report rendering
//!
//! Report lines go to stdout; diagnostics go to stderr so that
//! `paxd show -R /usr | grep` stays clean.

mod commands;
mod print;
mod setup;

pub use commands::run;
