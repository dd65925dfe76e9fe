use colored::Colorize;
use paxd::api::{CmdMessage, MessageLevel};
use paxd::commands::show::FlagReport;
use paxd::error::Result;
use std::io::{self, Write};

/// Diagnostics go to stderr. Info and success messages only when verbose.
pub(super) fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        if !verbose && !message.is_diagnostic() {
            continue;
        }
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("paxd: {}", message.content.yellow()),
            MessageLevel::Error => eprintln!("paxd: {}", message.content.red()),
        }
    }
}

pub(super) fn print_reports(reports: &[FlagReport], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        serde_json::to_writer_pretty(&mut out, reports)?;
        writeln!(out)?;
        return Ok(());
    }

    for report in reports {
        writeln!(out, "{}", report.line())?;
    }
    Ok(())
}
