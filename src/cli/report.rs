//! Report and history CLI commands

use clap::Subcommand;

use super::Session;
use crate::audit::AuditLogger;
use crate::display::{format_audit_entries, format_spending_report};
use crate::error::TrackerResult;
use crate::reports::SpendingReport;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending by category across all months
    Spending,
}

/// Handle a report command
pub fn handle_report_command(session: &mut Session, cmd: ReportCommands) -> TrackerResult<()> {
    match cmd {
        ReportCommands::Spending => {
            let report = SpendingReport::generate(&session.storage);
            print!(
                "{}",
                format_spending_report(&report, session.settings.currency)
            );
        }
    }

    Ok(())
}

/// Show the most recent audit log entries
///
/// Reads the log even when auditing is currently switched off.
pub fn handle_history_command(session: &mut Session, limit: usize) -> TrackerResult<()> {
    let logger = AuditLogger::new(session.paths.audit_log());
    let entries = logger.read_recent(limit)?;
    print!("{}", format_audit_entries(&entries));
    Ok(())
}
