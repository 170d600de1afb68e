//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. A [`Session`] holds the
//! in-memory ledger for one invocation or one interactive shell.

pub mod budget;
pub mod category;
pub mod report;
pub mod settings;
pub mod shell;
pub mod suggest;
pub mod transaction;

use chrono::NaiveDate;
use clap::Subcommand;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_history_command, handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use shell::run_shell;
pub use suggest::handle_suggest_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::audit::AuditLogger;
use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money, MonthYear};
use crate::reports::DashboardSummary;
use crate::storage::Storage;

/// State shared by every command in a session
#[derive(Debug)]
pub struct Session {
    pub storage: Storage,
    pub settings: Settings,
    pub paths: TrackerPaths,
    /// The date treated as today for defaults and validation
    pub today: NaiveDate,
}

impl Session {
    /// Create a session, attaching the audit log when enabled
    pub fn new(storage: Storage, settings: Settings, paths: TrackerPaths, today: NaiveDate) -> Self {
        let mut session = Self {
            storage,
            settings,
            paths,
            today,
        };
        session.sync_audit();
        session
    }

    /// Attach or detach the audit logger to match the settings
    pub fn sync_audit(&mut self) {
        let logger = self
            .settings
            .audit_enabled
            .then(|| AuditLogger::new(self.paths.audit_log()));
        self.storage.set_audit(logger);
    }

    /// The month containing today
    pub fn current_month(&self) -> MonthYear {
        MonthYear::of(self.today)
    }

    /// Parse an optional `YYYY-MM`, defaulting to the current month
    pub fn month_or_current(&self, month: Option<&str>) -> TrackerResult<MonthYear> {
        match month {
            Some(m) => parse_month(m),
            None => Ok(self.current_month()),
        }
    }

    /// Resolve a category by name or ID
    pub fn category(&self, identifier: &str) -> TrackerResult<Category> {
        self.storage
            .categories
            .find(identifier)
            .cloned()
            .ok_or_else(|| TrackerError::category_not_found(identifier))
    }
}

/// Commands that operate on the ledger; shared by the binary and the shell
#[derive(Subcommand, Debug)]
pub enum LedgerCommand {
    /// Show this month's totals, budgets and recent transactions
    Dashboard,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Ask for a category suggestion for an expense
    Suggest {
        /// Vendor name
        vendor: String,
        /// Amount (e.g., "75.50")
        amount: String,
        /// Optional description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Show or change preferences
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Run one ledger command against the session
pub fn dispatch(session: &mut Session, cmd: LedgerCommand) -> TrackerResult<()> {
    match cmd {
        LedgerCommand::Dashboard => {
            let summary = DashboardSummary::generate(&session.storage, session.today);
            print!(
                "{}",
                crate::display::format_dashboard(
                    &summary,
                    &session.storage.categories,
                    session.settings.currency
                )
            );
            Ok(())
        }
        LedgerCommand::Transaction(cmd) => handle_transaction_command(session, cmd),
        LedgerCommand::Category(cmd) => handle_category_command(session, cmd),
        LedgerCommand::Budget(cmd) => handle_budget_command(session, cmd),
        LedgerCommand::Report(cmd) => handle_report_command(session, cmd),
        LedgerCommand::Suggest {
            vendor,
            amount,
            description,
        } => handle_suggest_command(session, &vendor, &amount, description),
        LedgerCommand::Settings(cmd) => handle_settings_command(session, cmd),
        LedgerCommand::History { limit } => handle_history_command(session, limit),
    }
}

/// Parse an amount argument
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input)
        .map_err(|e| TrackerError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", input))
    })
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(input: &str) -> TrackerResult<MonthYear> {
    MonthYear::parse(input.trim()).map_err(|e| TrackerError::Validation(e.to_string()))
}
