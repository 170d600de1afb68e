//! Reports module for SpendTrack
//!
//! Read-only aggregations over the ledger: budget progress, dashboard
//! totals and the category spending breakdown.

pub mod dashboard;
pub mod progress;
pub mod spending;

pub use dashboard::{
    average_daily_spending, budget_remaining, recent_transactions, total_budget_for_month,
    total_spent_for_month, DashboardSummary, RECENT_LIMIT,
};
pub use progress::{
    budget_progress, progress_for_month, spent_amount, BudgetProgress, BudgetStatus,
};
pub use spending::{SpendingByCategory, SpendingReport};

/// Label for spending whose category no longer exists
pub const UNCATEGORIZED: &str = "Uncategorized";
