//! Dashboard summary
//!
//! Month-level totals shown on the dashboard: spent, budgeted, remaining,
//! average daily spending and the most recent expenses.

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, MonthYear, Transaction};
use crate::storage::Storage;

use super::progress::{progress_for_month, BudgetProgress};

/// Number of transactions shown in the recent list
pub const RECENT_LIMIT: usize = 5;

/// Total spent across all categories in a month
pub fn total_spent_for_month(storage: &Storage, month: MonthYear) -> Money {
    storage.transactions.in_month(month).map(|t| t.amount).sum()
}

/// Total of all budgets set for a month
pub fn total_budget_for_month(storage: &Storage, month: MonthYear) -> Money {
    storage.budgets.for_month(month).map(|b| b.amount).sum()
}

/// Budgeted minus spent for a month; negative when over budget
pub fn budget_remaining(storage: &Storage, month: MonthYear) -> Money {
    total_budget_for_month(storage, month) - total_spent_for_month(storage, month)
}

/// Month-to-date spending divided by the day of the month of `today`
pub fn average_daily_spending(storage: &Storage, today: NaiveDate) -> Money {
    let spent = total_spent_for_month(storage, MonthYear::of(today));
    spent.split_even(today.day())
}

/// The latest transactions, newest date first
pub fn recent_transactions(storage: &Storage, limit: usize) -> Vec<&Transaction> {
    let mut txns: Vec<&Transaction> = storage.transactions.all().iter().collect();
    txns.sort_by(|a, b| b.date.cmp(&a.date));
    txns.truncate(limit);
    txns
}

/// Everything the dashboard shows for one month
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub month: MonthYear,
    pub total_spent: Money,
    pub total_budget: Money,
    pub remaining: Money,
    pub average_daily: Money,
    pub transaction_count: usize,
    pub budgets: Vec<BudgetProgress>,
    pub recent: Vec<Transaction>,
}

impl DashboardSummary {
    /// Build the dashboard for the month containing `today`
    pub fn generate(storage: &Storage, today: NaiveDate) -> Self {
        let month = MonthYear::of(today);
        let total_spent = total_spent_for_month(storage, month);
        let total_budget = total_budget_for_month(storage, month);

        Self {
            month,
            total_spent,
            total_budget,
            remaining: total_budget - total_spent,
            average_daily: average_daily_spending(storage, today),
            transaction_count: storage.transactions.len(),
            budgets: progress_for_month(storage, month),
            recent: recent_transactions(storage, RECENT_LIMIT)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
