//! Budget progress
//!
//! Compares a month's spending in a category against that category's budget.
//! Percentages are not capped; remaining goes negative once overspent.

use crate::models::{Budget, CategoryId, Money, MonthYear};
use crate::storage::Storage;

/// Percentage above which a budget counts as nearly used up
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

/// Where a budget stands for its month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OnTrack,
    NearLimit,
    Overspent,
}

impl BudgetStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 100.0 {
            Self::Overspent
        } else if percentage > NEAR_LIMIT_PERCENT {
            Self::NearLimit
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On track",
            Self::NearLimit => "Near limit",
            Self::Overspent => "Overspent",
        }
    }
}

/// Spending against one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub budget: Budget,
    pub category_name: String,
    pub spent: Money,
    /// `spent / amount * 100`, or 0 for a non-positive amount
    pub percentage: f64,
    /// `amount - spent`
    pub remaining: Money,
}

impl BudgetProgress {
    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::from_percentage(self.percentage)
    }

    /// Percentage clamped to `0..=100` for drawing a bar
    pub fn bar_percentage(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }
}

/// Total spent in a category during a month
pub fn spent_amount(storage: &Storage, category_id: CategoryId, month: MonthYear) -> Money {
    storage.transactions.total_for(category_id, month)
}

/// Progress for a single budget
pub fn budget_progress(storage: &Storage, budget: &Budget) -> BudgetProgress {
    let spent = spent_amount(storage, budget.category_id, budget.month_year);
    let category_name = storage
        .categories
        .name_of(budget.category_id)
        .unwrap_or(super::UNCATEGORIZED)
        .to_string();

    BudgetProgress {
        budget: budget.clone(),
        category_name,
        spent,
        percentage: spent.percent_of(budget.amount),
        remaining: budget.amount - spent,
    }
}

/// Progress rows for every budget of a month whose category still exists
pub fn progress_for_month(storage: &Storage, month: MonthYear) -> Vec<BudgetProgress> {
    storage
        .budgets
        .for_month(month)
        .filter(|b| storage.categories.get(b.category_id).is_some())
        .map(|b| budget_progress(storage, b))
        .collect()
}
