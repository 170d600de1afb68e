//! Budget model
//!
//! A budget is a spending ceiling for one category in one calendar month.
//! At most one budget exists per `(category, month)` pair.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::month::MonthYear;

/// A monthly spending goal for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this budget limits
    pub category_id: CategoryId,

    /// The spending ceiling
    pub amount: Money,

    /// The month this budget applies to
    pub month_year: MonthYear,
}

impl Budget {
    /// Create a budget with a fresh ID
    pub fn new(category_id: CategoryId, month_year: MonthYear, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category_id,
            amount,
            month_year,
        }
    }

    /// Whether this budget is keyed by the given pair
    pub fn is_for(&self, category_id: CategoryId, month_year: MonthYear) -> bool {
        self.category_id == category_id && self.month_year == month_year
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }
        if self.amount.exceeds_max() {
            return Err(BudgetValidationError::AmountTooLarge);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budget: {}", self.month_year, self.amount)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
    AmountTooLarge,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be positive"),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed {}", Money::MAX_AMOUNT),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
