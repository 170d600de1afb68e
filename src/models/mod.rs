//! Core data models for SpendTrack
//!
//! This module contains the data structures of the expense-tracking domain:
//! categories, transactions, monthly budgets, money and month keys.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetValidationError};
pub use category::{Category, CategoryIcon, CategoryValidationError};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, MonthYear};
pub use transaction::{Transaction, TransactionDraft, TransactionValidationError};
