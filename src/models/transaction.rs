//! Transaction model
//!
//! A transaction is a single recorded expense: vendor, positive amount,
//! date and the category it is filed under.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;
use super::month::MonthYear;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Date of the expense
    pub date: NaiveDate,

    /// Who was paid
    pub vendor: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category the expense is filed under (soft reference)
    pub category_id: CategoryId,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Create a transaction from validated input, assigning a fresh ID
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: TransactionId::new(),
            date: draft.date,
            vendor: draft.vendor,
            amount: draft.amount,
            category_id: draft.category_id,
            description: draft.description,
        }
    }

    /// Overwrite every field except the ID
    pub fn apply(&mut self, draft: TransactionDraft) {
        self.date = draft.date;
        self.vendor = draft.vendor;
        self.amount = draft.amount;
        self.category_id = draft.category_id;
        self.description = draft.description;
    }

    /// The editable fields of this transaction
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            date: self.date,
            vendor: self.vendor.clone(),
            amount: self.amount,
            category_id: self.category_id,
            description: self.description.clone(),
        }
    }

    /// The calendar month this transaction counts toward
    pub fn month(&self) -> MonthYear {
        MonthYear::of(self.date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.vendor,
            self.amount
        )
    }
}

/// Transaction fields as entered on the expense form (no ID yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub vendor: String,
    pub amount: Money,
    pub category_id: CategoryId,
    pub description: Option<String>,
}

impl TransactionDraft {
    pub fn new(
        date: NaiveDate,
        vendor: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
    ) -> Self {
        Self {
            date,
            vendor: vendor.into(),
            amount,
            category_id,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Trim text fields and drop an empty description
    pub fn normalized(mut self) -> Self {
        self.vendor = self.vendor.trim().to_string();
        self.description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        self
    }

    /// Validate form input against `today`
    pub fn validate(&self, today: NaiveDate) -> Result<(), TransactionValidationError> {
        if self.vendor.trim().is_empty() {
            return Err(TransactionValidationError::EmptyVendor);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }

        if self.amount.exceeds_max() {
            return Err(TransactionValidationError::AmountTooLarge);
        }

        if self.date > today {
            return Err(TransactionValidationError::FutureDate(self.date));
        }

        if self.date < earliest_date() {
            return Err(TransactionValidationError::DateTooEarly(self.date));
        }

        Ok(())
    }
}

fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyVendor,
    NonPositiveAmount,
    AmountTooLarge,
    FutureDate(NaiveDate),
    DateTooEarly(NaiveDate),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVendor => write!(f, "Vendor is required."),
            Self::NonPositiveAmount => write!(f, "Amount must be positive."),
            Self::AmountTooLarge => write!(f, "Amount cannot exceed {}.", Money::MAX_AMOUNT),
            Self::FutureDate(d) => write!(f, "Date {} is in the future.", d),
            Self::DateTooEarly(d) => write!(f, "Date {} is before 1900-01-01.", d),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
