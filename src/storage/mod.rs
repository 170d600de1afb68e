//! Storage layer for SpendTrack
//!
//! Entities live in memory for the lifetime of a session. A session starts
//! from the sample data set, from nothing, or from a read-only JSON snapshot.
//! Every mutation is recorded in the audit log when one is attached.

pub mod budget;
pub mod categories;
pub mod file_io;
pub mod seed;
pub mod transactions;

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use budget::{BudgetRepository, BudgetUpsert};
pub use categories::CategoryRepository;
pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Category, CategoryId, Transaction};

/// Serializable form of a whole ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

/// Main storage coordinator that provides access to all repositories
#[derive(Debug, Default)]
pub struct Storage {
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// An empty ledger with no audit log
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from previously captured data
    ///
    /// Rejects data holding two budgets for the same category and month.
    pub fn from_data(data: LedgerData) -> TrackerResult<Self> {
        let budgets = BudgetRepository::new(data.budgets);
        if let Some(dup) = budgets.find_duplicate_key() {
            return Err(TrackerError::Storage(format!(
                "Duplicate budget for category {} in {}",
                dup.category_id, dup.month_year
            )));
        }

        Ok(Self {
            categories: CategoryRepository::new(data.categories),
            transactions: TransactionRepository::new(data.transactions),
            budgets,
            audit: None,
        })
    }

    /// The sample data set, dated relative to `today`
    pub fn sample(today: NaiveDate) -> Self {
        let data = seed::sample_data(today);
        Self {
            categories: CategoryRepository::new(data.categories),
            transactions: TransactionRepository::new(data.transactions),
            budgets: BudgetRepository::new(data.budgets),
            audit: None,
        }
    }

    /// Load a snapshot file; the file is never written back
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let data: LedgerData = read_json_required(path)?;
        Self::from_data(data)
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Attach or detach the audit logger mid-session
    pub fn set_audit(&mut self, logger: Option<AuditLogger>) {
        self.audit = logger;
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Remove a category, refusing while any transaction references it
    ///
    /// This is the only way to delete a category, so the check cannot be
    /// skipped. Returns `Ok(None)` for an unknown id.
    pub fn remove_category(&mut self, id: CategoryId) -> TrackerResult<Option<Category>> {
        let Some(category) = self.categories.get(id) else {
            return Ok(None);
        };

        let transaction_count = self.transactions.count_for_category(id);
        if transaction_count > 0 {
            return Err(TrackerError::CategoryInUse {
                name: category.name.clone(),
                transaction_count,
            });
        }

        Ok(self.categories.remove(id))
    }

    /// Record a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(|| AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    /// Record an update operation
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.write_audit(|| {
            AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff_summary)
        });
    }

    /// Record a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    /// Append to the audit log if one is attached
    ///
    /// Runs after the change is applied, so a write failure only warns.
    fn write_audit(&self, entry: impl FnOnce() -> AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log(&entry()) {
            eprintln!(
                "Warning: change applied but not recorded in {}: {}",
                logger.path().display(),
                e
            );
        }
    }
}
