//! Transaction service
//!
//! Validates expense form input, keeps the category reference pointing at a
//! real category, and records every change in the audit log.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, MonthYear, Transaction, TransactionDraft, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
    today: NaiveDate,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub category_id: Option<CategoryId>,
    pub month: Option<MonthYear>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn month(mut self, month: MonthYear) -> Self {
        self.month = Some(month);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.category_id.map_or(true, |id| txn.category_id == id)
            && self.month.map_or(true, |m| m.contains(txn.date))
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service; `today` bounds valid dates
    pub fn new(storage: &'a mut Storage, today: NaiveDate) -> Self {
        Self { storage, today }
    }

    /// Record a new expense
    pub fn add(&mut self, draft: TransactionDraft) -> TrackerResult<Transaction> {
        let draft = self.check(draft)?;
        let txn = self.storage.transactions.insert(draft);

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.vendor.clone()),
            &txn,
        );

        Ok(txn)
    }

    /// Replace the fields of an existing transaction, keeping its ID
    ///
    /// An unknown ID is ignored and yields `Ok(None)`.
    pub fn update(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> TrackerResult<Option<Transaction>> {
        let draft = self.check(draft)?;
        let Some(before) = self.storage.transactions.update(id, draft) else {
            return Ok(None);
        };

        let after = self
            .storage
            .transactions
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        self.storage.log_update(
            EntityType::Transaction,
            after.id.to_string(),
            Some(after.vendor.clone()),
            &before,
            &after,
            None,
        );

        Ok(Some(after))
    }

    /// Remove a transaction, returning it when it existed
    pub fn delete(&mut self, id: TransactionId) -> TrackerResult<Option<Transaction>> {
        let Some(removed) = self.storage.transactions.remove(id) else {
            return Ok(None);
        };

        self.storage.log_delete(
            EntityType::Transaction,
            removed.id.to_string(),
            Some(removed.vendor.clone()),
            &removed,
        );

        Ok(Some(removed))
    }

    /// Look up a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> TrackerResult<&Transaction> {
        find_transaction(self.storage, identifier)
    }

    /// Transactions matching a filter, newest date first
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        list_transactions(self.storage, filter)
    }

    fn check(&self, draft: TransactionDraft) -> TrackerResult<TransactionDraft> {
        let draft = draft.normalized();
        draft
            .validate(self.today)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        if self.storage.categories.get(draft.category_id).is_none() {
            return Err(TrackerError::category_not_found(draft.category_id.to_string()));
        }

        Ok(draft)
    }
}

/// Look up a transaction by full or short ID without a service
pub fn find_transaction<'s>(storage: &'s Storage, identifier: &str) -> TrackerResult<&'s Transaction> {
    storage
        .transactions
        .find(identifier)
        .ok_or_else(|| TrackerError::transaction_not_found(identifier))
}

/// Transactions matching a filter, newest date first
pub fn list_transactions<'s>(storage: &'s Storage, filter: &TransactionFilter) -> Vec<&'s Transaction> {
    let mut txns: Vec<&Transaction> = storage
        .transactions
        .all()
        .iter()
        .filter(|t| filter.matches(t))
        .collect();

    // Stable sort keeps insertion order for same-day entries
    txns.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(limit) = filter.limit {
        txns.truncate(limit);
    }

    txns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::models::{Category, CategoryIcon, Money};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (Storage, CategoryId) {
        let mut storage = Storage::new();
        let groceries = Category::new("Groceries", CategoryIcon::ShoppingCart);
        let id = groceries.id;
        storage.categories.push(groceries);
        (storage, id)
    }

    #[test]
    fn test_add_transaction() {
        let (mut storage, groceries) = setup();
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        let txn = service
            .add(
                TransactionDraft::new(date(2024, 6, 1), "  SuperMart ", Money::from_cents(7550), groceries)
                    .with_description("   "),
            )
            .unwrap();

        assert_eq!(txn.vendor, "SuperMart");
        assert!(txn.description.is_none());
        assert_eq!(storage.transactions.len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (mut storage, groceries) = setup();
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        let zero = TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::zero(), groceries);
        assert!(service.add(zero).unwrap_err().is_validation());

        let future = TransactionDraft::new(date(2024, 6, 16), "SuperMart", Money::from_cents(1), groceries);
        assert!(service.add(future).unwrap_err().is_validation());

        let blank = TransactionDraft::new(date(2024, 6, 1), " ", Money::from_cents(1), groceries);
        assert!(service.add(blank).unwrap_err().is_validation());

        assert!(storage.transactions.is_empty());
    }

    #[test]
    fn test_add_requires_existing_category() {
        let (mut storage, _) = setup();
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        let draft = TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::from_cents(100), CategoryId::new());
        assert!(service.add(draft).unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_keeps_id() {
        let (mut storage, groceries) = setup();
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        let txn = service
            .add(TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::from_cents(7550), groceries))
            .unwrap();

        let mut draft = txn.to_draft();
        draft.amount = Money::from_cents(8000);
        let updated = service.update(txn.id, draft).unwrap().unwrap();

        assert_eq!(updated.id, txn.id);
        assert_eq!(updated.amount.cents(), 8000);
        assert_eq!(storage.transactions.len(), 1);
    }

    #[test]
    fn test_update_unknown_is_ignored() {
        let (mut storage, groceries) = setup();
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        let draft = TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::from_cents(100), groceries);
        assert!(service.update(TransactionId::new(), draft).unwrap().is_none());
        assert!(storage.transactions.is_empty());
    }

    #[test]
    fn test_delete() {
        let (mut storage, groceries) = setup();
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        let txn = service
            .add(TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::from_cents(100), groceries))
            .unwrap();

        assert!(service.delete(txn.id).unwrap().is_some());
        assert!(service.delete(txn.id).unwrap().is_none());
    }

    #[test]
    fn test_list_sorted_and_limited() {
        let (mut storage, groceries) = setup();
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        for (day, vendor) in [(3, "B"), (10, "D"), (1, "A"), (5, "C")] {
            service
                .add(TransactionDraft::new(date(2024, 6, day), vendor, Money::from_cents(100), groceries))
                .unwrap();
        }
        service
            .add(TransactionDraft::new(date(2024, 5, 20), "May", Money::from_cents(100), groceries))
            .unwrap();

        let vendors: Vec<&str> = service
            .list(&TransactionFilter::new().limit(3))
            .iter()
            .map(|t| t.vendor.as_str())
            .collect();
        assert_eq!(vendors, vec!["D", "C", "B"]);

        let june = MonthYear::parse("2024-06").unwrap();
        assert_eq!(service.list(&TransactionFilter::new().month(june)).len(), 4);
    }

    #[test]
    fn test_lookups_on_shared_storage() {
        let (mut storage, groceries) = setup();
        let txn = TransactionService::new(&mut storage, date(2024, 6, 15))
            .add(TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::from_cents(7550), groceries))
            .unwrap();

        let storage = &storage;
        let short_id = txn.id.to_string();
        assert_eq!(find_transaction(storage, &short_id).unwrap().vendor, "SuperMart");
        assert!(find_transaction(storage, "nope").unwrap_err().is_not_found());

        let rows = list_transactions(storage, &TransactionFilter::new());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, txn.id);
        assert_eq!(storage.transactions.len(), 1);
    }

    #[test]
    fn test_changes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, groceries) = setup();
        let mut storage = storage.with_audit(AuditLogger::new(temp_dir.path().join("audit.log")));
        let mut service = TransactionService::new(&mut storage, date(2024, 6, 15));

        let txn = service
            .add(TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::from_cents(7550), groceries))
            .unwrap();
        let mut draft = txn.to_draft();
        draft.amount = Money::from_cents(8000);
        service.update(txn.id, draft).unwrap();
        service.delete(txn.id).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("amount"));
    }
}
