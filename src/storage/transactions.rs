//! In-memory transaction repository
//!
//! New transactions are prepended so the collection reads most-recent-first.

use crate::models::{CategoryId, Money, MonthYear, Transaction, TransactionDraft, TransactionId};

/// Repository for the session's transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionRepository {
    items: Vec<Transaction>,
}

impl TransactionRepository {
    pub fn new(items: Vec<Transaction>) -> Self {
        Self { items }
    }

    /// All transactions in collection order (newest entries first)
    pub fn all(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Find a transaction by full or short ID string
    pub fn find(&self, identifier: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id.matches(identifier))
    }

    /// Create a transaction from a draft and put it at the front
    pub fn insert(&mut self, draft: TransactionDraft) -> Transaction {
        let txn = Transaction::from_draft(draft);
        self.items.insert(0, txn.clone());
        txn
    }

    /// Overwrite the fields of an existing transaction
    ///
    /// Returns the previous version, or `None` (and does nothing) when the ID
    /// is unknown.
    pub fn update(&mut self, id: TransactionId, draft: TransactionDraft) -> Option<Transaction> {
        let txn = self.items.iter_mut().find(|t| t.id == id)?;
        let before = txn.clone();
        txn.apply(draft);
        Some(before)
    }

    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(index))
    }

    /// Number of transactions filed under a category
    pub fn count_for_category(&self, category_id: CategoryId) -> usize {
        self.items
            .iter()
            .filter(|t| t.category_id == category_id)
            .count()
    }

    /// Transactions dated within a month
    pub fn in_month(&self, month: MonthYear) -> impl Iterator<Item = &Transaction> {
        self.items.iter().filter(move |t| month.contains(t.date))
    }

    /// Sum of one category's transactions within a month
    pub fn total_for(&self, category_id: CategoryId, month: MonthYear) -> Money {
        self.in_month(month)
            .filter(|t| t.category_id == category_id)
            .map(|t| t.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_insert_prepends() {
        let cat = CategoryId::new();
        let mut repo = TransactionRepository::default();
        let first = repo.insert(TransactionDraft::new(date(2024, 6, 1), "A", Money::from_cents(100), cat));
        let second = repo.insert(TransactionDraft::new(date(2024, 5, 1), "B", Money::from_cents(200), cat));

        assert_eq!(repo.all()[0].id, second.id);
        assert_eq!(repo.all()[1].id, first.id);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let cat = CategoryId::new();
        let mut repo = TransactionRepository::default();
        repo.insert(TransactionDraft::new(date(2024, 6, 1), "A", Money::from_cents(100), cat));

        let draft = TransactionDraft::new(date(2024, 6, 2), "Z", Money::from_cents(999), cat);
        assert!(repo.update(TransactionId::new(), draft).is_none());
        assert_eq!(repo.all()[0].vendor, "A");
    }

    #[test]
    fn test_total_for_category_and_month() {
        let groceries = CategoryId::new();
        let dining = CategoryId::new();
        let mut repo = TransactionRepository::default();
        repo.insert(TransactionDraft::new(date(2024, 6, 1), "SuperMart", Money::from_cents(7550), groceries));
        repo.insert(TransactionDraft::new(date(2024, 6, 20), "SuperMart", Money::from_cents(2000), groceries));
        repo.insert(TransactionDraft::new(date(2024, 7, 1), "SuperMart", Money::from_cents(5000), groceries));
        repo.insert(TransactionDraft::new(date(2024, 6, 3), "Italian Place", Money::from_cents(6580), dining));

        let june = MonthYear::parse("2024-06").unwrap();
        assert_eq!(repo.total_for(groceries, june).cents(), 9550);
        assert_eq!(repo.total_for(dining, june).cents(), 6580);
        assert_eq!(repo.total_for(CategoryId::new(), june), Money::zero());
        assert_eq!(repo.count_for_category(groceries), 3);
        assert_eq!(repo.in_month(june).count(), 3);
    }
}
