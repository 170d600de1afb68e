//! Spending breakdown
//!
//! Totals every transaction by category, across all months, largest first.

use std::collections::HashMap;

use crate::models::{CategoryId, Money};
use crate::storage::Storage;

/// Spending total for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category_id: CategoryId,
    /// Category name, or "Uncategorized" when the category no longer exists
    pub category_name: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of all spending
    pub percentage: f64,
}

/// All-time spending grouped by category
#[derive(Debug, Clone, Default)]
pub struct SpendingReport {
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_transactions: usize,
}

impl SpendingReport {
    /// Build the breakdown, sorted by total descending
    pub fn generate(storage: &Storage) -> Self {
        let mut by_category: HashMap<CategoryId, (Money, usize)> = HashMap::new();
        for txn in storage.transactions.all() {
            let entry = by_category
                .entry(txn.category_id)
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let total_spending: Money = by_category.values().map(|(total, _)| *total).sum();

        let mut categories: Vec<SpendingByCategory> = by_category
            .into_iter()
            .map(|(category_id, (total, transaction_count))| SpendingByCategory {
                category_id,
                category_name: storage
                    .categories
                    .name_of(category_id)
                    .unwrap_or(super::UNCATEGORIZED)
                    .to_string(),
                total,
                transaction_count,
                percentage: total.percent_of(total_spending),
            })
            .collect();

        // Ties break on name so output is stable across runs
        categories.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });

        Self {
            categories,
            total_spending,
            total_transactions: storage.transactions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
