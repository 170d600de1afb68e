//! In-memory budget repository
//!
//! Budgets are unique per `(category, month)`; setting a budget for a pair
//! that already has one updates that record in place.

use crate::models::{Budget, BudgetId, CategoryId, Money, MonthYear};

/// Outcome of setting a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetUpsert {
    /// No budget existed for the pair; a new one was created
    Created(Budget),
    /// The existing budget's amount was overwritten
    Updated { before: Budget, after: Budget },
}

impl BudgetUpsert {
    /// The budget as it stands after the operation
    pub fn budget(&self) -> &Budget {
        match self {
            Self::Created(budget) => budget,
            Self::Updated { after, .. } => after,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Repository for the session's budgets
#[derive(Debug, Clone, Default)]
pub struct BudgetRepository {
    items: Vec<Budget>,
}

impl BudgetRepository {
    pub fn new(items: Vec<Budget>) -> Self {
        Self { items }
    }

    pub fn all(&self) -> &[Budget] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: BudgetId) -> Option<&Budget> {
        self.items.iter().find(|b| b.id == id)
    }

    /// The budget for a `(category, month)` pair, if one is set
    pub fn get_for(&self, category_id: CategoryId, month: MonthYear) -> Option<&Budget> {
        self.items.iter().find(|b| b.is_for(category_id, month))
    }

    /// Budgets set for a month, in insertion order
    pub fn for_month(&self, month: MonthYear) -> impl Iterator<Item = &Budget> {
        self.items.iter().filter(move |b| b.month_year == month)
    }

    /// Upsert by `(category, month)`
    pub fn set(&mut self, category_id: CategoryId, month: MonthYear, amount: Money) -> BudgetUpsert {
        if let Some(existing) = self.items.iter_mut().find(|b| b.is_for(category_id, month)) {
            let before = existing.clone();
            existing.amount = amount;
            return BudgetUpsert::Updated {
                before,
                after: existing.clone(),
            };
        }

        let budget = Budget::new(category_id, month, amount);
        self.items.push(budget.clone());
        BudgetUpsert::Created(budget)
    }

    /// Find the first `(category, month)` pair that appears more than once
    pub fn find_duplicate_key(&self) -> Option<&Budget> {
        self.items.iter().enumerate().find_map(|(i, budget)| {
            self.items[..i]
                .iter()
                .any(|earlier| earlier.is_for(budget.category_id, budget.month_year))
                .then_some(budget)
        })
    }
}
