//! Budget service
//!
//! Sets monthly budget goals. A budget is unique per category and month, so
//! setting one again overwrites the amount instead of adding a second row.

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, CategoryId, Money, MonthYear};
use crate::storage::{BudgetUpsert, Storage};

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a mut Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create or update the budget for a category and month
    pub fn set_budget(
        &mut self,
        category_id: CategoryId,
        month: MonthYear,
        amount: Money,
    ) -> TrackerResult<BudgetUpsert> {
        Budget::new(category_id, month, amount)
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let category_name = self
            .storage
            .categories
            .name_of(category_id)
            .map(str::to_string)
            .ok_or_else(|| TrackerError::category_not_found(category_id.to_string()))?;

        let outcome = self.storage.budgets.set(category_id, month, amount);
        let entity_name = Some(format!("{} {}", category_name, month));

        match &outcome {
            BudgetUpsert::Created(budget) => {
                self.storage.log_create(
                    EntityType::Budget,
                    budget.id.to_string(),
                    entity_name,
                    budget,
                );
            }
            BudgetUpsert::Updated { before, after } => {
                self.storage.log_update(
                    EntityType::Budget,
                    after.id.to_string(),
                    entity_name,
                    before,
                    after,
                    Some(format!("amount: {} -> {}", before.amount, after.amount)),
                );
            }
        }

        Ok(outcome)
    }

    /// The budget already set for a category and month, if any
    pub fn existing_budget(&self, category_id: CategoryId, month: MonthYear) -> Option<&Budget> {
        self.storage.budgets.get_for(category_id, month)
    }

    /// All budgets set for a month
    pub fn budgets_for_month(&self, month: MonthYear) -> Vec<&Budget> {
        self.storage.budgets.for_month(month).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryIcon};

    fn june() -> MonthYear {
        MonthYear::parse("2024-06").unwrap()
    }

    fn setup() -> (Storage, CategoryId) {
        let mut storage = Storage::new();
        let groceries = Category::new("Groceries", CategoryIcon::ShoppingCart);
        let id = groceries.id;
        storage.categories.push(groceries);
        (storage, id)
    }

    #[test]
    fn test_set_budget_twice_keeps_one() {
        let (mut storage, groceries) = setup();
        let mut service = BudgetService::new(&mut storage);

        let first = service
            .set_budget(groceries, june(), Money::from_cents(40000))
            .unwrap();
        assert!(first.was_created());

        let second = service
            .set_budget(groceries, june(), Money::from_cents(40000))
            .unwrap();
        assert!(!second.was_created());
        assert_eq!(first.budget().id, second.budget().id);

        assert_eq!(service.budgets_for_month(june()).len(), 1);
    }

    #[test]
    fn test_set_budget_overwrites_amount() {
        let (mut storage, groceries) = setup();
        let mut service = BudgetService::new(&mut storage);

        service
            .set_budget(groceries, june(), Money::from_cents(40000))
            .unwrap();
        service
            .set_budget(groceries, june(), Money::from_cents(45000))
            .unwrap();

        let budget = service.existing_budget(groceries, june()).unwrap();
        assert_eq!(budget.amount.cents(), 45000);
    }

    #[test]
    fn test_set_budget_rejects_non_positive_amount() {
        let (mut storage, groceries) = setup();
        let mut service = BudgetService::new(&mut storage);

        let err = service
            .set_budget(groceries, june(), Money::zero())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.existing_budget(groceries, june()).is_none());
    }

    #[test]
    fn test_set_budget_requires_category() {
        let (mut storage, _) = setup();
        let mut service = BudgetService::new(&mut storage);

        let err = service
            .set_budget(CategoryId::new(), june(), Money::from_cents(100))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_existing_budget_is_month_scoped() {
        let (mut storage, groceries) = setup();
        let mut service = BudgetService::new(&mut storage);

        service
            .set_budget(groceries, june(), Money::from_cents(40000))
            .unwrap();

        let july = MonthYear::parse("2024-07").unwrap();
        assert!(service.existing_budget(groceries, july).is_none());
        assert!(service.budgets_for_month(july).is_empty());
    }
}
