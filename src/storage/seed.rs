//! Sample ledger data
//!
//! A fresh session starts from this data set unless it is started empty or
//! from a snapshot file. Transaction dates are relative to `today` so the
//! current-month dashboard always has something to show.

use chrono::{Duration, NaiveDate};

use crate::models::{Budget, Category, CategoryIcon, Money, MonthYear, Transaction, TransactionDraft};

use super::LedgerData;

/// Default categories and their icons
const DEFAULT_CATEGORIES: &[(&str, CategoryIcon)] = &[
    ("Groceries", CategoryIcon::ShoppingCart),
    ("Utilities", CategoryIcon::Receipt),
    ("Rent/Mortgage", CategoryIcon::Home),
    ("Transportation", CategoryIcon::Car),
    ("Entertainment", CategoryIcon::Film),
    ("Dining Out", CategoryIcon::Utensils),
    ("Healthcare", CategoryIcon::HeartPulse),
    ("Shopping", CategoryIcon::Shirt),
    ("Travel", CategoryIcon::Plane),
    ("Other", CategoryIcon::HelpCircle),
];

/// (days ago, vendor, cents, category name, description)
const SAMPLE_TRANSACTIONS: &[(i64, &str, i64, &str, Option<&str>)] = &[
    (1, "SuperMart", 7550, "Groceries", Some("Weekly groceries")),
    (2, "Edison Electric", 12000, "Utilities", Some("Electricity bill")),
    (3, "City Gas", 4520, "Utilities", None),
    (5, "Metro Transit", 5000, "Transportation", Some("Monthly pass")),
    (7, "CinemaPlex", 3200, "Entertainment", None),
    (10, "The Italian Place", 6580, "Dining Out", Some("Dinner with friends")),
    (0, "Unknown Vendor", 2500, "Other", Some("Uncategorized item")),
];

/// (category name, cents) for the current month
const SAMPLE_BUDGETS: &[(&str, i64)] = &[
    ("Groceries", 40000),
    ("Utilities", 20000),
    ("Dining Out", 25000),
    ("Entertainment", 15000),
];

/// Build the sample data set
pub fn sample_data(today: NaiveDate) -> LedgerData {
    let categories: Vec<Category> = DEFAULT_CATEGORIES
        .iter()
        .map(|&(name, icon)| Category::new(name, icon))
        .collect();

    let id_of = |name: &str| categories.iter().find(|c| c.name == name).map(|c| c.id);

    let transactions = SAMPLE_TRANSACTIONS
        .iter()
        .filter_map(|&(days_ago, vendor, cents, category, description)| {
            let category_id = id_of(category)?;
            let mut draft = TransactionDraft::new(
                today - Duration::days(days_ago),
                vendor,
                Money::from_cents(cents),
                category_id,
            );
            if let Some(description) = description {
                draft = draft.with_description(description);
            }
            Some(Transaction::from_draft(draft))
        })
        .collect();

    let month = MonthYear::of(today);
    let budgets = SAMPLE_BUDGETS
        .iter()
        .filter_map(|&(category, cents)| {
            id_of(category).map(|id| Budget::new(id, month, Money::from_cents(cents)))
        })
        .collect();

    LedgerData {
        categories,
        transactions,
        budgets,
    }
}
