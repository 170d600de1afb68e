//! Transaction display formatting
//!
//! Register tables and the single-transaction detail view.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Currency;
use crate::models::Transaction;
use crate::storage::CategoryRepository;

use super::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

fn category_label(categories: &CategoryRepository, txn: &Transaction) -> String {
    categories
        .get(txn.category_id)
        .map(|c| format!("{} {}", c.icon_name.glyph(), c.name))
        .unwrap_or_else(|| crate::reports::UNCATEGORIZED.to_string())
}

/// Format transactions as a register table
pub fn format_transaction_register(
    transactions: &[&Transaction],
    categories: &CategoryRepository,
    currency: Currency,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        date: txn.date.format("%Y-%m-%d").to_string(),
        vendor: truncate(&txn.vendor, 24),
        category: category_label(categories, txn),
        amount: currency.format(txn.amount),
        id: txn.id.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format transaction details
pub fn format_transaction_details(
    txn: &Transaction,
    categories: &CategoryRepository,
    currency: Currency,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("  Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("  Vendor:      {}\n", txn.vendor));
    output.push_str(&format!("  Amount:      {}\n", currency.format(txn.amount)));
    output.push_str(&format!("  Category:    {}\n", category_label(categories, txn)));

    if let Some(description) = &txn.description {
        output.push_str(&format!("  Description: {}\n", description));
    }

    output
}
