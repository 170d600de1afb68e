//! Report formatting for terminal output
//!
//! Renders the dashboard and the category spending breakdown.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Currency;
use crate::reports::{DashboardSummary, SpendingReport};
use crate::storage::CategoryRepository;

use super::budget::format_progress_line;
use super::transaction::format_transaction_register;
use super::{format_percentage, separator};

/// Width of the breakdown bar chart
const CHART_WIDTH: usize = 24;

/// Create a simple bar chart cell scaled against `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the dashboard
pub fn format_dashboard(
    summary: &DashboardSummary,
    categories: &CategoryRepository,
    currency: Currency,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Dashboard: {}\n", summary.month.display_name()));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "  Total spent:      {}\n",
        currency.format(summary.total_spent)
    ));
    output.push_str(&format!(
        "  Total budget:     {}\n",
        currency.format(summary.total_budget)
    ));

    let remaining_label = if summary.remaining.is_negative() {
        "Over budget:"
    } else {
        "Remaining:"
    };
    output.push_str(&format!(
        "  {:<17} {}\n",
        remaining_label,
        currency.format(summary.remaining.abs())
    ));
    output.push_str(&format!(
        "  Daily average:    {}\n",
        currency.format(summary.average_daily)
    ));
    output.push_str(&format!(
        "  Transactions:     {}\n",
        summary.transaction_count
    ));

    output.push_str("\nBudgets\n");
    if summary.budgets.is_empty() {
        output.push_str("  No budgets set for this month.\n");
    } else {
        for row in &summary.budgets {
            output.push_str(&format!("  {}\n", format_progress_line(row, currency)));
        }
    }

    output.push_str("\nRecent transactions\n");
    let recent: Vec<_> = summary.recent.iter().collect();
    output.push_str(&format_transaction_register(&recent, categories, currency));
    output.push('\n');

    output
}

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the all-time spending breakdown
pub fn format_spending_report(report: &SpendingReport, currency: Currency) -> String {
    if report.is_empty() {
        return "No spending recorded yet.\n".to_string();
    }

    let max = report
        .categories
        .first()
        .map(|c| c.total.as_decimal())
        .unwrap_or_default();

    let rows = report.categories.iter().map(|c| SpendingRow {
        category: c.category_name.clone(),
        total: currency.format(c.total),
        count: c.transaction_count,
        share: format_percentage(c.percentage),
        bar: format_bar(c.total.as_decimal(), max, CHART_WIDTH),
    });

    format!(
        "Spending by category (all time)\n{}\nTotal: {} across {} transaction(s)\n",
        Table::new(rows).with(Style::rounded()),
        currency.format(report.total_spending),
        report.total_transactions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryIcon, Money, TransactionDraft};
    use crate::storage::Storage;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(0.0, 10.0, 4), "    ");
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(10.0, 10.0, 4), "████");
    }

    #[test]
    fn test_dashboard_over_budget() {
        let mut storage = Storage::new();
        let fun = Category::new("Fun", CategoryIcon::Film);
        let id = fun.id;
        storage.categories.push(fun);
        storage
            .budgets
            .set(id, crate::models::MonthYear::of(date(1)), Money::from_cents(20000));
        storage.transactions.insert(TransactionDraft::new(
            date(2),
            "CinemaPlex",
            Money::from_cents(25000),
            id,
        ));

        let summary = DashboardSummary::generate(&storage, date(10));
        let output = format_dashboard(&summary, &storage.categories, Currency::Usd);

        assert!(output.contains("June 2024"));
        assert!(output.contains("Over budget:"));
        assert!(output.contains("$50.00"));
        assert!(output.contains("Daily average:    $25.00"));
        assert!(output.contains("CinemaPlex"));
    }

    #[test]
    fn test_spending_report_output() {
        let mut storage = Storage::new();
        let groceries = Category::new("Groceries", CategoryIcon::ShoppingCart);
        let id = groceries.id;
        storage.categories.push(groceries);
        storage.transactions.insert(TransactionDraft::new(
            date(1),
            "SuperMart",
            Money::from_cents(7550),
            id,
        ));

        let report = SpendingReport::generate(&storage);
        let output = format_spending_report(&report, Currency::Gbp);

        assert!(output.contains("Groceries"));
        assert!(output.contains("£75.50"));
        assert!(output.contains("100%"));
    }

    #[test]
    fn test_empty_spending_report() {
        let report = SpendingReport::generate(&Storage::new());
        assert!(format_spending_report(&report, Currency::Usd).contains("No spending"));
    }
}
