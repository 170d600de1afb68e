//! Budget display formatting
//!
//! Progress bars and the monthly budget table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Currency;
use crate::models::MonthYear;
use crate::reports::{BudgetProgress, BudgetStatus};

/// Width of the text progress bar in cells
const BAR_WIDTH: usize = 20;

/// Draw a progress bar; percentages over 100 fill the bar
pub fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn status_marker(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::OnTrack => "✓",
        BudgetStatus::NearLimit => "!",
        BudgetStatus::Overspent => "✗",
    }
}

#[derive(Tabled)]
struct ProgressRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    bar: String,
    #[tabled(rename = "%")]
    percentage: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format progress rows for a month as a table
pub fn format_budget_progress(
    month: MonthYear,
    rows: &[BudgetProgress],
    currency: Currency,
) -> String {
    if rows.is_empty() {
        return format!(
            "No budgets set for {}.\n\nRun 'spendtrack budget set <CATEGORY> <AMOUNT>' to add one.\n",
            month.display_name()
        );
    }

    let table_rows = rows.iter().map(|row| {
        let status = row.status();
        ProgressRow {
            category: row.category_name.clone(),
            spent: currency.format(row.spent),
            budget: currency.format(row.budget.amount),
            remaining: currency.format(row.remaining),
            bar: progress_bar(row.percentage),
            percentage: format!("{:.1}%", row.percentage),
            status: format!("{} {}", status_marker(status), status.label()),
        }
    });

    format!(
        "Budgets for {}\n{}\n",
        month.display_name(),
        Table::new(table_rows).with(Style::rounded())
    )
}

/// One-line summary of a single budget's progress
pub fn format_progress_line(row: &BudgetProgress, currency: Currency) -> String {
    let remaining = if row.remaining.is_negative() {
        format!("{} over", currency.format(row.remaining.abs()))
    } else {
        format!("{} left", currency.format(row.remaining))
    };

    format!(
        "{} {}: {} of {} ({:.1}%), {}",
        status_marker(row.status()),
        row.category_name,
        currency.format(row.spent),
        currency.format(row.budget.amount),
        row.percentage,
        remaining
    )
}
