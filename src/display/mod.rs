//! Display formatting for terminal output
//!
//! Every formatter returns a `String` and takes the display currency
//! explicitly, so output never depends on global state.

pub mod budget;
pub mod category;
pub mod report;
pub mod settings;
pub mod transaction;

pub use budget::{format_budget_progress, format_progress_line, progress_bar};
pub use category::{format_category_details, format_category_list, format_icon_list};
pub use report::{format_dashboard, format_spending_report};
pub use settings::{format_audit_entries, format_settings};
pub use transaction::{format_transaction_details, format_transaction_register};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters, ending in an ellipsis when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
