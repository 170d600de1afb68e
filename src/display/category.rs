//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryIcon};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "")]
    glyph: &'static str,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Icon")]
    icon: &'static str,
    #[tabled(rename = "Transactions")]
    transactions: usize,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format categories with how many transactions use each
///
/// `usage` is called once per category.
pub fn format_category_list(categories: &[Category], usage: impl Fn(&Category) -> usize) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'spendtrack category add <NAME>' to create one."
            .to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        glyph: c.icon_name.glyph(),
        name: c.name.clone(),
        icon: c.icon_name.name(),
        transactions: usage(c),
        id: c.id.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a single category
pub fn format_category_details(category: &Category, transaction_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Category: {} {}\n",
        category.icon_name.glyph(),
        category.name
    ));
    output.push_str(&format!("  ID:           {}\n", category.id));
    output.push_str(&format!("  Icon:         {}\n", category.icon_name.name()));
    output.push_str(&format!("  Transactions: {}\n", transaction_count));

    output
}

/// List the available icons
pub fn format_icon_list() -> String {
    CategoryIcon::all()
        .iter()
        .map(|icon| {
            let default = if *icon == CategoryIcon::default() {
                " (default)"
            } else {
                ""
            };
            format!("  {}  {}{}\n", icon.glyph(), icon.name(), default)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        let output = format_category_list(&[], |_| 0);
        assert!(output.contains("No categories found"));
    }

    #[test]
    fn test_list_includes_usage() {
        let categories = vec![Category::new("Groceries", CategoryIcon::ShoppingCart)];
        let output = format_category_list(&categories, |_| 3);

        assert!(output.contains("Groceries"));
        assert!(output.contains("ShoppingCart"));
        assert!(output.contains('3'));
    }

    #[test]
    fn test_icon_list_marks_default() {
        let output = format_icon_list();
        assert!(output.contains("HelpCircle (default)"));
        assert_eq!(output.lines().count(), CategoryIcon::all().len());
    }
}
