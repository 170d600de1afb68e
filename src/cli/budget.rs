//! Budget CLI commands
//!
//! Setting monthly goals and checking progress against them.

use clap::Subcommand;

use super::{parse_amount, Session};
use crate::display::{format_budget_progress, format_progress_line};
use crate::error::TrackerResult;
use crate::reports::{budget_progress, progress_for_month};
use crate::services::BudgetService;
use crate::storage::BudgetUpsert;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the budget for a category and month (creates or updates)
    Set {
        /// Category name or ID
        category: String,
        /// Budget amount
        amount: String,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Show the budget for a category
    Show {
        /// Category name or ID
        category: String,
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// List budgets for a month
    List {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Show spending progress against each budget
    Progress {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(session: &mut Session, cmd: BudgetCommands) -> TrackerResult<()> {
    let currency = session.settings.currency;

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let month = session.month_or_current(month.as_deref())?;
            let category = session.category(&category)?;
            let amount = parse_amount(&amount)?;

            let outcome =
                BudgetService::new(&mut session.storage).set_budget(category.id, month, amount)?;

            match &outcome {
                BudgetUpsert::Created(budget) => {
                    println!("Budget Set");
                    println!(
                        "  {} for {}: {}",
                        category.name,
                        month.display_name(),
                        currency.format(budget.amount)
                    );
                }
                BudgetUpsert::Updated { before, after } => {
                    println!("Budget Updated");
                    println!(
                        "  {} for {}: {} -> {}",
                        category.name,
                        month.display_name(),
                        currency.format(before.amount),
                        currency.format(after.amount)
                    );
                }
            }
        }

        BudgetCommands::Show { category, month } => {
            let month = session.month_or_current(month.as_deref())?;
            let category = session.category(&category)?;

            match session.storage.budgets.get_for(category.id, month) {
                Some(budget) => {
                    let row = budget_progress(&session.storage, budget);
                    println!("{}", format_progress_line(&row, currency));
                    println!("  ID: {}", budget.id);
                }
                None => println!(
                    "No budget set for {} in {}.",
                    category.name,
                    month.display_name()
                ),
            }
        }

        BudgetCommands::List { month } => {
            let month = session.month_or_current(month.as_deref())?;
            let service = BudgetService::new(&mut session.storage);
            let budgets: Vec<_> = service
                .budgets_for_month(month)
                .into_iter()
                .cloned()
                .collect();

            if budgets.is_empty() {
                println!("No budgets set for {}.", month.display_name());
            } else {
                println!("Budgets for {}", month.display_name());
                for budget in &budgets {
                    let name = session
                        .storage
                        .categories
                        .name_of(budget.category_id)
                        .unwrap_or(crate::reports::UNCATEGORIZED);
                    println!(
                        "  {:<20} {:>12}  {}",
                        name,
                        currency.format(budget.amount),
                        budget.id
                    );
                }
            }
        }

        BudgetCommands::Progress { month } => {
            let month = session.month_or_current(month.as_deref())?;
            let rows = progress_for_month(&session.storage, month);
            print!("{}", format_budget_progress(month, &rows, currency));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TrackerPaths};
    use crate::models::MonthYear;
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn session(temp_dir: &TempDir) -> Session {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        Session::new(
            Storage::sample(today),
            Settings::default(),
            TrackerPaths::with_base_dir(temp_dir.path().to_path_buf()),
            today,
        )
    }

    #[test]
    fn test_set_defaults_to_current_month() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        handle_budget_command(
            &mut session,
            BudgetCommands::Set {
                category: "Travel".into(),
                amount: "500".into(),
                month: None,
            },
        )
        .unwrap();

        let travel = session.category("Travel").unwrap();
        let june = MonthYear::parse("2024-06").unwrap();
        let budget = session.storage.budgets.get_for(travel.id, june).unwrap();
        assert_eq!(budget.amount.cents(), 50000);
    }

    #[test]
    fn test_set_existing_updates_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);
        let before = session.storage.budgets.len();

        handle_budget_command(
            &mut session,
            BudgetCommands::Set {
                category: "Groceries".into(),
                amount: "450".into(),
                month: Some("2024-06".into()),
            },
        )
        .unwrap();

        assert_eq!(session.storage.budgets.len(), before);
    }

    #[test]
    fn test_set_rejects_bad_month() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session(&temp_dir);

        let err = handle_budget_command(
            &mut session,
            BudgetCommands::Set {
                category: "Groceries".into(),
                amount: "450".into(),
                month: Some("June".into()),
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
