//! Transaction CLI commands
//!
//! Adding, listing, editing and deleting expenses. `add --suggest` asks the
//! suggestion service for a category when none is given.

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_month, Session};
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, Money, TransactionDraft};
use crate::services::{
    find_transaction, list_transactions, suggest_category, suggester_for, SuggestionOutcome,
    SuggestionRequest, TransactionFilter, TransactionService,
};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new expense
    Add {
        /// Vendor name
        vendor: String,
        /// Amount (e.g., "75.50")
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Ask the suggestion service for a category when none is given
        #[arg(long)]
        suggest: bool,
    },

    /// List transactions, newest first
    List {
        /// Filter by category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show transaction details
    Show {
        /// Transaction ID
        transaction: String,
    },

    /// Edit a transaction
    Edit {
        /// Transaction ID
        transaction: String,
        /// New vendor
        #[arg(long)]
        vendor: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        transaction: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    session: &mut Session,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let currency = session.settings.currency;

    match cmd {
        TransactionCommands::Add {
            vendor,
            amount,
            category,
            date,
            description,
            suggest,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => session.today,
            };

            let category_id = match category {
                Some(identifier) => session.category(&identifier)?.id,
                None if suggest => suggested_category(session, &vendor, amount, description.clone())?,
                None => {
                    return Err(TrackerError::Validation(
                        "Category is required (use --category or --suggest)".into(),
                    ))
                }
            };

            let mut draft = TransactionDraft::new(date, vendor, amount, category_id);
            draft.description = description;

            let today = session.today;
            let txn = TransactionService::new(&mut session.storage, today).add(draft)?;

            println!(
                "Added transaction: {} {} {}",
                txn.date.format("%Y-%m-%d"),
                txn.vendor,
                currency.format(txn.amount)
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            category,
            month,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(identifier) = category {
                filter = filter.category(session.category(&identifier)?.id);
            }
            if let Some(month) = month {
                filter = filter.month(parse_month(&month)?);
            }

            let rows = list_transactions(&session.storage, &filter);
            print!(
                "{}",
                format_transaction_register(&rows, &session.storage.categories, currency)
            );
        }

        TransactionCommands::Show { transaction } => {
            let txn = find_transaction(&session.storage, &transaction)?;
            print!(
                "{}",
                format_transaction_details(txn, &session.storage.categories, currency)
            );
        }

        TransactionCommands::Edit {
            transaction,
            vendor,
            amount,
            category,
            date,
            description,
            clear_description,
        } => {
            let today = session.today;
            let existing = find_transaction(&session.storage, &transaction)?.clone();

            let mut draft = existing.to_draft();
            if let Some(vendor) = vendor {
                draft.vendor = vendor;
            }
            if let Some(amount) = amount {
                draft.amount = parse_amount(&amount)?;
            }
            if let Some(identifier) = category {
                draft.category_id = session.category(&identifier)?.id;
            }
            if let Some(date) = date {
                draft.date = parse_date(&date)?;
            }
            if clear_description {
                draft.description = None;
            } else if let Some(description) = description {
                draft.description = Some(description);
            }

            let mut service = TransactionService::new(&mut session.storage, today);
            match service.update(existing.id, draft)? {
                Some(updated) => {
                    println!("Updated transaction: {}", updated.id);
                    print!(
                        "{}",
                        format_transaction_details(&updated, &session.storage.categories, currency)
                    );
                }
                None => println!("Transaction {} no longer exists.", existing.id),
            }
        }

        TransactionCommands::Delete { transaction } => {
            let today = session.today;
            let id = find_transaction(&session.storage, &transaction)?.id;

            if let Some(removed) = TransactionService::new(&mut session.storage, today).delete(id)? {
                println!(
                    "Deleted transaction: {} {} {}",
                    removed.date.format("%Y-%m-%d"),
                    removed.vendor,
                    currency.format(removed.amount)
                );
            }
        }
    }

    Ok(())
}

/// Resolve a category through the suggestion service
///
/// A failed or unmatched suggestion is reported and leaves the category
/// unset, which the caller rejects.
fn suggested_category(
    session: &Session,
    vendor: &str,
    amount: Money,
    description: Option<String>,
) -> TrackerResult<CategoryId> {
    let request = SuggestionRequest::new(vendor, amount).with_description(description);
    let suggester = suggester_for(session.settings.suggestion_endpoint.as_deref())?;

    match suggest_category(suggester.as_ref(), &session.storage.categories, &request) {
        Ok(SuggestionOutcome::Matched {
            category,
            suggestion,
        }) => {
            println!(
                "Suggested category: {} ({}% confidence)",
                category.name,
                suggestion.confidence_percent()
            );
            Ok(category.id)
        }
        Ok(SuggestionOutcome::Unmatched { suggestion }) => {
            println!(
                "Suggestion: {} ({}% confidence) does not match any category.",
                suggestion.category,
                suggestion.confidence_percent()
            );
            Err(TrackerError::Validation(
                "Category is required; pick one with --category".into(),
            ))
        }
        Err(e) if e.is_validation() => Err(e),
        Err(e) => {
            println!("{}", e);
            Err(TrackerError::Validation(
                "Category is required; pick one with --category".into(),
            ))
        }
    }
}
