//! Suggest CLI command

use super::{parse_amount, Session};
use crate::error::TrackerResult;
use crate::services::{suggest_category, suggester_for, SuggestionOutcome, SuggestionRequest};

/// Ask for a category suggestion and show how it resolves
pub fn handle_suggest_command(
    session: &mut Session,
    vendor: &str,
    amount: &str,
    description: Option<String>,
) -> TrackerResult<()> {
    let request = SuggestionRequest::new(vendor, parse_amount(amount)?).with_description(description);
    let suggester = suggester_for(session.settings.suggestion_endpoint.as_deref())?;

    match suggest_category(suggester.as_ref(), &session.storage.categories, &request)? {
        SuggestionOutcome::Matched {
            category,
            suggestion,
        } => {
            println!(
                "Suggested category: {} {} ({}% confidence)",
                category.icon_name.glyph(),
                category.name,
                suggestion.confidence_percent()
            );
        }
        SuggestionOutcome::Unmatched { suggestion } => {
            println!(
                "Suggestion: {} ({}% confidence)",
                suggestion.category,
                suggestion.confidence_percent()
            );
            println!("  No existing category has this name.");
        }
    }

    Ok(())
}
