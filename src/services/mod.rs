//! Service layer for SpendTrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, cross-entity checks and audit logging.

pub mod budget;
pub mod category;
pub mod suggestion;
pub mod transaction;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use suggestion::{
    suggest_category, suggester_for, CategorySuggester, HttpSuggester, KeywordSuggester,
    Suggestion, SuggestionOutcome, SuggestionRequest,
};
pub use transaction::{find_transaction, list_transactions, TransactionFilter, TransactionService};
