//! Audit logging system for SpendTrack
//!
//! Records every create, update and delete on categories, transactions and
//! budgets with before/after values in an append-only JSONL log. This is the
//! application's structured log; the ledger itself stays in memory.
//!
//! ```rust,ignore
//! use spendtrack::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Category,
//!     category.id.to_string(),
//!     Some(category.name.clone()),
//!     &category,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
