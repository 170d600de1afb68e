//! Audit log entries

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        })
    }
}

/// Ledger entities that produce audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Category,
    Transaction,
    Budget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Category name, transaction vendor or budget label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Serialized state before an update or delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Serialized state after a create or update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    /// An update entry; without an explicit summary the changed top-level
    /// fields are listed
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = diff_summary.or_else(|| match (&before, &after) {
            (Some(b), Some(a)) => changed_fields(b, a),
            _ => None,
        });

        Self {
            before,
            after,
            diff_summary,
            ..Self::new(Operation::Update, entity_type, entity_id, entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

/// Summarize top-level fields that differ between two JSON objects
fn changed_fields(before: &serde_json::Value, after: &serde_json::Value) -> Option<String> {
    let (before, after) = (before.as_object()?, after.as_object()?);

    let changes: Vec<String> = after
        .iter()
        .filter_map(|(key, new)| match before.get(key) {
            Some(old) if old == new => None,
            Some(old) => Some(format!("{}: {} -> {}", key, old, new)),
            None => Some(format!("{}: (none) -> {}", key, new)),
        })
        .chain(
            before
                .iter()
                .filter(|(key, _)| !after.contains_key(*key))
                .map(|(key, old)| format!("{}: {} -> (none)", key, old)),
        )
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "Groceries", "iconName": "ShoppingCart"});
        let entry = AuditEntry::create(
            EntityType::Category,
            "cat-12345678",
            Some("Groceries".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Category);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry_derives_summary() {
        let before = json!({"vendor": "SuperMart", "amount": 7550});
        let after = json!({"vendor": "SuperMart", "amount": 8000});

        let entry = AuditEntry::update(
            EntityType::Transaction,
            "txn-12345678",
            None,
            &before,
            &after,
            None,
        );

        assert_eq!(entry.diff_summary.as_deref(), Some("amount: 7550 -> 8000"));
    }

    #[test]
    fn test_update_entry_reports_removed_field() {
        let before = json!({"vendor": "SuperMart", "description": "Weekly"});
        let after = json!({"vendor": "SuperMart"});

        let entry = AuditEntry::update(EntityType::Transaction, "txn-1", None, &before, &after, None);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("description: \"Weekly\" -> (none)")
        );
    }

    #[test]
    fn test_explicit_summary_wins() {
        let before = json!({"amount": 1});
        let after = json!({"amount": 2});
        let entry = AuditEntry::update(
            EntityType::Budget,
            "bud-1",
            None,
            &before,
            &after,
            Some("amount: $0.01 -> $0.02".into()),
        );
        assert_eq!(entry.diff_summary.as_deref(), Some("amount: $0.01 -> $0.02"));
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"name": "Old"});
        let entry = AuditEntry::delete(EntityType::Category, "cat-1", None, &data);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let data = json!({"name": "Groceries"});
        let entry = AuditEntry::create(
            EntityType::Category,
            "cat-12345678",
            Some("Groceries".to_string()),
            &data,
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("Category"));
        assert!(formatted.contains("cat-12345678"));
        assert!(formatted.contains("(Groceries)"));
    }
}
