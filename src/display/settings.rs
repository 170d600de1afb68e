//! Settings and audit history formatting

use crate::audit::AuditEntry;
use crate::config::{Settings, TrackerPaths};

/// Format the current preferences
pub fn format_settings(settings: &Settings, paths: &TrackerPaths) -> String {
    let mut output = String::new();

    output.push_str("Settings\n");
    output.push_str(&format!("  Theme:       {}\n", settings.theme));
    output.push_str(&format!(
        "  Language:    {} ({})\n",
        settings.language,
        settings.language.label()
    ));
    output.push_str(&format!(
        "  Currency:    {} ({})\n",
        settings.currency,
        settings.currency.symbol()
    ));
    output.push_str(&format!(
        "  Suggestions: {}\n",
        settings
            .suggestion_endpoint
            .as_deref()
            .unwrap_or("offline keyword matcher")
    ));
    output.push_str(&format!(
        "  Audit log:   {}\n",
        if settings.audit_enabled { "on" } else { "off" }
    ));
    output.push_str(&format!(
        "  Config file: {}\n",
        paths.settings_file().display()
    ));

    output
}

/// Format audit entries, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries found.\n".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{}\n", e.format_human_readable()))
        .collect()
}
