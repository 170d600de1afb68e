//! Settings CLI commands
//!
//! Every change is written to the settings file immediately.

use clap::Subcommand;

use super::Session;
use crate::config::{Currency, Language, Theme};
use crate::display::format_settings;
use crate::error::{TrackerError, TrackerResult};

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,

    /// Set the color theme (light, dark, system)
    Theme { value: String },

    /// Set the interface language (en, es, fr)
    Language { value: String },

    /// Set the display currency (USD, EUR, GBP, JPY)
    Currency { value: String },

    /// Set the category suggestion endpoint
    Endpoint {
        /// Service URL; omit with --clear to use the offline matcher
        url: Option<String>,
        /// Remove the configured endpoint
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },

    /// Turn the audit log on or off
    Audit { state: String },
}

fn parse_switch(input: &str) -> TrackerResult<bool> {
    match input.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(TrackerError::Validation(format!(
            "Expected 'on' or 'off', got '{}'",
            other
        ))),
    }
}

/// Handle a settings command
pub fn handle_settings_command(session: &mut Session, cmd: SettingsCommands) -> TrackerResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(&session.settings, &session.paths));
            return Ok(());
        }

        SettingsCommands::Theme { value } => {
            session.settings.theme = value.parse::<Theme>()?;
            println!("Theme set to {}", session.settings.theme);
        }

        SettingsCommands::Language { value } => {
            session.settings.language = value.parse::<Language>()?;
            println!(
                "Language set to {} ({})",
                session.settings.language,
                session.settings.language.label()
            );
        }

        SettingsCommands::Currency { value } => {
            session.settings.currency = value.parse::<Currency>()?;
            println!(
                "Currency set to {} ({})",
                session.settings.currency,
                session.settings.currency.symbol()
            );
        }

        SettingsCommands::Endpoint { url, clear } => {
            if clear {
                session.settings.suggestion_endpoint = None;
                println!("Suggestion endpoint cleared; using the offline matcher.");
            } else {
                let url = url
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty())
                    .ok_or_else(|| {
                        TrackerError::Validation("Provide a URL or use --clear".into())
                    })?;
                println!("Suggestion endpoint set to {}", url);
                session.settings.suggestion_endpoint = Some(url);
            }
        }

        SettingsCommands::Audit { state } => {
            session.settings.audit_enabled = parse_switch(&state)?;
            session.sync_audit();
            println!(
                "Audit log {}",
                if session.settings.audit_enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
        }
    }

    session.settings.save(&session.paths)
}
