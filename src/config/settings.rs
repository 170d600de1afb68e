//! User preferences for SpendTrack
//!
//! Theme, language and currency are the only state that survives between
//! sessions. Missing or partial settings files fall back to defaults field
//! by field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;
use crate::storage::{read_json, write_json_atomic};

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the terminal or OS preference
    #[default]
    System,
}

impl Theme {
    pub fn all() -> &'static [Self] {
        &[Self::Light, Self::Dark, Self::System]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Es, Self::Fr]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }
}

/// Display currency
///
/// Only changes how amounts are shown; amounts are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    pub fn all() -> &'static [Self] {
        &[Self::Usd, Self::Eur, Self::Gbp, Self::Jpy]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
        }
    }

    /// Format an amount with this currency's symbol
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(self.symbol())
    }
}

macro_rules! impl_code_parsing {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl FromStr for $ty {
            type Err = TrackerError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::all()
                    .iter()
                    .copied()
                    .find(|v| v.code().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let options: Vec<&str> = $ty::all().iter().map(|v| v.code()).collect();
                        TrackerError::Validation(format!(
                            "Unknown {} '{}'. Expected one of: {}",
                            $what,
                            wanted,
                            options.join(", ")
                        ))
                    })
            }
        }
    };
}

impl_code_parsing!(Theme, "theme");
impl_code_parsing!(Language, "language");
impl_code_parsing!(Currency, "currency");

/// User settings for SpendTrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub currency: Currency,

    /// Base URL of the category suggestion service; the offline keyword
    /// matcher is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_endpoint: Option<String>,

    /// Whether entity changes are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: Language::default(),
            currency: Currency::default(),
            suggestion_endpoint: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, falling back to defaults when absent
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        read_json(paths.settings_file())
            .map_err(|e| TrackerError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Format an amount in the preferred currency
    pub fn format_money(&self, amount: Money) -> String {
        self.currency.format(amount)
    }
}
