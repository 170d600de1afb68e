//! Category model
//!
//! Categories are user-defined labels with an icon, used to classify
//! transactions and to key monthly budgets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::CategoryId;

/// Icon associated with a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryIcon {
    ShoppingCart,
    Receipt,
    Film,
    Car,
    Home,
    Briefcase,
    Shirt,
    HeartPulse,
    BookOpen,
    Gift,
    Plane,
    Utensils,
    #[default]
    HelpCircle,
}

impl CategoryIcon {
    /// Get all icons in picker order
    pub fn all() -> &'static [Self] {
        &[
            Self::ShoppingCart,
            Self::Receipt,
            Self::Film,
            Self::Car,
            Self::Home,
            Self::Briefcase,
            Self::Shirt,
            Self::HeartPulse,
            Self::BookOpen,
            Self::Gift,
            Self::Plane,
            Self::Utensils,
            Self::HelpCircle,
        ]
    }

    /// The icon's canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShoppingCart => "ShoppingCart",
            Self::Receipt => "Receipt",
            Self::Film => "Film",
            Self::Car => "Car",
            Self::Home => "Home",
            Self::Briefcase => "Briefcase",
            Self::Shirt => "Shirt",
            Self::HeartPulse => "HeartPulse",
            Self::BookOpen => "BookOpen",
            Self::Gift => "Gift",
            Self::Plane => "Plane",
            Self::Utensils => "Utensils",
            Self::HelpCircle => "HelpCircle",
        }
    }

    /// A terminal glyph standing in for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::ShoppingCart => "🛒",
            Self::Receipt => "🧾",
            Self::Film => "🎬",
            Self::Car => "🚗",
            Self::Home => "🏠",
            Self::Briefcase => "💼",
            Self::Shirt => "👕",
            Self::HeartPulse => "🩺",
            Self::BookOpen => "📖",
            Self::Gift => "🎁",
            Self::Plane => "✈️",
            Self::Utensils => "🍴",
            Self::HelpCircle => "❔",
        }
    }
}

impl fmt::Display for CategoryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CategoryIcon {
    type Err = CategoryValidationError;

    /// Case-insensitive; dashes and underscores are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Self::all()
            .iter()
            .copied()
            .find(|icon| icon.name().to_lowercase() == wanted)
            .ok_or_else(|| CategoryValidationError::UnknownIcon(s.trim().to_string()))
    }
}

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Icon shown next to the name
    #[serde(default)]
    pub icon_name: CategoryIcon,
}

impl Category {
    /// Create a new category with a fresh ID
    pub fn new(name: impl Into<String>, icon_name: CategoryIcon) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon_name,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = name.chars().count();
        if len > 50 {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(())
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    UnknownIcon(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::UnknownIcon(name) => write!(f, "Unknown category icon: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
