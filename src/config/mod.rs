//! Configuration module for SpendTrack
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - Preference persistence (theme, language, currency)

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{Currency, Language, Settings, Theme};
