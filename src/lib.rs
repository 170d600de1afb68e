//! SpendTrack - terminal-based expense tracking
//!
//! This library provides the core of the SpendTrack application: recording
//! expenses against categories, setting monthly budget goals and reporting
//! how spending compares to them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Preference persistence and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, money)
//! - `storage`: In-memory entity store
//! - `services`: Business logic layer, including category suggestion
//! - `reports`: Aggregations over the ledger
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use spendtrack::reports::DashboardSummary;
//! use spendtrack::storage::Storage;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let storage = Storage::sample(today);
//! let summary = DashboardSummary::generate(&storage, today);
//! println!("{} spent this month", summary.total_spent);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
