//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance dashboard:
//! - Single-table SQLite storage with versioned schema setup
//! - Monthly and per-category expense aggregation
//! - Linear forecast of monthly expenses
//! - Savings goal progress
//! - Rule-based spending recommendations with TOML configuration

pub mod analytics;
pub mod db;
pub mod error;
pub mod models;
pub mod rules;

pub use analytics::{Dashboard, Forecast, ForecastBasis, Recommendation, SavingsProgress};
pub use db::Database;
pub use error::{Error, Result};
pub use models::{CategoryTotal, Month, MonthlyTotal, NewTransaction, Transaction, TransactionType};
pub use rules::{RecommendationRules, Rule};
