//! Analytics over a transaction snapshot
//!
//! Everything here is a pure function of `&[Transaction]` (as returned by
//! `Database::load_all`). Nothing reads from or writes to storage.
//!
//! ## Views
//!
//! - **Aggregates** - Monthly and per-category expense totals, dashboard
//! - **Expense Forecaster** - Least-squares projection of monthly expenses
//! - **Savings** - Income minus expense against a goal
//! - **Recommendations** - Configurable category-average rules
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::analytics;
//!
//! let transactions = db.load_all()?;
//! let forecast = analytics::forecast_expenses(&transactions);
//! let progress = analytics::savings_progress(&transactions, 100_000.0)?;
//! ```

pub mod aggregate;
pub mod forecast;
pub mod recommendations;
pub mod savings;
pub mod types;

pub use aggregate::{
    category_expense_totals, dashboard, monthly_expense_totals, total_expense, total_income,
};
pub use forecast::{forecast_expenses, ExpenseForecaster, FORECAST_MONTHS};
pub use recommendations::{evaluate_rules, recommendations};
pub use savings::{savings_progress, DEFAULT_SAVINGS_GOAL};
pub use types::{Dashboard, Forecast, ForecastBasis, Recommendation, SavingsProgress};
