//! Savings goal progress

use crate::error::{Error, Result};
use crate::models::Transaction;

use super::aggregate::{total_expense, total_income};
use super::types::SavingsProgress;

/// Default savings goal used by the goal tracker
pub const DEFAULT_SAVINGS_GOAL: f64 = 100_000.0;

/// Compute savings (income minus expense) and its percentage of `goal`
///
/// `goal` must be positive and finite; anything else is `Error::InvalidGoal`.
pub fn savings_progress(transactions: &[Transaction], goal: f64) -> Result<SavingsProgress> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(Error::InvalidGoal(goal));
    }

    let savings = total_income(transactions) - total_expense(transactions);

    Ok(SavingsProgress {
        goal,
        savings,
        percent: savings / goal * 100.0,
    })
}
