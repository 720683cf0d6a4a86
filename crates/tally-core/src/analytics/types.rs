//! Result types produced by the analytics functions

use serde::{Deserialize, Serialize};

use crate::models::{CategoryTotal, MonthlyTotal};

/// How the projected series of a [`Forecast`] was produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForecastBasis {
    /// No expense data at all; both series are empty
    NoData,
    /// Exactly one month of data; every projected month repeats it
    FlatProjection { level: f64 },
    /// Least-squares line over the month index: `total = intercept + slope * index`
    Regression { slope: f64, intercept: f64 },
}

impl ForecastBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoData => "no_data",
            Self::FlatProjection { .. } => "flat_projection",
            Self::Regression { .. } => "regression",
        }
    }
}

/// Historical monthly expenses plus the projection that follows them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub historical: Vec<MonthlyTotal>,
    pub projected: Vec<MonthlyTotal>,
    pub basis: ForecastBasis,
}

impl Forecast {
    pub fn is_empty(&self) -> bool {
        matches!(self.basis, ForecastBasis::NoData)
    }
}

/// Savings against a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsProgress {
    pub goal: f64,
    /// Total income minus total expense
    pub savings: f64,
    /// `savings / goal * 100`, unclamped (may be negative or above 100)
    pub percent: f64,
}

impl SavingsProgress {
    /// Percent clamped to 0..=100, for progress bars
    pub fn display_percent(&self) -> f64 {
        if self.percent.is_nan() {
            return 0.0;
        }
        self.percent.clamp(0.0, 100.0)
    }

    pub fn goal_reached(&self) -> bool {
        self.savings >= self.goal
    }
}

/// A fired recommendation rule with the figures that triggered it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub mean_amount: f64,
    pub threshold: f64,
    pub message: String,
}

/// Everything the overview screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub transaction_count: usize,
    pub total_income: f64,
    pub total_expense: f64,
    pub monthly_expenses: Vec<MonthlyTotal>,
    pub category_expenses: Vec<CategoryTotal>,
}

impl Dashboard {
    pub fn has_expenses(&self) -> bool {
        !self.monthly_expenses.is_empty()
    }
}
