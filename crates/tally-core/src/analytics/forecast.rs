//! Expense Forecaster
//!
//! Projects monthly expense totals forward with an ordinary least-squares
//! line fitted against the month index. Months are indexed 0, 1, 2, ... in
//! chronological order of the months that have expenses, so a gap in the
//! calendar does not stretch the x axis.
//!
//! With fewer than two months the line is underdetermined:
//! - one month is projected flat at its observed total
//! - no months yields empty series and [`ForecastBasis::NoData`]

use tracing::debug;

use crate::models::{MonthlyTotal, Transaction};

use super::aggregate::monthly_expense_totals;
use super::types::{Forecast, ForecastBasis};

/// Number of months projected by default
pub const FORECAST_MONTHS: usize = 6;

/// Forecasts future monthly expenses from the historical series
pub struct ExpenseForecaster {
    /// Number of months to project (default 6)
    horizon: usize,
}

impl ExpenseForecaster {
    pub fn new() -> Self {
        Self {
            horizon: FORECAST_MONTHS,
        }
    }

    pub fn with_horizon(months: usize) -> Self {
        Self { horizon: months }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Build the historical series and project it forward
    pub fn forecast(&self, transactions: &[Transaction]) -> Forecast {
        let historical = monthly_expense_totals(transactions);

        let (mut month, last_total) = match historical.last() {
            Some(last) => (last.month, last.total),
            None => {
                return Forecast {
                    historical,
                    projected: Vec::new(),
                    basis: ForecastBasis::NoData,
                }
            }
        };

        let basis = if historical.len() == 1 {
            ForecastBasis::FlatProjection { level: last_total }
        } else {
            let totals: Vec<f64> = historical.iter().map(|m| m.total).collect();
            let (slope, intercept) = fit_line(&totals);
            ForecastBasis::Regression { slope, intercept }
        };

        let first_index = historical.len();
        let mut projected = Vec::with_capacity(self.horizon);

        for offset in 0..self.horizon {
            month = month.succ();
            let total = match basis {
                ForecastBasis::Regression { slope, intercept } => {
                    intercept + slope * (first_index + offset) as f64
                }
                ForecastBasis::FlatProjection { level } => level,
                ForecastBasis::NoData => 0.0,
            };
            projected.push(MonthlyTotal { month, total });
        }

        debug!(
            months = historical.len(),
            basis = basis.as_str(),
            horizon = self.horizon,
            "Expense forecast fitted"
        );

        Forecast {
            historical,
            projected,
            basis,
        }
    }
}

impl Default for ExpenseForecaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Forecast the 6 months following the last month with expenses
pub fn forecast_expenses(transactions: &[Transaction]) -> Forecast {
    ExpenseForecaster::new().forecast(transactions)
}

/// Closed-form least squares for `y = intercept + slope * x` with `x = 0..n`
///
/// Requires at least two points, so the x variance is non-zero.
fn fit_line(ys: &[f64]) -> (f64, f64) {
    let n = ys.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, y) in ys.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    (slope, y_mean - slope * x_mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::tx;
    use crate::models::TransactionType::{Expense, Income};

    fn labels(series: &[MonthlyTotal]) -> Vec<String> {
        series.iter().map(|m| m.month.to_string()).collect()
    }

    #[test]
    fn test_fit_line_exact() {
        let (slope, intercept) = fit_line(&[100.0, 200.0, 300.0]);
        assert_eq!(slope, 100.0);
        assert_eq!(intercept, 100.0);

        let (slope, intercept) = fit_line(&[5.0, 5.0]);
        assert_eq!(slope, 0.0);
        assert_eq!(intercept, 5.0);
    }

    #[test]
    fn test_fit_line_least_squares() {
        // y = 1, 3, 2 → slope 0.5, intercept 1.5
        let (slope, intercept) = fit_line(&[1.0, 3.0, 2.0]);
        assert!((slope - 0.5).abs() < 1e-12);
        assert!((intercept - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_no_data() {
        let txs = vec![tx(1, "2024-01-15", "Salary", 1000.0, Income)];
        let forecast = forecast_expenses(&txs);

        assert_eq!(forecast.basis, ForecastBasis::NoData);
        assert!(forecast.is_empty());
        assert!(forecast.historical.is_empty());
        assert!(forecast.projected.is_empty());
    }

    #[test]
    fn test_single_month_flat_projection() {
        let txs = vec![
            tx(1, "2024-03-02", "Food", 120.0, Expense),
            tx(2, "2024-03-20", "Fuel", 80.0, Expense),
        ];
        let forecast = forecast_expenses(&txs);

        assert_eq!(forecast.basis, ForecastBasis::FlatProjection { level: 200.0 });
        assert_eq!(forecast.historical.len(), 1);
        assert_eq!(forecast.projected.len(), FORECAST_MONTHS);
        assert!(forecast.projected.iter().all(|p| p.total == 200.0));
        assert_eq!(
            labels(&forecast.projected),
            vec!["2024-04", "2024-05", "2024-06", "2024-07", "2024-08", "2024-09"]
        );
    }

    #[test]
    fn test_linear_series_continues() {
        let txs = vec![
            tx(1, "2024-01-05", "Food", 100.0, Expense),
            tx(2, "2024-02-05", "Food", 200.0, Expense),
            tx(3, "2024-03-05", "Food", 300.0, Expense),
        ];
        let forecast = forecast_expenses(&txs);

        assert_eq!(
            forecast.basis,
            ForecastBasis::Regression {
                slope: 100.0,
                intercept: 100.0
            }
        );
        let totals: Vec<f64> = forecast.projected.iter().map(|p| p.total).collect();
        assert_eq!(totals, vec![400.0, 500.0, 600.0, 700.0, 800.0, 900.0]);
        assert_eq!(labels(&forecast.projected)[0], "2024-04");
    }

    #[test]
    fn test_months_roll_over_year_end() {
        let txs = vec![
            tx(1, "2024-10-01", "Rent", 900.0, Expense),
            tx(2, "2024-11-01", "Rent", 900.0, Expense),
        ];
        let forecast = forecast_expenses(&txs);

        assert_eq!(
            labels(&forecast.projected),
            vec!["2024-12", "2025-01", "2025-02", "2025-03", "2025-04", "2025-05"]
        );
    }

    #[test]
    fn test_calendar_gaps_use_sequential_index() {
        // January and June only: indices 0 and 1, projection starts in July
        let txs = vec![
            tx(1, "2024-01-10", "Food", 100.0, Expense),
            tx(2, "2024-06-10", "Food", 200.0, Expense),
        ];
        let forecast = forecast_expenses(&txs);

        assert_eq!(forecast.projected[0].month.to_string(), "2024-07");
        assert_eq!(forecast.projected[0].total, 300.0);
    }

    #[test]
    fn test_forecast_is_deterministic() {
        let txs = vec![
            tx(1, "2024-01-10", "Food", 133.7, Expense),
            tx(2, "2024-02-11", "Food", 98.1, Expense),
            tx(3, "2024-03-12", "Food", 251.9, Expense),
            tx(4, "2024-04-13", "Food", 17.3, Expense),
        ];
        assert_eq!(forecast_expenses(&txs), forecast_expenses(&txs));
    }

    #[test]
    fn test_custom_horizon() {
        let txs = vec![tx(1, "2024-01-10", "Food", 10.0, Expense)];
        let forecaster = ExpenseForecaster::with_horizon(3);
        assert_eq!(forecaster.horizon(), 3);
        assert_eq!(forecaster.forecast(&txs).projected.len(), 3);
    }
}
