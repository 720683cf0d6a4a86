//! Group-by-sum views over a transaction snapshot

use std::collections::BTreeMap;

use crate::models::{CategoryTotal, Month, MonthlyTotal, Transaction};

use super::types::Dashboard;

/// Expense totals per month, oldest month first
pub fn monthly_expense_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut by_month: BTreeMap<Month, f64> = BTreeMap::new();

    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *by_month.entry(tx.month()).or_insert(0.0) += tx.amount;
    }

    by_month
        .into_iter()
        .map(|(month, total)| MonthlyTotal { month, total })
        .collect()
}

/// Expense totals per category, sorted by category name
pub fn category_expense_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();

    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *by_category.entry(tx.category.as_str()).or_insert(0.0) += tx.amount;
    }

    by_category
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect()
}

/// Sum of all income amounts
pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum()
}

/// Sum of all expense amounts
pub fn total_expense(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum()
}

/// Build the overview: monthly and category expense breakdowns plus totals
pub fn dashboard(transactions: &[Transaction]) -> Dashboard {
    Dashboard {
        transaction_count: transactions.len(),
        total_income: total_income(transactions),
        total_expense: total_expense(transactions),
        monthly_expenses: monthly_expense_totals(transactions),
        category_expenses: category_expense_totals(transactions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::tx;
    use crate::models::TransactionType::{Expense, Income};

    #[test]
    fn test_monthly_totals_empty() {
        assert!(monthly_expense_totals(&[]).is_empty());
        assert!(category_expense_totals(&[]).is_empty());
    }

    #[test]
    fn test_monthly_totals_group_and_order() {
        let txs = vec![
            tx(1, "2024-02-03", "Food", 600.0, Expense),
            tx(2, "2024-01-10", "Food", 500.0, Expense),
            tx(3, "2024-01-15", "Salary", 50000.0, Income),
            tx(4, "2024-01-20", "Fuel", 45.5, Expense),
            tx(5, "2023-12-31", "Gifts", 80.0, Expense),
        ];

        let totals = monthly_expense_totals(&txs);
        let labels: Vec<(String, f64)> = totals
            .iter()
            .map(|t| (t.month.to_string(), t.total))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("2023-12".to_string(), 80.0),
                ("2024-01".to_string(), 545.5),
                ("2024-02".to_string(), 600.0),
            ]
        );

        let grand: f64 = totals.iter().map(|t| t.total).sum();
        assert_eq!(grand, total_expense(&txs));
    }

    #[test]
    fn test_monthly_totals_ignore_income_only_months() {
        let txs = vec![
            tx(1, "2024-03-01", "Salary", 1000.0, Income),
            tx(2, "2024-04-01", "Food", 10.0, Expense),
        ];
        let totals = monthly_expense_totals(&txs);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].month.to_string(), "2024-04");
    }

    #[test]
    fn test_category_totals() {
        let txs = vec![
            tx(1, "2024-01-10", "Food", 500.0, Expense),
            tx(2, "2024-02-01", "Food", 600.0, Expense),
            tx(3, "2024-01-15", "Salary", 50000.0, Income),
            tx(4, "2024-01-20", "Fuel", 40.0, Expense),
        ];

        let totals = category_expense_totals(&txs);
        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "Food".to_string(),
                    total: 1100.0
                },
                CategoryTotal {
                    category: "Fuel".to_string(),
                    total: 40.0
                },
            ]
        );
    }

    #[test]
    fn test_dashboard() {
        let txs = vec![
            tx(1, "2024-01-10", "Food", 500.0, Expense),
            tx(2, "2024-01-15", "Salary", 50000.0, Income),
        ];

        let dash = dashboard(&txs);
        assert_eq!(dash.transaction_count, 2);
        assert_eq!(dash.total_income, 50000.0);
        assert_eq!(dash.total_expense, 500.0);
        assert!(dash.has_expenses());

        let empty = dashboard(&[]);
        assert!(!empty.has_expenses());
        assert_eq!(empty.total_expense, 0.0);
    }
}
