//! Rule-based spending suggestions

use crate::models::Transaction;
use crate::rules::{RecommendationRules, Rule};

use super::types::Recommendation;

/// Mean amount of transactions in `category`, or None if there are none
fn mean_amount(transactions: &[Transaction], category: &str) -> Option<f64> {
    let (sum, count) = transactions
        .iter()
        .filter(|t| t.category == category)
        .fold((0.0, 0usize), |(sum, count), t| (sum + t.amount, count + 1));

    (count > 0).then(|| sum / count as f64)
}

fn evaluate(rule: &Rule, transactions: &[Transaction]) -> Option<Recommendation> {
    let mean = mean_amount(transactions, &rule.category)?;
    (mean > rule.threshold).then(|| Recommendation {
        category: rule.category.clone(),
        mean_amount: mean,
        threshold: rule.threshold,
        message: rule.message.clone(),
    })
}

/// Fired rules with the figures behind them, in rule order
pub fn evaluate_rules(
    transactions: &[Transaction],
    rules: &RecommendationRules,
) -> Vec<Recommendation> {
    rules
        .rules()
        .iter()
        .filter_map(|rule| evaluate(rule, transactions))
        .collect()
}

/// Advisory messages for every rule that fires, in rule order
pub fn recommendations(transactions: &[Transaction], rules: &RecommendationRules) -> Vec<String> {
    evaluate_rules(transactions, rules)
        .into_iter()
        .map(|r| r.message)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::tx;
    use crate::models::TransactionType::{Expense, Income};

    fn builtin() -> RecommendationRules {
        RecommendationRules::builtin().unwrap()
    }

    #[test]
    fn test_no_matching_categories_no_advice() {
        let txs = vec![
            tx(1, "2024-01-10", "Food", 5000.0, Expense),
            tx(2, "2024-01-15", "Salary", 50000.0, Income),
        ];
        assert!(recommendations(&txs, &builtin()).is_empty());
        assert!(recommendations(&[], &builtin()).is_empty());
    }

    #[test]
    fn test_mobile_recharge_rule() {
        let txs = vec![
            tx(1, "2024-01-01", "Mobile Recharge", 299.0, Expense),
            tx(2, "2024-02-01", "Mobile Recharge", 399.0, Expense),
        ];
        assert_eq!(
            recommendations(&txs, &builtin()),
            vec!["Consider switching to a cheaper mobile plan.".to_string()]
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let txs = vec![
            tx(1, "2024-01-01", "Mobile Recharge", 200.0, Expense),
            tx(2, "2024-02-01", "Mobile Recharge", 300.0, Expense),
        ];
        // mean is exactly 250
        assert!(recommendations(&txs, &builtin()).is_empty());
    }

    #[test]
    fn test_both_rules_in_order() {
        let txs = vec![
            tx(1, "2024-01-01", "Groceries", 1500.0, Expense),
            tx(2, "2024-01-02", "Mobile Recharge", 500.0, Expense),
        ];

        let fired = evaluate_rules(&txs, &builtin());
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0].category, "Mobile Recharge");
        assert_eq!(fired[0].mean_amount, 500.0);
        assert_eq!(fired[1].category, "Groceries");
        assert_eq!(
            fired[1].message,
            "Look for monthly grocery deals or local markets."
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        let txs = vec![tx(1, "2024-01-01", "groceries", 5000.0, Expense)];
        assert!(recommendations(&txs, &builtin()).is_empty());
    }

    #[test]
    fn test_custom_rules() {
        let rules = RecommendationRules::new(vec![Rule {
            category: "Taxi".to_string(),
            threshold: 20.0,
            message: "Take the bus.".to_string(),
        }])
        .unwrap();

        let txs = vec![
            tx(1, "2024-01-01", "Taxi", 10.0, Expense),
            tx(2, "2024-01-02", "Taxi", 40.0, Expense),
        ];
        assert_eq!(recommendations(&txs, &rules), vec!["Take the bus.".to_string()]);
    }
}
