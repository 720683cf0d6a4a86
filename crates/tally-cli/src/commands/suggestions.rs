//! Suggestion command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::analytics;
use tally_core::db::Database;
use tally_core::rules::RecommendationRules;

use super::format_amount;

pub fn cmd_suggestions(db: &Database, rules_path: Option<&Path>) -> Result<()> {
    let rules = RecommendationRules::load(rules_path).context("Failed to load suggestion rules")?;
    let transactions = db.load_all()?;
    let fired = analytics::evaluate_rules(&transactions, &rules);

    println!();
    println!("💡 Earning Opportunities");
    println!("   ─────────────────────────────────────────────────────────────");

    if fired.is_empty() {
        println!("   No suggestions – your spending is optimized!");
        return Ok(());
    }

    for rec in &fired {
        println!("   • {}", rec.message);
        println!(
            "     \x1b[2m{} averages {} (threshold {})\x1b[0m",
            rec.category,
            format_amount(rec.mean_amount),
            format_amount(rec.threshold)
        );
    }

    Ok(())
}
