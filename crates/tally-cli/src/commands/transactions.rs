//! Transaction command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::db::Database;
use tally_core::models::{NewTransaction, Transaction, TransactionType};

use super::{format_amount, truncate};
use crate::cli::EntryArgs;

/// Turn command-line entry fields into a record for storage
pub fn build_entry(args: &EntryArgs) -> Result<NewTransaction> {
    let date = NaiveDate::parse_from_str(args.date.trim(), "%Y-%m-%d")
        .context("Invalid --date format (use YYYY-MM-DD)")?;
    let kind: TransactionType = args
        .kind
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    Ok(NewTransaction {
        date,
        category: args.category.trim().to_string(),
        amount: args.amount,
        kind,
        description: args
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from),
    })
}

fn amount_cell(tx: &Transaction) -> String {
    match tx.kind {
        TransactionType::Expense => format!("\x1b[31m-{}\x1b[0m", format_amount(tx.amount)), // Red for expenses
        TransactionType::Income => format!("\x1b[32m+{}\x1b[0m", format_amount(tx.amount)), // Green for income
    }
}

pub fn cmd_add(db: &Database, args: &EntryArgs) -> Result<i64> {
    let entry = build_entry(args)?;
    let id = db.insert_transaction(&entry).context("Failed to add entry")?;

    println!(
        "✅ Added {} #{}: {} │ {} │ {}",
        entry.kind.as_str().to_lowercase(),
        id,
        entry.date,
        format_amount(entry.amount),
        entry.category
    );

    Ok(id)
}

pub fn cmd_edit(db: &Database, id: i64, args: &EntryArgs) -> Result<()> {
    let entry = build_entry(args)?;

    let before = db
        .get_transaction(id)?
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;

    db.update_transaction(id, &entry)
        .with_context(|| format!("Failed to update transaction {}", id))?;

    println!("✅ Updated transaction {}:", id);
    println!(
        "   before: {} │ {:>7} │ {:>12} │ {}",
        before.date,
        before.kind.as_str(),
        format_amount(before.amount),
        before.category
    );
    println!(
        "   after:  {} │ {:>7} │ {:>12} │ {}",
        entry.date,
        entry.kind.as_str(),
        format_amount(entry.amount),
        entry.category
    );

    Ok(())
}

pub fn cmd_list(db: &Database, limit: usize) -> Result<()> {
    let mut transactions = db.load_all()?;

    if transactions.is_empty() {
        println!("No transactions found. Add one with:");
        println!("  tally add --date 2024-01-10 --category Food --amount 500");
        return Ok(());
    }

    // Most recent first
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions.iter().take(limit) {
        println!(
            "   [{:>4}] {} │ {:>22} │ {:18} │ {}",
            tx.id,
            tx.date,
            amount_cell(tx),
            truncate(&tx.category, 18),
            truncate(tx.description.as_deref().unwrap_or(""), 30)
        );
    }

    if transactions.len() > limit {
        println!();
        println!(
            "   Showing {} of {}. Use --limit to see more.",
            limit,
            transactions.len()
        );
    }

    Ok(())
}
