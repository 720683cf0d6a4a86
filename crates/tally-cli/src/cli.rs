//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tally_core::analytics::DEFAULT_SAVINGS_GOAL;

/// Tally - Track income and expenses, forecast spending, watch your savings
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "finance.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Add a new income or expense entry
    Add {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Replace every field of an existing entry
    Edit {
        /// Transaction ID to edit
        id: i64,

        #[command(flatten)]
        entry: EntryArgs,
    },

    /// List recent transactions
    List {
        /// Maximum number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show monthly and per-category expense overview
    Dashboard {
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Forecast monthly expenses for the next 6 months
    Forecast {
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show progress toward a savings goal
    Goal {
        /// Savings goal amount
        #[arg(short, long, default_value_t = DEFAULT_SAVINGS_GOAL)]
        target: f64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show spending suggestions
    Suggestions {
        /// Rules file (TOML). Defaults to the data-dir override or built-in rules
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Show database status (path, schema version, row count)
    Status,
}

/// Fields of a transaction entry
#[derive(Args, Debug, Clone)]
pub struct EntryArgs {
    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Category (e.g., Groceries, Salary)
    #[arg(short, long)]
    pub category: String,

    /// Amount (non-negative)
    #[arg(short, long)]
    pub amount: f64,

    /// Entry type: expense or income
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub kind: String,

    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
}
