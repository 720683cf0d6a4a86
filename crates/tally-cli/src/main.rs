//! Tally CLI - Personal finance dashboard
//!
//! Usage:
//!   tally init                                   Initialize database
//!   tally add --date 2024-01-10 -c Food -a 500   Add an expense
//!   tally dashboard                              Monthly and category overview
//!   tally forecast                               6-month expense forecast

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Status => commands::cmd_status(&cli.db),
        Commands::Add { entry } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_add(&db, &entry).map(|_| ())
        }
        Commands::Edit { id, entry } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_edit(&db, id, &entry)
        }
        Commands::List { limit } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_list(&db, limit)
        }
        Commands::Dashboard { json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_dashboard(&db, json)
        }
        Commands::Forecast { json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_forecast(&db, json)
        }
        Commands::Goal { target, json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_goal(&db, target, json)
        }
        Commands::Suggestions { rules } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_suggestions(&db, rules.as_deref())
        }
    }
}
