//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Show database status

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::db::{Database, SCHEMA_VERSION};
use tracing::debug;

/// Open the database (creating the schema if needed)
pub fn open_db(db_path: &Path) -> Result<Database> {
    debug!(path = %db_path.display(), "Opening database");
    Database::new(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let count = db.count_transactions()?;

    println!("   Schema version: {}", db.schema_version()?);
    println!("   Transactions: {}", count);
    println!("✅ Database initialized successfully!");

    if count == 0 {
        println!();
        println!("Next steps:");
        println!("  1. Add an entry: tally add --date 2024-01-10 --category Food --amount 500");
        println!("  2. View the overview: tally dashboard");
    }

    Ok(())
}

pub fn cmd_status(db_path: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    let version = db.schema_version()?;
    let size = std::fs::metadata(db.path()).map(|m| m.len()).unwrap_or(0);

    println!();
    println!("📦 Database Status");
    println!("   ─────────────────────────────");
    println!("   Path: {}", db.path().display());
    println!("   Size: {} bytes", size);
    println!(
        "   Schema version: {}{}",
        version,
        if version == SCHEMA_VERSION {
            ""
        } else {
            " (newer than this build)"
        }
    );
    println!("   Transactions: {}", db.count_transactions()?);

    Ok(())
}
