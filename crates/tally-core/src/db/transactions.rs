//! Transaction operations

use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{parse_date, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionType};

const SELECT_COLUMNS: &str = "SELECT id, Date, Category, Amount, Type, Description FROM transactions";

/// A row as stored, before the text columns are parsed
struct RawTransaction {
    id: i64,
    date: Option<String>,
    category: Option<String>,
    amount: Option<f64>,
    kind: Option<String>,
    description: Option<String>,
}

impl RawTransaction {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            category: row.get(2)?,
            amount: row.get(3)?,
            kind: row.get(4)?,
            description: row.get(5)?,
        })
    }

    fn parse(self) -> Result<Transaction> {
        let id = self.id;
        let invalid = |what: &str, value: Option<&str>| {
            Error::InvalidData(format!(
                "transaction {} has invalid {}: {}",
                id,
                what,
                value.unwrap_or("NULL")
            ))
        };

        let date = self
            .date
            .as_deref()
            .and_then(parse_date)
            .ok_or_else(|| invalid("Date", self.date.as_deref()))?;
        let kind = self
            .kind
            .as_deref()
            .and_then(TransactionType::from_stored)
            .ok_or_else(|| invalid("Type", self.kind.as_deref()))?;
        let amount = self
            .amount
            .ok_or_else(|| invalid("Amount", None))?;
        let category = self
            .category
            .ok_or_else(|| invalid("Category", None))?;

        Ok(Transaction {
            id,
            date,
            category,
            amount,
            kind,
            description: self.description,
        })
    }
}

impl Database {
    /// Insert a transaction, returning its new id
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<i64> {
        tx.validate()?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO transactions (Date, Category, Amount, Type, Description)
            VALUES (?, ?, ?, ?, ?)
            "#,
            params![
                tx.date.format("%Y-%m-%d").to_string(),
                tx.category,
                tx.amount,
                tx.kind.as_str(),
                tx.description,
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, category = %tx.category, amount = tx.amount, kind = %tx.kind, "Inserted transaction");
        Ok(id)
    }

    /// Load every transaction in insertion order
    pub fn load_all(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))?;

        let raw = stmt
            .query_map([], RawTransaction::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let transactions = raw
            .into_iter()
            .map(RawTransaction::parse)
            .collect::<Result<Vec<_>>>()?;

        debug!(count = transactions.len(), "Loaded transactions");
        Ok(transactions)
    }

    /// Get a single transaction by ID
    pub fn get_transaction(&self, id: i64) -> Result<Option<Transaction>> {
        let conn = self.conn()?;

        let raw = conn
            .query_row(
                &format!("{} WHERE id = ?", SELECT_COLUMNS),
                params![id],
                RawTransaction::from_row,
            )
            .optional()?;

        raw.map(RawTransaction::parse).transpose()
    }

    /// Replace every field of an existing transaction (everything but its id)
    pub fn update_transaction(&self, id: i64, tx: &NewTransaction) -> Result<()> {
        tx.validate()?;
        let conn = self.conn()?;

        let updated = conn.execute(
            r#"
            UPDATE transactions
            SET Date = ?, Category = ?, Amount = ?, Type = ?, Description = ?
            WHERE id = ?
            "#,
            params![
                tx.date.format("%Y-%m-%d").to_string(),
                tx.category,
                tx.amount,
                tx.kind.as_str(),
                tx.description,
                id,
            ],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!("transaction {}", id)));
        }

        debug!(id, "Updated transaction");
        Ok(())
    }

    /// Count stored transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }
}
