//! Database access layer with connection pooling and migrations
//!
//! The whole store is one `transactions` table in a single SQLite file.
//! Column names (`Date`, `Category`, `Amount`, `Type`, `Description`) are kept
//! exactly as other tools reading `finance.db` expect them.
//!
//! - `transactions` - Transaction insert, load and update

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use tempfile::TempDir;
use tracing::{debug, info};

use crate::error::Result;

mod transactions;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Current schema version, stored in `PRAGMA user_version`
pub const SCHEMA_VERSION: i64 = 1;

/// How long to wait for a pooled connection before giving up
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-connection pragmas, run on every connection the pool opens
fn configure_connection(conn: &mut Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        -- Synchronous NORMAL: good balance of safety and performance in WAL mode
        PRAGMA synchronous = NORMAL;
        -- Store temp tables in memory (group-by scratch space)
        PRAGMA temp_store = MEMORY;
        "#,
    )
}

/// Parse a stored `Date` value
///
/// Rows written by this crate are plain `YYYY-MM-DD`; rows written by other
/// tools sometimes carry a midnight timestamp suffix.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .ok()
}

/// Database wrapper with connection pooling
///
/// Cloning is cheap and shares the pool. The pool (and every connection) is
/// closed when the last clone is dropped.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: PathBuf,
    /// Owns the directory of a throwaway database; removed with the last clone
    _temp_dir: Option<Arc<TempDir>>,
}

impl Database {
    /// Open (creating if needed) the database at `path` and run migrations
    ///
    /// The file is opened and read once up front, so an unreadable or corrupted
    /// file fails with `Error::Database` right away instead of after the pool
    /// has retried for its whole connection timeout.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(path.as_ref(), None)
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because every pooled
    /// connection to `:memory:` would see its own empty database. The file lives
    /// in its own temp directory, deleted when the last clone is dropped.
    pub fn in_memory() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("tally_test_").tempdir()?;
        let path = dir.path().join("finance.db");
        Self::open(&path, Some(Arc::new(dir)))
    }

    fn open(path: &Path, temp_dir: Option<Arc<TempDir>>) -> Result<Self> {
        {
            let mut first = Connection::open(path)?;
            configure_connection(&mut first)?;
            first.query_row("PRAGMA user_version", [], |row| row.get::<_, i64>(0))?;
        }

        let manager = SqliteConnectionManager::file(path).with_init(configure_connection);
        let pool = Pool::builder()
            .max_size(4)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_path_buf(),
            _temp_dir: temp_dir,
        };
        db.initialize()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Current value of the schema version marker
    pub fn schema_version(&self) -> Result<i64> {
        let conn = self.conn()?;
        let version = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        Ok(version)
    }

    /// Ensure the schema exists
    ///
    /// Idempotent: the `user_version` marker records the applied schema, so
    /// repeated calls (every startup) only read one pragma. A file created by
    /// an older tool that already has the table but no marker is adopted as-is.
    pub fn initialize(&self) -> Result<()> {
        let mut conn = self.conn()?;

        // WAL mode: readers never see a half-written row, and don't block the writer.
        // Persistent in the file, so setting it once per open is enough.
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;

        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version >= SCHEMA_VERSION {
            debug!(version, "Database schema up to date");
            return Ok(());
        }

        let tx = conn.transaction()?;
        tx.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                Date TEXT,
                Category TEXT,
                Amount REAL,
                Type TEXT,
                Description TEXT
            );
            "#,
        )?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION))?;
        tx.commit()?;

        info!(
            from = version,
            to = SCHEMA_VERSION,
            path = %self.db_path.display(),
            "Database schema initialized"
        );
        Ok(())
    }
}
