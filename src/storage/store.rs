//! SQLite-backed scan history.
//!
//! Every operation opens its own connection and closes it before returning.
//! Single-process, single-writer use is assumed.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{Connection, Row};

use crate::config::HISTORY_DATE_FORMAT;
use crate::error_handling::DatabaseError;
use crate::scanner::SiteReport;

use super::models::ScanRecord;

const CREATE_SCANS_TABLE: &str = "CREATE TABLE IF NOT EXISTS scans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT,
    score INTEGER,
    secure BOOLEAN,
    date TEXT
)";

/// Scan history stored in a single `scans` table.
///
/// The file location is injected at construction; nothing here reads a global
/// path.
///
/// # Example
///
/// ```no_run
/// use cyberguardian::HistoryStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = HistoryStore::new("./history.db");
/// store.init().await?;
/// store.add("https://example.com", 50, true).await?;
/// for record in store.list_recent(20).await? {
///     println!("{} {} {}", record.date, record.url, record.score);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HistoryStore {
    db_path: PathBuf,
}

impl HistoryStore {
    /// Creates a store backed by the SQLite file at `db_path`.
    ///
    /// No I/O happens until the first operation.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Location of the SQLite file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Opens a fresh connection, creating the file if needed.
    async fn connect(&self) -> Result<SqliteConnection, DatabaseError> {
        match OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&self.db_path)
        {
            Ok(_) => info!("Database file created: {}", self.db_path.display()),
            Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => {
                error!("Failed to create database file: {e}");
                return Err(DatabaseError::FileCreationError(e.to_string()));
            }
        }

        let options = SqliteConnectOptions::new().filename(&self.db_path);
        SqliteConnection::connect_with(&options).await.map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })
    }

    /// Creates the `scans` table if it does not exist. Idempotent.
    pub async fn init(&self) -> Result<(), DatabaseError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(CREATE_SCANS_TABLE).execute(&mut conn).await;
        conn.close().await?;
        result?;
        debug!("History table ready at {}", self.db_path.display());
        Ok(())
    }

    /// Inserts one scan and returns its id.
    ///
    /// `date` is the local time of the insert.
    pub async fn add(&self, url: &str, score: i64, secure: bool) -> Result<i64, DatabaseError> {
        let date = chrono::Local::now().format(HISTORY_DATE_FORMAT).to_string();

        let mut conn = self.connect().await?;
        let result = sqlx::query("INSERT INTO scans (url, score, secure, date) VALUES (?, ?, ?, ?)")
            .bind(url)
            .bind(score)
            .bind(secure)
            .bind(&date)
            .execute(&mut conn)
            .await;
        conn.close().await?;

        let id = result
            .map_err(|e| {
                error!("Error when inserting scan of {url}: {e}");
                DatabaseError::SqlError(e)
            })?
            .last_insert_rowid();
        debug!("Recorded scan #{id} of {url} (score {score})");
        Ok(id)
    }

    /// Records a completed scan, rounding its score to a whole percentage.
    pub async fn add_report(&self, report: &SiteReport) -> Result<i64, DatabaseError> {
        let score = report.score_percent.round() as i64;
        self.add(&report.url, score, report.secure).await
    }

    /// Returns up to `limit` scans, most recent first.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<ScanRecord>, DatabaseError> {
        let mut conn = self.connect().await?;
        let result =
            sqlx::query("SELECT id, url, score, secure, date FROM scans ORDER BY id DESC LIMIT ?")
                .bind(i64::from(limit))
                .fetch_all(&mut conn)
                .await;
        conn.close().await?;

        result?
            .iter()
            .map(|row| -> Result<ScanRecord, DatabaseError> {
                Ok(ScanRecord {
                    id: row.try_get("id")?,
                    url: row.try_get("url")?,
                    score: row.try_get("score")?,
                    secure: row.try_get("secure")?,
                    date: row.try_get("date")?,
                })
            })
            .collect()
    }

    /// Deletes every scan. Returns the number of rows removed.
    pub async fn clear(&self) -> Result<u64, DatabaseError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("DELETE FROM scans").execute(&mut conn).await;
        conn.close().await?;

        let removed = result?.rows_affected();
        info!("Cleared {removed} scans from history");
        Ok(removed)
    }
}
