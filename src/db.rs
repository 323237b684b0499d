// Database bootstrapper: replays the seed SQL script into a freshly
// created SQLite file and reports row counts for the two tables the
// workflow queries.

use anyhow::{Context, Result};
use log::debug;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, Executor, SqliteConnection};
use std::path::Path;

/// Row counts reported after a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub foods: i64,
    pub ingredients: i64,
}

/// Rebuild the database file at `db_path` from the script at `sql_path`.
///
/// Every invocation starts from a clean slate: an existing database
/// file is deleted before the import. The script runs as one
/// multi-statement batch; if it fails partway the file may be left
/// partially populated.
pub async fn bootstrap(sql_path: &Path, db_path: &Path) -> Result<BootstrapReport> {
    if !sql_path.exists() {
        anyhow::bail!("SQL file not found: {}", sql_path.display());
    }

    if db_path.exists() {
        debug!("removing existing DB file: {}", db_path.display());
        std::fs::remove_file(db_path)
            .with_context(|| format!("Failed to remove {}", db_path.display()))?;
    }

    let sql = std::fs::read_to_string(sql_path)
        .with_context(|| format!("Failed to read {}", sql_path.display()))?;

    let opts = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);
    let mut conn = SqliteConnection::connect_with(&opts)
        .await
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let report = replay(&mut conn, &sql).await;

    // Close on both the success and failure paths.
    if let Err(e) = conn.close().await {
        debug!("closing database connection failed: {e}");
    }
    report
}

async fn replay(conn: &mut SqliteConnection, sql: &str) -> Result<BootstrapReport> {
    conn.execute(sql)
        .await
        .context("Failed to execute SQL script")?;

    let foods = sqlx::query_scalar("SELECT COUNT(*) FROM foods")
        .fetch_one(&mut *conn)
        .await
        .context("Counting foods")?;
    let ingredients = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
        .fetch_one(&mut *conn)
        .await
        .context("Counting ingredients")?;

    Ok(BootstrapReport { foods, ingredients })
}
