mod category_repo;
mod transaction_repo;

use crate::category_repo::CategoryRepo;
use crate::transaction_repo::TransactionRepo;
use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{query, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

const CREATE_TRANSACTIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        type        TEXT,
        category    TEXT,
        amount      REAL,
        date        TEXT,
        description TEXT
    )
"#;

const CREATE_CATEGORIES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE,
        type TEXT
    )
"#;

pub struct SQLxRepo {
    pool: Pool<Sqlite>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Sqlite>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Opens (creating if needed) the database at `database_url` and makes sure both tables exist.
///
/// Both repos share the same pool.
pub async fn create_repos(
    database_url: &str,
    max_pool_size: u32,
) -> Result<(Arc<dyn TransactionRepo>, Arc<dyn CategoryRepo>), anyhow::Error> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .create_if_missing(true);

    // an in-memory database lives only as long as its connection
    let pool = SqlitePoolOptions::new()
        .max_connections(max_pool_size)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .with_context(|| format!("Unable to open database {}", database_url))?;

    query(CREATE_TRANSACTIONS_TABLE)
        .execute(&pool)
        .await
        .context("Unable to create transactions table")?;
    query(CREATE_CATEGORIES_TABLE)
        .execute(&pool)
        .await
        .context("Unable to create categories table")?;
    info!(database_url, "Database ready");

    let repo = Arc::new(SQLxRepo::new(pool));
    Ok((repo.clone(), repo))
}
