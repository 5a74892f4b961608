//! Database bootstrap and the `books` table checks shared by startup and `/ready`.

use crate::config::Config;
use crate::error::AppError;
use crate::sql::{quoted, BOOKS_TABLE};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Maintenance database used to issue CREATE DATABASE.
const MAINTENANCE_DB: &str = "postgres";

/// Idempotent DDL for the books table.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            isbn TEXT PRIMARY KEY,
            amazon_url TEXT,
            author TEXT NOT NULL,
            language TEXT,
            pages INTEGER,
            publisher TEXT,
            title TEXT NOT NULL,
            year INTEGER
        )
        "#,
        quoted(BOOKS_TABLE)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Whether `books` exists in the connection's current schema.
pub async fn books_table_exists(pool: &PgPool) -> Result<bool, AppError> {
    let found: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name = $1)",
    )
    .bind(BOOKS_TABLE)
    .fetch_one(pool)
    .await?;
    Ok(found)
}

/// Open the pool described by `config`.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Split a database URL into options for the maintenance database and the
/// name of the target database. `None` when the URL already targets the maintenance one.
fn maintenance_target(database_url: &str) -> Result<(PgConnectOptions, Option<String>), AppError> {
    let target = PgConnectOptions::from_str(database_url)?;
    let name = target
        .get_database()
        .filter(|db| !db.is_empty() && *db != MAINTENANCE_DB)
        .map(str::to_string);
    Ok((target.database(MAINTENANCE_DB), name))
}

/// Create the database named in `database_url` when it does not exist yet.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (maintenance, Some(name)) = maintenance_target(database_url)? else {
        return Ok(());
    };
    let mut conn = maintenance.connect().await?;
    let present: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&name)
            .fetch_one(&mut conn)
            .await?;
    if !present {
        tracing::info!(database = %name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}
