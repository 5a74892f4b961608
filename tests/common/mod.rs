#![allow(dead_code)]

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use bookstore_api::config::DEFAULT_TEST_DATABASE_URL;
use bookstore_api::{app, ensure_books_table, ensure_database_exists, AppState, Config};
use serde_json::{json, Value};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tokio::net::TcpListener;

pub const FIXTURE_ISBN: &str = "1111";

/// The row every test starts with.
pub fn fixture_book() -> Value {
    json!({
        "isbn": "1111",
        "amazon_url": "https://www.example.com/book1",
        "author": "Author One",
        "language": "English",
        "pages": 100,
        "publisher": "Publisher One",
        "title": "Book One",
        "year": 2010
    })
}

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Drop the per-test schema.
    pub async fn cleanup(self) -> Result<()> {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA IF EXISTS \"{}\" CASCADE", self.schema))
            .execute(&self.admin)
            .await?;
        self.admin.close().await;
        Ok(())
    }
}

fn database_url() -> String {
    dotenvy::dotenv().ok();
    std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| DEFAULT_TEST_DATABASE_URL.into())
}

/// Serve the app on an ephemeral port over an isolated schema holding the fixture row.
/// Returns `None` when no database is reachable so the caller can skip.
pub async fn spawn_app() -> Result<Option<TestApp>> {
    let url = database_url();
    if let Err(e) = ensure_database_exists(&url).await {
        eprintln!("skipping: database unavailable at {}: {}", url, e);
        return Ok(None);
    }
    let admin = match PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("skipping: database unavailable at {}: {}", url, e);
            return Ok(None);
        }
    };

    let schema = format!("test_{}", uuid::Uuid::new_v4().simple());
    sqlx::query(&format!("CREATE SCHEMA \"{}\"", schema))
        .execute(&admin)
        .await?;

    let opts = PgConnectOptions::from_str(&url)?.options([("search_path", schema.as_str())]);
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .context("connecting with test search_path")?;
    ensure_books_table(&pool).await?;
    insert_fixture(&pool).await?;

    let mut vars = std::collections::HashMap::new();
    vars.insert("BOOKSTORE_ENV".to_string(), "test".to_string());
    let config = Config::from_vars(&vars);
    let router = app(AppState { pool: pool.clone() }, &config);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(Some(TestApp {
        base_url,
        client: reqwest::Client::new(),
        pool,
        admin,
        schema,
    }))
}

async fn insert_fixture(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
         VALUES ('1111', 'https://www.example.com/book1', 'Author One', 'English', 100,
                 'Publisher One', 'Book One', 2010)",
    )
    .execute(pool)
    .await?;
    Ok(())
}
