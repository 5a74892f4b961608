//! Seed: inserts the sample books into the configured database.

use bookstore_api::seed::insert_sample_books;
use bookstore_api::{connect, ensure_books_table, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookstore_api=info")),
        )
        .init();

    let config = Config::from_env();
    let pool = connect(&config).await?;
    tracing::info!("connected");
    ensure_books_table(&pool).await?;

    match insert_sample_books(&pool).await {
        Ok(books) => tracing::info!(count = books.len(), "sample data inserted"),
        Err(e) => tracing::error!(error = %e, "inserting sample data failed"),
    }
    pool.close().await;
    Ok(())
}
