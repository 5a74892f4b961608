//! Server: loads config, ensures the database and `books` table exist, serves the API.

use bookstore_api::{app, connect, ensure_books_table, ensure_database_exists, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bookstore_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    ensure_books_table(&pool).await?;

    let state = AppState { pool };
    let router = app(state, &config);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
