//! Liveness and readiness of the bookstore: `/ready` answers only once the `books` table is in place.

use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    books_table: &'static str,
}

async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let (code, status, books_table) = match store::books_table_exists(&state.pool).await {
        Ok(true) => (StatusCode::OK, "ok", "present"),
        Ok(false) => (StatusCode::SERVICE_UNAVAILABLE, "degraded", "missing"),
        Err(e) => {
            tracing::warn!(error = %e, "books table check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unreachable")
        }
    };
    (code, Json(Readiness { status, books_table }))
}

/// GET /health, GET /ready.
pub fn status_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
