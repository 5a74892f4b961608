//! Route tables and application assembly.

mod books;
mod status;

pub use books::book_routes;
pub use status::status_routes;

use crate::config::Config;
use crate::handlers::not_found;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// The full application: health and readiness, `/books`, and the not-found fallback.
pub fn app(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(status_routes(state.clone()))
        .nest("/books", book_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
