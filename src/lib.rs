//! Bookstore API: CRUD over a PostgreSQL `books` table with schema-validated writes.

pub mod book;
pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use book::{Book, BookChanges};
pub use config::Config;
pub use error::AppError;
pub use routes::{app, book_routes, status_routes};
pub use service::BookService;
pub use state::AppState;
pub use store::{books_table_exists, connect, ensure_books_table, ensure_database_exists};
