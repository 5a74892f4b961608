//! Book CRUD execution against PostgreSQL.

use crate::book::{Book, BookChanges};
use crate::error::AppError;
use crate::sql::{self, changes_params, Param, QueryBuf};
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

pub struct BookService;

impl BookService {
    /// Every book, narrowed by exact-match filters.
    pub async fn find_all(pool: &PgPool, filters: &[(&str, Param)]) -> Result<Vec<Book>, AppError> {
        let q = sql::select_all(filters);
        let rows = Self::prepare::<Book>(&q).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find_one(pool: &PgPool, isbn: &str) -> Result<Book, AppError> {
        let q = sql::select_by_isbn(isbn);
        Self::prepare::<Book>(&q)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found(isbn))
    }

    /// Insert one book. A duplicate isbn surfaces as `AppError::Conflict`.
    pub async fn create(pool: &PgPool, book: &Book) -> Result<Book, AppError> {
        let q = sql::insert(book);
        let row = Self::prepare::<Book>(&q).fetch_one(pool).await?;
        tracing::info!(isbn = %row.isbn, "book created");
        Ok(row)
    }

    /// Replace every mutable column of the book keyed by `isbn`.
    pub async fn update(pool: &PgPool, isbn: &str, changes: &BookChanges) -> Result<Book, AppError> {
        let q = sql::update(isbn, changes_params(changes));
        Self::prepare::<Book>(&q)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found(isbn))
    }

    pub async fn remove(pool: &PgPool, isbn: &str) -> Result<(), AppError> {
        let q = sql::delete(isbn);
        Self::prepare::<(String,)>(&q)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| not_found(isbn))?;
        tracing::info!(isbn = %isbn, "book deleted");
        Ok(())
    }

    fn prepare<'q, O>(q: &'q QueryBuf) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>,
    {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, O>(&q.sql);
        for p in &q.params {
            query = match p {
                Param::Text(v) => query.bind(v.clone()),
                Param::Int(v) => query.bind(*v),
            };
        }
        query
    }
}

fn not_found(isbn: &str) -> AppError {
    AppError::NotFound(format!("There is no book with an isbn '{}'", isbn))
}
