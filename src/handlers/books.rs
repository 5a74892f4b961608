//! Book handlers: list, read, create, update, delete.
//! Write payloads are checked against the embedded schemas before any database call.

use crate::book::{Book, BookChanges};
use crate::error::AppError;
use crate::response::{BookList, Message, OneBook, BOOK_DELETED};
use crate::schema::{self, JsonSchema};
use crate::service::BookService;
use crate::sql::filters_from_query;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Validate against `schema`, then deserialize. Out-of-range integers fail the second step.
fn validated<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
    schema: &JsonSchema,
) -> Result<T, AppError> {
    let Json(body) = body?;
    let errors = schema.validate(&body);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// GET /books
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<BookList>, AppError> {
    let filters = filters_from_query(&params)?;
    let books = BookService::find_all(&state.pool, &filters).await?;
    Ok(Json(BookList { books }))
}

/// GET /books/:id
pub async fn read(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<OneBook>, AppError> {
    let book = BookService::find_one(&state.pool, &isbn).await?;
    Ok(Json(OneBook { book }))
}

/// POST /books
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let book: Book = validated(body, schema::book_create())?;
    let book = BookService::create(&state.pool, &book).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// PUT /books/:isbn
pub async fn update(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<OneBook>, AppError> {
    let changes: BookChanges = validated(body, schema::book_update())?;
    let book = BookService::update(&state.pool, &isbn, &changes).await?;
    Ok(Json(OneBook { book }))
}

/// DELETE /books/:isbn
pub async fn delete(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Message>, AppError> {
    BookService::remove(&state.pool, &isbn).await?;
    Ok(Json(BOOK_DELETED))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}
