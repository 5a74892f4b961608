//! Bind values for `books` statements, and query-string filter parsing.

use crate::book::{Book, BookChanges};
use crate::error::AppError;
use std::collections::HashMap;

/// A value bound to a `$n` placeholder. NULL keeps the column's type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Param {
    Text(Option<String>),
    Int(Option<i32>),
}

impl Param {
    pub fn text(s: impl Into<String>) -> Self {
        Param::Text(Some(s.into()))
    }
}

/// Parameters for every column of an insert, in `Book::COLUMNS` order.
pub fn book_params(book: &Book) -> Vec<Param> {
    vec![
        Param::text(&book.isbn),
        Param::Text(book.amazon_url.clone()),
        Param::text(&book.author),
        Param::Text(book.language.clone()),
        Param::Int(book.pages),
        Param::Text(book.publisher.clone()),
        Param::text(&book.title),
        Param::Int(book.year),
    ]
}

/// Parameters for every mutable column, in `Book::COLUMNS` order without `isbn`.
pub fn changes_params(changes: &BookChanges) -> Vec<Param> {
    vec![
        Param::Text(changes.amazon_url.clone()),
        Param::text(&changes.author),
        Param::Text(changes.language.clone()),
        Param::Int(changes.pages),
        Param::Text(changes.publisher.clone()),
        Param::text(&changes.title),
        Param::Int(changes.year),
    ]
}

/// Equality filters from a query string. Unknown keys are ignored; integer columns must parse.
pub fn filters_from_query(query: &HashMap<String, String>) -> Result<Vec<(&'static str, Param)>, AppError> {
    let mut filters = Vec::new();
    for col in Book::COLUMNS {
        let Some(raw) = query.get(*col) else { continue };
        let param = if Book::INTEGER_COLUMNS.contains(col) {
            let n: i32 = raw
                .trim()
                .parse()
                .map_err(|_| AppError::BadRequest(format!("{} must be an integer", col)))?;
            Param::Int(Some(n))
        } else {
            Param::text(raw.as_str())
        };
        filters.push((*col, param));
    }
    Ok(filters)
}
