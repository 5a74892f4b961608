//! The Book record as stored in `books` and rendered over HTTP.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of `books`. Optional columns are NULL when the client omitted them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: Option<String>,
    pub author: String,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub pages: Option<i32>,
    pub publisher: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub year: Option<i32>,
}

/// Replacement values for every mutable column. `isbn` is never part of an update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookChanges {
    pub amazon_url: Option<String>,
    pub author: String,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    pub pages: Option<i32>,
    pub publisher: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub year: Option<i32>,
}

impl Book {
    /// Columns in table order; the only identifiers the SQL builder emits.
    pub const COLUMNS: &'static [&'static str] = &[
        "isbn",
        "amazon_url",
        "author",
        "language",
        "pages",
        "publisher",
        "title",
        "year",
    ];

    /// Columns holding INTEGER values.
    pub const INTEGER_COLUMNS: &'static [&'static str] = &["pages", "year"];
}

/// INTEGER columns accept any JSON number without a fraction (`100` or `100.0`) that fits in `i32`.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(n) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let whole = match n.as_i64() {
        Some(i) => Some(i),
        None => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
            .map(|f| f as i64),
    };
    whole
        .and_then(|i| i32::try_from(i).ok())
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("{} is not a 32-bit integer", n)))
}
