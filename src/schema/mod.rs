//! Request payload schemas for book writes, and the validator that checks them.

mod validator;

pub use validator::{JsonSchema, JsonType, PropertySchema};

use std::sync::OnceLock;

const BOOK_CREATE: &str = include_str!("book_create.json");
const BOOK_UPDATE: &str = include_str!("book_update.json");

/// Schema for `POST /books`.
pub fn book_create() -> &'static JsonSchema {
    static SCHEMA: OnceLock<JsonSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| JsonSchema::parse(BOOK_CREATE).expect("book_create.json is a valid schema"))
}

/// Schema for `PUT /books/:isbn`.
pub fn book_update() -> &'static JsonSchema {
    static SCHEMA: OnceLock<JsonSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| JsonSchema::parse(BOOK_UPDATE).expect("book_update.json is a valid schema"))
}
