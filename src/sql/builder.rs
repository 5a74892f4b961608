//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the `books` table.

use super::params::Param;
use crate::book::Book;

pub const BOOKS_TABLE: &str = "books";
const PRIMARY_KEY: &str = "isbn";

/// Quote an identifier for PostgreSQL. Callers pass fixed names only.
pub(crate) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Param>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Param) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn column_list() -> String {
    Book::COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

fn mutable_columns() -> impl Iterator<Item = &'static str> {
    Book::COLUMNS.iter().copied().filter(|c| *c != PRIMARY_KEY)
}

/// SELECT every row, narrowed by exact-match filters (ANDed), ORDER BY isbn.
pub fn select_all(filters: &[(&str, Param)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (col, val) in filters {
        if !Book::COLUMNS.iter().any(|c| c == col) {
            continue;
        }
        let n = q.push_param(val.clone());
        where_parts.push(format!("{} = ${}", quoted(col), n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        column_list(),
        quoted(BOOKS_TABLE),
        where_clause,
        quoted(PRIMARY_KEY)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_isbn(isbn: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(Param::text(isbn));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(),
        quoted(BOOKS_TABLE),
        quoted(PRIMARY_KEY)
    );
    q
}

/// INSERT all columns, RETURNING the stored row.
pub fn insert(book: &Book) -> QueryBuf {
    let mut q = QueryBuf::new();
    let placeholders: Vec<String> = super::params::book_params(book)
        .into_iter()
        .map(|p| format!("${}", q.push_param(p)))
        .collect();
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(BOOKS_TABLE),
        column_list(),
        placeholders.join(", "),
        column_list()
    );
    q
}

/// UPDATE every mutable column of one row, RETURNING it. No row back means no such isbn.
pub fn update(isbn: &str, params: Vec<Param>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let sets: Vec<String> = mutable_columns()
        .zip(params)
        .map(|(col, p)| format!("{} = ${}", quoted(col), q.push_param(p)))
        .collect();
    let id_param = q.push_param(Param::text(isbn));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(BOOKS_TABLE),
        sets.join(", "),
        quoted(PRIMARY_KEY),
        id_param,
        column_list()
    );
    q
}

/// DELETE by primary key, RETURNING the key so a miss is observable.
pub fn delete(isbn: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(Param::text(isbn));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = $1 RETURNING {}",
        quoted(BOOKS_TABLE),
        quoted(PRIMARY_KEY),
        quoted(PRIMARY_KEY)
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookChanges;
    use crate::sql::changes_params;

    const COLS: &str =
        r#""isbn", "amazon_url", "author", "language", "pages", "publisher", "title", "year""#;

    #[test]
    fn select_all_without_filters() {
        let q = select_all(&[]);
        assert_eq!(q.sql, format!(r#"SELECT {} FROM "books" ORDER BY "isbn""#, COLS));
        assert!(q.params.is_empty());
    }

    #[test]
    fn select_all_binds_filters_in_order() {
        let q = select_all(&[
            ("author", Param::text("Author One")),
            ("bogus", Param::text("x")),
            ("year", Param::Int(Some(2010))),
        ]);
        assert!(q.sql.ends_with(r#" WHERE "author" = $1 AND "year" = $2 ORDER BY "isbn""#), "{}", q.sql);
        assert_eq!(q.params, vec![Param::text("Author One"), Param::Int(Some(2010))]);
    }

    #[test]
    fn select_by_isbn_uses_single_param() {
        let q = select_by_isbn("1111");
        assert_eq!(q.sql, format!(r#"SELECT {} FROM "books" WHERE "isbn" = $1"#, COLS));
        assert_eq!(q.params, vec![Param::text("1111")]);
    }

    #[test]
    fn insert_numbers_every_placeholder() {
        let book = Book {
            isbn: "2222".into(),
            amazon_url: Some("https://www.example.com/book2".into()),
            author: "Author Two".into(),
            language: Some("English".into()),
            pages: Some(200),
            publisher: Some("Publisher Two".into()),
            title: "Book Two".into(),
            year: Some(2020),
        };
        let q = insert(&book);
        assert_eq!(
            q.sql,
            format!(
                r#"INSERT INTO "books" ({}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}"#,
                COLS, COLS
            )
        );
        assert_eq!(q.params.len(), 8);
    }

    #[test]
    fn update_sets_mutable_columns_and_keys_on_isbn() {
        let changes = BookChanges {
            amazon_url: None,
            author: "Author One Edited".into(),
            language: None,
            pages: Some(300),
            publisher: None,
            title: "Book One Edited".into(),
            year: Some(2011),
        };
        let q = update("1111", changes_params(&changes));
        assert_eq!(
            q.sql,
            format!(
                r#"UPDATE "books" SET "amazon_url" = $1, "author" = $2, "language" = $3, "pages" = $4, "publisher" = $5, "title" = $6, "year" = $7 WHERE "isbn" = $8 RETURNING {}"#,
                COLS
            )
        );
        assert_eq!(q.params.last(), Some(&Param::text("1111")));
        assert!(!q.sql.contains(r#"SET "isbn""#));
    }

    #[test]
    fn delete_returns_key() {
        let q = delete("1111");
        assert_eq!(q.sql, r#"DELETE FROM "books" WHERE "isbn" = $1 RETURNING "isbn""#);
        assert_eq!(q.params, vec![Param::text("1111")]);
    }
}
