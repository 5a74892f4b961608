//! Fixed sample rows for a fresh database. Run through the `seed` binary, never from a request.

use crate::book::Book;
use crate::error::AppError;
use crate::service::BookService;
use sqlx::PgPool;

pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            isbn: "1111111111".into(),
            amazon_url: Some("https://www.example.com/book/1".into()),
            author: "Author One".into(),
            language: Some("English".into()),
            pages: Some(100),
            publisher: Some("Publisher One".into()),
            title: "Book One".into(),
            year: Some(2001),
        },
        Book {
            isbn: "2222222222".into(),
            amazon_url: Some("https://www.example.com/book/2".into()),
            author: "Author Two".into(),
            language: Some("French".into()),
            pages: Some(200),
            publisher: Some("Publisher Two".into()),
            title: "Book Two".into(),
            year: Some(2002),
        },
    ]
}

/// Insert the sample books in order. Stops at the first failure (e.g. already seeded).
pub async fn insert_sample_books(pool: &PgPool) -> Result<Vec<Book>, AppError> {
    let mut inserted = Vec::new();
    for book in sample_books() {
        inserted.push(BookService::create(pool, &book).await?);
    }
    Ok(inserted)
}
