//! Success bodies for the books routes.

use crate::book::Book;
use serde::Serialize;

#[derive(Serialize)]
pub struct BookList {
    pub books: Vec<Book>,
}

#[derive(Serialize)]
pub struct OneBook {
    pub book: Book,
}

#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub const BOOK_DELETED: Message = Message {
    message: "Book deleted",
};
