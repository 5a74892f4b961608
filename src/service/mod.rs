//! BookService: the books data access object, one statement per call.

mod books;
pub use books::BookService;
