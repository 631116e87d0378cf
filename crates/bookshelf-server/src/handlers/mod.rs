pub mod books;
pub mod pages;

pub use books::{create_book, list_books};
pub use pages::page_handler;
