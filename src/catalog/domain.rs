pub mod service;

use crate::books::dto::{BookDto, BookUpdate};
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, isbn: &str, title: &str, author: &str, genre: &str, total_copies: i64) -> LibraryResult<BookDto>;
    fn update_book(&mut self, isbn: &str, update: &BookUpdate) -> LibraryResult<BookDto>;
    fn delete_book(&mut self, isbn: &str) -> LibraryResult<()>;
    fn search_books(&self, query: &str) -> Vec<BookDto>;
    fn book_info(&self, isbn: &str) -> Option<BookDto>;
    fn list_books(&self) -> Vec<BookDto>;
}
