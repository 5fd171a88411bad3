use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::utils::memory::MemoryStore;

pub fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemoryStore::<BookEntity>::new())
}
