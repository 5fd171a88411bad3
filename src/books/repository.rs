use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryStore;

pub trait BookRepository: Repository<BookEntity> {
    // books whose title or author contains the trimmed query, ignoring case
    fn search(&self, query: &str) -> Vec<BookEntity> {
        let query = query.trim().to_lowercase();
        self.query(&|b: &BookEntity| b.matches(query.as_str()))
    }
}

impl BookRepository for MemoryStore<BookEntity> {}
