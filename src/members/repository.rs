use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;
use crate::utils::memory::MemoryStore;

pub trait MemberRepository: Repository<MemberEntity> {
    // members currently holding a copy of isbn
    fn find_by_loan(&self, isbn: &str) -> Vec<MemberEntity> {
        self.query(&|m: &MemberEntity| m.borrowed_books.iter().any(|b| b == isbn))
    }
}

impl MemberRepository for MemoryStore<MemberEntity> {}
