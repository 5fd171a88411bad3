use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;
use crate::utils::memory::MemoryStore;

pub fn create_member_repository() -> Box<dyn MemberRepository> {
    Box::new(MemoryStore::<MemberEntity>::new())
}
