pub mod model;
pub mod service;

use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::{MemberDto, MemberUpdate};

pub trait MemberService {
    fn add_member(&mut self, member_id: &str, name: &str, email: &str) -> LibraryResult<MemberDto>;
    fn find_member(&self, member_id: &str) -> Option<&MemberEntity>;
    fn update_member(&mut self, member_id: &str, update: &MemberUpdate) -> LibraryResult<MemberDto>;
    fn delete_member(&mut self, member_id: &str) -> LibraryResult<()>;
    fn member_info(&self, member_id: &str) -> Option<MemberDto>;
    fn list_members(&self) -> Vec<MemberDto>;
}

pub trait Member: Identifiable {
    fn loan_count(&self) -> usize;
    fn has_borrowed(&self, isbn: &str) -> bool;
    fn has_loans(&self) -> bool {
        self.loan_count() > 0
    }
    fn can_borrow(&self, max_borrow: usize) -> bool {
        self.loan_count() < max_borrow
    }
}
