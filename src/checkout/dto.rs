use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::members::domain::Member;
use crate::members::domain::model::MemberEntity;

// LoanDto describes both sides of a loan right after it was borrowed or returned
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub member_id: String,
    pub isbn: String,
    pub title: String,
    pub loan_count: usize,
    pub available_copies: i64,
}

impl LoanDto {
    pub fn from_member_book(member: &MemberEntity, book: &BookEntity) -> Self {
        Self {
            member_id: member.member_id.to_string(),
            isbn: book.isbn.to_string(),
            title: book.title.to_string(),
            loan_count: member.loan_count(),
            available_copies: book.available_copies,
        }
    }
}
