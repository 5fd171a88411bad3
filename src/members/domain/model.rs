use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::members::domain::Member;
use crate::utils::date::serializer;

// MemberEntity abstracts a patron who can borrow books, borrowed_books holds one isbn per
// copy on loan in the order they were borrowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEntity {
    pub member_id: String,
    pub version: i64,
    pub name: String,
    pub email: String,
    pub borrowed_books: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl MemberEntity {
    pub fn new(member_id: &str, name: &str, email: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            version: 0,
            name: name.to_string(),
            email: email.to_string(),
            borrowed_books: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // removes one occurrence of isbn, returns false when it was not borrowed
    pub fn release(&mut self, isbn: &str) -> bool {
        if let Some(ndx) = self.borrowed_books.iter().position(|b| b == isbn) {
            self.borrowed_books.remove(ndx);
            true
        } else {
            false
        }
    }
}

impl Identifiable for MemberEntity {
    fn id(&self) -> &str {
        self.member_id.as_str()
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn set_version(&mut self, version: i64) {
        self.version = version;
    }
}

impl Member for MemberEntity {
    fn loan_count(&self) -> usize {
        self.borrowed_books.len()
    }

    fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_books.iter().any(|b| b == isbn)
    }
}
