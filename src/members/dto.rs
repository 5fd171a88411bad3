use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::members::domain::model::MemberEntity;
use crate::utils::date::serializer;

// MemberDto is a snapshot of a member for callers outside the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl MemberUpdate {
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            member_id: other.member_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            email: other.email.to_string(),
            borrowed_books: other.borrowed_books.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
