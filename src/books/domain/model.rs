use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::Genre;
use crate::utils::date::serializer;

// BookEntity abstracts a catalog title in library management system, the copies of
// the same title share the isbn and are only counted, not tracked individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub total_copies: i64,
    pub available_copies: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, genre: Genre, total_copies: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre,
            total_copies,
            available_copies: total_copies,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // case-insensitive substring match against title or author, query must already be lowercase
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.author.to_lowercase().contains(query)
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> &str {
        self.isbn.as_str()
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn set_version(&mut self, version: i64) {
        self.version = version;
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    fn borrowed_copies(&self) -> i64 {
        self.total_copies - self.available_copies
    }
}
