use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::Genre;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service, it is always a copy
// and changing it never touches the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
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

// BookUpdate carries the fields to overwrite, None leaves a field untouched.
// Genre stays a string so an unknown genre can be rejected by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub total_copies: Option<i64>,
}

impl BookUpdate {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn total_copies(mut self, total_copies: i64) -> Self {
        self.total_copies = Some(total_copies);
        self
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre,
            total_copies: other.total_copies,
            available_copies: other.available_copies,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
