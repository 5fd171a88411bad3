use std::str::FromStr;
use chrono::Utc;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookUpdate};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{Genre, LibraryError, LibraryResult, ReasonCode};
use crate::core::repository::Repository;
use crate::library::{rejected, Library};
use crate::members::repository::MemberRepository;

impl CatalogService for Library {
    fn add_book(&mut self, isbn: &str, title: &str, author: &str, genre: &str, total_copies: i64) -> LibraryResult<BookDto> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Err(LibraryError::invalid_identifier("isbn cannot be empty"));
        }
        if self.book_repository.get(isbn).is_some() {
            return rejected("add_book", LibraryError::duplicate_key(
                format!("isbn {} already exists", isbn).as_str(), ReasonCode::DuplicateIsbn));
        }
        let genre = match Genre::from_str(genre) {
            Ok(genre) => genre,
            Err(err) => return rejected("add_book", err),
        };
        if total_copies < 1 {
            return rejected("add_book", LibraryError::validation(
                format!("total_copies must be at least 1, got {}", total_copies).as_str(), ReasonCode::InvalidCopies));
        }
        let book = BookEntity::new(isbn, title, author, genre, total_copies);
        self.book_repository.create(&book)?;
        let dto = BookDto::from(&book);
        self.notify(DomainEvent::new(DomainEventType::Added, "books", "catalog", isbn, &dto));
        Ok(dto)
    }

    fn update_book(&mut self, isbn: &str, update: &BookUpdate) -> LibraryResult<BookDto> {
        let Some(mut book) = self.book_repository.get(isbn).cloned() else {
            return rejected("update_book", LibraryError::not_found(
                format!("isbn {} not found", isbn).as_str(), ReasonCode::BookNotFound));
        };
        let genre = match update.genre.as_deref().map(Genre::from_str).transpose() {
            Ok(genre) => genre,
            Err(err) => return rejected("update_book", err),
        };
        if let Some(total_copies) = update.total_copies {
            let borrowed = book.borrowed_copies();
            if total_copies < borrowed {
                return rejected("update_book", LibraryError::validation(
                    format!("cannot set total_copies of {} to {}, {} copies are borrowed",
                            isbn, total_copies, borrowed).as_str(), ReasonCode::CopiesBelowBorrowed));
            }
            // shifting both counts by the same delta keeps the number of loans unchanged
            book.available_copies += total_copies - book.total_copies;
            book.total_copies = total_copies;
        }
        if let Some(title) = &update.title {
            book.title = title.to_string();
        }
        if let Some(author) = &update.author {
            book.author = author.to_string();
        }
        if let Some(genre) = genre {
            book.genre = genre;
        }
        book.updated_at = Utc::now().naive_utc();
        self.book_repository.update(&book)?;
        book.version += 1;
        let dto = BookDto::from(&book);
        self.notify(DomainEvent::new(DomainEventType::Updated, "books", "catalog", isbn, &dto));
        Ok(dto)
    }

    fn delete_book(&mut self, isbn: &str) -> LibraryResult<()> {
        let Some(book) = self.book_repository.get(isbn) else {
            return rejected("delete_book", LibraryError::not_found(
                format!("isbn {} not found", isbn).as_str(), ReasonCode::BookNotFound));
        };
        if book.is_on_loan() {
            let holders: Vec<String> = self.member_repository.find_by_loan(isbn)
                .into_iter().map(|m| m.member_id).collect();
            return rejected("delete_book", LibraryError::conflict(
                format!("cannot delete {} while {} copies are borrowed by {:?}",
                        isbn, book.borrowed_copies(), holders).as_str(), ReasonCode::CopiesOnLoan));
        }
        self.book_repository.delete(isbn)?;
        self.notify(DomainEvent::new(DomainEventType::Deleted, "books", "catalog", isbn, &isbn));
        Ok(())
    }

    fn search_books(&self, query: &str) -> Vec<BookDto> {
        self.book_repository.search(query).iter().map(BookDto::from).collect()
    }

    fn book_info(&self, isbn: &str) -> Option<BookDto> {
        self.book_repository.get(isbn).map(BookDto::from)
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.book_repository.query(&|_: &BookEntity| true).iter().map(BookDto::from).collect()
    }
}
