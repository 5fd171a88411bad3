//! In-memory library circulation: a catalog of books, the members who borrow them
//! and the borrow/return transactions that keep both sides consistent.

pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod library;
pub mod members;
pub mod utils;

pub use crate::books::dto::{BookDto, BookUpdate};
pub use crate::catalog::domain::CatalogService;
pub use crate::checkout::domain::CheckoutService;
pub use crate::checkout::dto::LoanDto;
pub use crate::core::domain::{Configuration, MAX_BORROW};
pub use crate::core::library::{Genre, LibraryError, LibraryResult, ReasonCode};
pub use crate::library::factory::create_library;
pub use crate::library::Library;
pub use crate::members::domain::MemberService;
pub use crate::members::dto::{MemberDto, MemberUpdate};
