pub mod service;

use crate::checkout::dto::LoanDto;
use crate::core::library::LibraryResult;

pub trait CheckoutService {
    fn borrow_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto>;
    fn return_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto>;
}
