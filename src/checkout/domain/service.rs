use chrono::Utc;
use crate::books::domain::Book;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::LoanDto;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
use crate::core::repository::Repository;
use crate::library::{rejected, Library};
use crate::members::domain::Member;

impl CheckoutService for Library {
    fn borrow_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let Some(mut member) = self.member_repository.get(member_id).cloned() else {
            return rejected("borrow_book", LibraryError::not_found(
                format!("member {} not found", member_id).as_str(), ReasonCode::MemberNotFound));
        };
        let Some(mut book) = self.book_repository.get(isbn).cloned() else {
            return rejected("borrow_book", LibraryError::not_found(
                format!("book isbn {} not found", isbn).as_str(), ReasonCode::BookNotFound));
        };
        if !book.is_available() {
            return rejected("borrow_book", LibraryError::unavailable(
                format!("no copies available for isbn {}", isbn).as_str(), ReasonCode::NoCopiesAvailable, true));
        }
        let limit = self.config.borrow_limit();
        if !member.can_borrow(limit) {
            return rejected("borrow_book", LibraryError::not_granted(
                format!("member {} already borrowed max ({})", member_id, limit).as_str(),
                ReasonCode::BorrowLimitReached));
        }

        let previous = member.clone();
        let now = Utc::now().naive_utc();
        member.borrowed_books.push(isbn.to_string());
        member.updated_at = now;
        book.available_copies -= 1;
        book.updated_at = now;
        self.save_loan(&previous, &member, &book)?;

        let loan = LoanDto::from_member_book(&member, &book);
        self.notify(DomainEvent::new(DomainEventType::Added, "book_borrowed", "checkout", member_id, &loan)
            .map(|event| event.with_metadata("isbn", isbn)));
        Ok(loan)
    }

    fn return_book(&mut self, member_id: &str, isbn: &str) -> LibraryResult<LoanDto> {
        let Some(mut member) = self.member_repository.get(member_id).cloned() else {
            return rejected("return_book", LibraryError::not_found(
                format!("member {} not found", member_id).as_str(), ReasonCode::MemberNotFound));
        };
        let Some(mut book) = self.book_repository.get(isbn).cloned() else {
            return rejected("return_book", LibraryError::not_found(
                format!("book isbn {} not recognized", isbn).as_str(), ReasonCode::BookNotFound));
        };
        let previous = member.clone();
        if !member.release(isbn) {
            return rejected("return_book", LibraryError::not_found(
                format!("member {} did not borrow isbn {}", member_id, isbn).as_str(), ReasonCode::NotBorrowed));
        }

        let now = Utc::now().naive_utc();
        member.updated_at = now;
        book.available_copies += 1;
        book.updated_at = now;
        self.save_loan(&previous, &member, &book)?;

        let loan = LoanDto::from_member_book(&member, &book);
        self.notify(DomainEvent::new(DomainEventType::Deleted, "book_returned", "checkout", member_id, &loan)
            .map(|event| event.with_metadata("isbn", isbn)));
        Ok(loan)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookUpdate;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::checkout::domain::CheckoutService;
    use crate::core::domain::{Configuration, MAX_BORROW};
    use crate::core::events::DomainEventType;
    use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
    use crate::core::repository::Repository;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::gateway::GatewayPublisherVia;
    use crate::library::factory::create_library;
    use crate::library::Library;
    use crate::members::domain::MemberService;
    use crate::members::dto::MemberUpdate;
    use crate::members::factory::create_member_repository;
    use crate::utils::memory::MemoryStore;

    fn new_library() -> Library {
        create_library(&Configuration::new("test"), GatewayPublisherVia::Memory)
    }

    #[test]
    fn test_should_borrow_and_return_single_copy() {
        let mut library = new_library();
        library.add_book("X1", "T", "A", "Fiction", 1).expect("should add book");
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");

        let loan = library.borrow_book("M1", "X1").expect("should borrow");
        assert_eq!(0, loan.available_copies);
        assert_eq!(1, loan.loan_count);
        assert_eq!(0, library.book_info("X1").expect("should find book").available_copies);

        let err = library.borrow_book("M1", "X1").expect_err("no copies left");
        assert_eq!(ReasonCode::NoCopiesAvailable, err.reason_code());
        assert!(err.retryable());

        let loan = library.return_book("M1", "X1").expect("should return");
        assert_eq!(1, loan.available_copies);
        assert_eq!(0, loan.loan_count);
        assert_eq!(1, library.book_info("X1").expect("should find book").available_copies);

        library.delete_book("X1").expect("should delete");
    }

    #[test]
    fn test_should_enforce_borrow_limit() {
        let mut library = new_library();
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        for isbn in ["978-0001", "978-0002", "978-0003", "978-0004"] {
            library.add_book(isbn, "Book", "Author", "Fiction", 5).expect("should add book");
        }
        for isbn in ["978-0001", "978-0002", "978-0003"] {
            library.borrow_book("M1", isbn).expect("should borrow");
        }

        let err = library.borrow_book("M1", "978-0004").expect_err("limit reached");
        assert!(matches!(err, LibraryError::NotGranted { reason_code: ReasonCode::BorrowLimitReached, .. }));
        let member = library.member_info("M1").expect("should find member");
        assert_eq!(3, member.borrowed_books.len());
        assert_eq!(5, library.book_info("978-0004").expect("should find book").available_copies);
    }

    #[test]
    fn test_should_check_availability_before_limit() {
        let mut library = new_library();
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        library.add_member("M2", "Other", "other@example.com").expect("should add member");
        for isbn in ["978-0001", "978-0002", "978-0003"] {
            library.add_book(isbn, "Book", "Author", "Fiction", 1).expect("should add book");
            library.borrow_book("M1", isbn).expect("should borrow");
        }
        library.add_book("978-0004", "Book", "Author", "Fiction", 1).expect("should add book");
        library.borrow_book("M2", "978-0004").expect("should borrow");

        let err = library.borrow_book("M1", "978-0004").expect_err("should reject");
        assert_eq!(ReasonCode::NoCopiesAvailable, err.reason_code());
    }

    #[test]
    fn test_should_check_member_before_book() {
        let mut library = new_library();
        let err = library.borrow_book("M999", "978-9999").expect_err("should reject");
        assert_eq!(ReasonCode::MemberNotFound, err.reason_code());
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        let err = library.borrow_book("M1", "978-9999").expect_err("should reject");
        assert_eq!(ReasonCode::BookNotFound, err.reason_code());
        assert!(library.member_info("M1").expect("should find member").borrowed_books.is_empty());
    }

    #[test]
    fn test_should_borrow_same_title_twice() {
        let mut library = new_library();
        library.add_book("978-0001", "Book", "Author", "Fiction", 2).expect("should add book");
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        library.borrow_book("M1", "978-0001").expect("should borrow");
        library.borrow_book("M1", "978-0001").expect("should borrow again");
        assert_eq!(0, library.book_info("978-0001").expect("should find book").available_copies);

        let loan = library.return_book("M1", "978-0001").expect("should return");
        assert_eq!(1, loan.loan_count);
        assert_eq!(1, loan.available_copies);
        assert_eq!(vec!["978-0001".to_string()],
                   library.member_info("M1").expect("should find member").borrowed_books);
    }

    #[test]
    fn test_should_restore_state_after_round_trip() {
        let mut library = new_library();
        library.add_book("978-0001", "Book", "Author", "Fiction", 3).expect("should add book");
        library.add_book("978-0002", "Other", "Author", "Fiction", 1).expect("should add book");
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        library.borrow_book("M1", "978-0002").expect("should borrow");

        let member_before = library.member_info("M1").expect("should find member").borrowed_books;
        let available_before = library.book_info("978-0001").expect("should find book").available_copies;
        library.borrow_book("M1", "978-0001").expect("should borrow");
        library.return_book("M1", "978-0001").expect("should return");

        assert_eq!(member_before, library.member_info("M1").expect("should find member").borrowed_books);
        assert_eq!(available_before, library.book_info("978-0001").expect("should find book").available_copies);
    }

    #[test]
    fn test_should_reject_invalid_returns() {
        let mut library = new_library();
        library.add_member("M001", "Borrower", "email.com").expect("should add member");
        library.add_book("978-0001", "Borrowed", "Author", "Fiction", 1).expect("should add book");
        library.borrow_book("M001", "978-0001").expect("should borrow");
        library.return_book("M001", "978-0001").expect("should return");

        let err = library.return_book("M001", "978-0001").expect_err("not borrowed");
        assert_eq!(ReasonCode::NotBorrowed, err.reason_code());
        let err = library.return_book("M999", "978-0001").expect_err("member not found");
        assert_eq!(ReasonCode::MemberNotFound, err.reason_code());
        let err = library.return_book("M001", "978-9999").expect_err("book not found");
        assert_eq!(ReasonCode::BookNotFound, err.reason_code());
        assert_eq!(1, library.book_info("978-0001").expect("should find book").available_copies);
    }

    #[test]
    fn test_should_keep_loans_when_copies_change() {
        let mut library = new_library();
        library.add_book("978-0001", "Book", "Author", "Fiction", 2).expect("should add book");
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        library.borrow_book("M1", "978-0001").expect("should borrow");
        library.update_book("978-0001", &BookUpdate::default().total_copies(1)).expect("should shrink");
        let err = library.borrow_book("M1", "978-0001").expect_err("no copies left");
        assert_eq!(ReasonCode::NoCopiesAvailable, err.reason_code());

        let loan = library.return_book("M1", "978-0001").expect("should return");
        assert_eq!(1, loan.available_copies);
    }

    #[test]
    fn test_should_apply_configured_limit() {
        let mut config = Configuration::new("test");
        config.max_borrow = 1;
        let mut library = create_library(&config, GatewayPublisherVia::Memory);
        library.add_book("978-0001", "Book", "Author", "Fiction", 2).expect("should add book");
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        library.borrow_book("M1", "978-0001").expect("should borrow");
        let err = library.borrow_book("M1", "978-0001").expect_err("limit reached");
        assert_eq!(ReasonCode::BorrowLimitReached, err.reason_code());
    }

    #[test]
    fn test_should_not_raise_limit_above_max_borrow() {
        let mut config = Configuration::new("test");
        config.max_borrow = 5;
        let mut library = create_library(&config, GatewayPublisherVia::Memory);
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        for isbn in ["978-0001", "978-0002", "978-0003", "978-0004", "978-0005"] {
            library.add_book(isbn, "Book", "Author", "Fiction", 1).expect("should add book");
        }
        for isbn in ["978-0001", "978-0002", "978-0003"] {
            library.borrow_book("M1", isbn).expect("should borrow");
        }
        let err = library.borrow_book("M1", "978-0004").expect_err("limit reached");
        assert_eq!(ReasonCode::BorrowLimitReached, err.reason_code());
        assert_eq!(MAX_BORROW, library.member_info("M1").expect("should find member").borrowed_books.len());
        assert_eq!(1, library.book_info("978-0004").expect("should find book").available_copies);
    }

    // accepts creates and reads, refuses every update
    struct ReadOnlyBooks {
        store: MemoryStore<BookEntity>,
    }

    impl Repository<BookEntity> for ReadOnlyBooks {
        fn create(&mut self, entity: &BookEntity) -> LibraryResult<usize> {
            self.store.create(entity)
        }

        fn update(&mut self, _entity: &BookEntity) -> LibraryResult<usize> {
            Err(LibraryError::runtime("book storage is read only"))
        }

        fn get(&self, id: &str) -> Option<&BookEntity> {
            self.store.get(id)
        }

        fn delete(&mut self, id: &str) -> LibraryResult<usize> {
            self.store.delete(id)
        }

        fn query(&self, predicate: &dyn Fn(&BookEntity) -> bool) -> Vec<BookEntity> {
            self.store.query(predicate)
        }
    }

    impl BookRepository for ReadOnlyBooks {}

    #[test]
    fn test_should_leave_member_untouched_when_book_write_fails() {
        let books = ReadOnlyBooks { store: MemoryStore::new() };
        let mut library = Library::new(&Configuration::new("test"), Box::new(books),
                                       create_member_repository(), Box::new(MemoryPublisher::new()));
        library.add_book("X1", "T", "A", "Fiction", 1).expect("should add book");
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");

        let err = library.borrow_book("M1", "X1").expect_err("book write fails");
        assert!(err.is_fault());
        assert!(library.member_info("M1").expect("should find member").borrowed_books.is_empty());
        assert_eq!(1, library.book_info("X1").expect("should find book").available_copies);

        // the restored member still accepts later writes
        library.update_member("M1", &MemberUpdate::default().name("Renamed")).expect("should update member");
    }

    #[test]
    fn test_should_publish_checkout_events() {
        let publisher = MemoryPublisher::new();
        let mut library = Library::new(&Configuration::new("test"), create_book_repository(),
                                       create_member_repository(), Box::new(publisher.clone()));
        library.add_book("978-0001", "Book", "Author", "Fiction", 1).expect("should add book");
        library.add_member("M1", "Reader", "reader@example.com").expect("should add member");
        library.borrow_book("M1", "978-0001").expect("should borrow");
        let _ = library.borrow_book("M1", "978-0001");
        library.return_book("M1", "978-0001").expect("should return");

        let events: Vec<_> = publisher.events().expect("should get events").into_iter()
            .filter(|e| e.group == "checkout").collect();
        assert_eq!(2, events.len());
        assert_eq!(("book_borrowed", DomainEventType::Added), (events[0].name.as_str(), events[0].kind));
        assert_eq!(("book_returned", DomainEventType::Deleted), (events[1].name.as_str(), events[1].kind));
        assert_eq!(Some(&"978-0001".to_string()), events[1].metadata.get("isbn"));
    }
}
