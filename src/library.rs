use tracing::{error, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;
use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;

pub mod factory;

// Library owns the catalog and the member records. Every operation checks all of its
// preconditions before it mutates either collection, so a rejected operation leaves
// both untouched and a loan always changes the member and the book together.
pub struct Library {
    pub(crate) config: Configuration,
    pub(crate) book_repository: Box<dyn BookRepository>,
    pub(crate) member_repository: Box<dyn MemberRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl Library {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               member_repository: Box<dyn MemberRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
            member_repository,
            events_publisher,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    // publishes after the change is applied, a failure here cannot undo the change
    pub(crate) fn notify(&self, event: serde_json::Result<DomainEvent>) {
        match event {
            Ok(event) => {
                let event = event.in_branch(self.config.branch_id.as_str());
                if let Err(err) = self.events_publisher.publish(&event) {
                    warn!(event = event.name.as_str(), key = event.key.as_str(), "failed to publish event {}", err);
                }
            }
            Err(err) => {
                warn!("failed to build event {}", err);
            }
        }
    }

    // writes both sides of a loan, the member is put back if the book cannot be written
    pub(crate) fn save_loan(&mut self, previous: &MemberEntity, member: &MemberEntity, book: &BookEntity) -> LibraryResult<()> {
        self.member_repository.update(member)?;
        if let Err(err) = self.book_repository.update(book) {
            let mut restored = previous.clone();
            restored.version = member.version + 1;
            if let Err(undo) = self.member_repository.update(&restored) {
                error!(member_id = member.member_id.as_str(), isbn = book.isbn.as_str(),
                    "failed to restore member after {}: {}", err, undo);
            }
            return Err(err);
        }
        Ok(())
    }
}

pub(crate) fn rejected<T>(operation: &str, err: LibraryError) -> LibraryResult<T> {
    info!(operation, reason = %err.reason_code(), "{}", err);
    Err(err)
}
