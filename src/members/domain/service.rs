use chrono::Utc;
use crate::core::events::{DomainEvent, DomainEventType};
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
use crate::core::repository::Repository;
use crate::library::{rejected, Library};
use crate::members::domain::{Member, MemberService};
use crate::members::domain::model::MemberEntity;
use crate::members::dto::{MemberDto, MemberUpdate};

impl MemberService for Library {
    fn add_member(&mut self, member_id: &str, name: &str, email: &str) -> LibraryResult<MemberDto> {
        let member_id = member_id.trim();
        if member_id.is_empty() {
            return Err(LibraryError::invalid_identifier("member_id cannot be empty"));
        }
        if self.find_member(member_id).is_some() {
            return rejected("add_member", LibraryError::duplicate_key(
                format!("member id {} already exists", member_id).as_str(), ReasonCode::DuplicateMemberId));
        }
        let member = MemberEntity::new(member_id, name, email);
        self.member_repository.create(&member)?;
        let dto = MemberDto::from(&member);
        self.notify(DomainEvent::new(DomainEventType::Added, "members", "members", member_id, &dto));
        Ok(dto)
    }

    fn find_member(&self, member_id: &str) -> Option<&MemberEntity> {
        self.member_repository.get(member_id)
    }

    fn update_member(&mut self, member_id: &str, update: &MemberUpdate) -> LibraryResult<MemberDto> {
        let Some(mut member) = self.find_member(member_id).cloned() else {
            return rejected("update_member", LibraryError::not_found(
                format!("member id {} not found", member_id).as_str(), ReasonCode::MemberNotFound));
        };
        if let Some(name) = &update.name {
            member.name = name.to_string();
        }
        if let Some(email) = &update.email {
            member.email = email.to_string();
        }
        member.updated_at = Utc::now().naive_utc();
        self.member_repository.update(&member)?;
        member.version += 1;
        let dto = MemberDto::from(&member);
        self.notify(DomainEvent::new(DomainEventType::Updated, "members", "members", member_id, &dto));
        Ok(dto)
    }

    fn delete_member(&mut self, member_id: &str) -> LibraryResult<()> {
        let Some(member) = self.find_member(member_id) else {
            return rejected("delete_member", LibraryError::not_found(
                format!("member id {} not found", member_id).as_str(), ReasonCode::MemberNotFound));
        };
        if member.has_loans() {
            return rejected("delete_member", LibraryError::conflict(
                format!("member {} still has borrowed books {:?}", member_id, member.borrowed_books).as_str(),
                ReasonCode::MemberHasLoans));
        }
        self.member_repository.delete(member_id)?;
        self.notify(DomainEvent::new(DomainEventType::Deleted, "members", "members", member_id, &member_id));
        Ok(())
    }

    fn member_info(&self, member_id: &str) -> Option<MemberDto> {
        self.find_member(member_id).map(MemberDto::from)
    }

    fn list_members(&self) -> Vec<MemberDto> {
        self.member_repository.query(&|_: &MemberEntity| true).iter().map(MemberDto::from).collect()
    }
}
