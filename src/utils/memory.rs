use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, ReasonCode};
use crate::core::repository::Repository;

// MemoryStore keeps records in insertion order, lookups are linear scans by id.
#[derive(Debug, Clone)]
pub struct MemoryStore<Entity> {
    records: Vec<Entity>,
}

impl<Entity> MemoryStore<Entity> {
    pub fn new() -> Self {
        Self {
            records: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<Entity> Default for MemoryStore<Entity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Entity: Identifiable> MemoryStore<Entity> {
    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl<Entity: Identifiable + Clone> Repository<Entity> for MemoryStore<Entity> {
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize> {
        if self.position(entity.id()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("record {} already exists", entity.id()).as_str(), ReasonCode::DuplicateRecord));
        }
        self.records.push(entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &Entity) -> LibraryResult<usize> {
        let id = entity.id();
        let ndx = self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("record {} not found", id).as_str(), ReasonCode::RecordNotFound))?;
        let stored = &mut self.records[ndx];
        if stored.version() != entity.version() {
            return Err(LibraryError::conflict(
                format!("record {} version {} does not match {}", id, entity.version(), stored.version()).as_str(),
                ReasonCode::StaleVersion));
        }
        let mut updated = entity.clone();
        updated.set_version(entity.version() + 1);
        *stored = updated;
        Ok(1)
    }

    fn get(&self, id: &str) -> Option<&Entity> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<usize> {
        let ndx = self.position(id).ok_or_else(|| LibraryError::not_found(
            format!("record {} not found", id).as_str(), ReasonCode::RecordNotFound))?;
        self.records.remove(ndx);
        Ok(1)
    }

    fn query(&self, predicate: &dyn Fn(&Entity) -> bool) -> Vec<Entity> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }
}
