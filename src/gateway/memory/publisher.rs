use std::sync::{Arc, Mutex};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events, clones share the same event list
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        let events = self.events.lock().map_err(|err| LibraryError::runtime(
            format!("events lock poisoned {:?}", err).as_str()))?;
        Ok(events.clone())
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let mut events = self.events.lock().map_err(|err| LibraryError::runtime(
            format!("events lock poisoned {:?}", err).as_str()))?;
        events.push(event.clone());
        Ok(())
    }
}
