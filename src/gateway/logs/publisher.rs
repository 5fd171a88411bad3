use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher writes every domain event to the tracing subscriber
#[derive(Debug, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        info!(event_id = event.event_id.as_str(),
            branch = event.branch_id.as_str(),
            group = event.group.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            data = event.json_data.as_str(),
            "{}", event.name);
        Ok(())
    }
}
