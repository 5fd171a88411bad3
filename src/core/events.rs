use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType tells subscribers whether a record or loan was added, changed or removed
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent describes one applied change to the catalog, the members or a loan.
// The payload is the DTO returned to the caller, serialized as JSON.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub branch_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn new<T: Serialize>(kind: DomainEventType, name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            branch_id: String::new(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata: HashMap::new(),
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }

    pub fn with_metadata(mut self, name: &str, value: &str) -> Self {
        self.metadata.insert(name.to_string(), value.to_string());
        self
    }

    pub fn in_branch(mut self, branch_id: &str) -> Self {
        self.branch_id = branch_id.to_string();
        self
    }

    // decodes the payload back into the DTO that was published
    pub fn payload<T: for<'de> Deserialize<'de>>(&self) -> serde_json::Result<T> {
        serde_json::from_str(self.json_data.as_str())
    }
}
