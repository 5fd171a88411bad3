use serde::{Deserialize, Serialize};

// maximum number of books a member may hold at the same time
pub const MAX_BORROW: usize = 3;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> &str;
    fn version(&self) -> i64;
    fn set_version(&mut self, version: i64);
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_borrow: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_borrow: MAX_BORROW,
        }
    }

    // configured limit, never above MAX_BORROW
    pub fn borrow_limit(&self) -> usize {
        self.max_borrow.min(MAX_BORROW)
    }
}
