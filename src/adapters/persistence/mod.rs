use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{user::User, waitlist_entry::WaitlistEntry};

pub mod user;
pub mod waitlist;

/// Process-local store backing every repository trait.
///
/// Nothing is persisted; all records live until the process exits.
#[derive(Default)]
pub struct MemoryPersistence {
    waitlist: RwLock<WaitlistTable>,
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

struct WaitlistTable {
    entries: BTreeMap<u64, WaitlistEntry>,
    next_id: u64,
}

impl Default for WaitlistTable {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }
}
