//! In-memory member storage

use crate::error::{MembersError, MembersResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A registered member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Generated member id
    pub id: String,
    /// Member name, unique within the registry
    pub name: String,
    /// Free-form profile text
    pub info: Option<String>,
    /// When the member was registered
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl Member {
    /// Create a new member record with a generated id
    pub fn new(name: String, info: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            info,
            joined_at: chrono::Utc::now(),
        }
    }
}

/// In-memory member store
///
/// Records are held in process memory only; restarting the server empties
/// the registry. Names are kept unique through a secondary index.
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    members: Arc<RwLock<HashMap<String, Member>>>,
    ids_by_name: Arc<RwLock<HashMap<String, String>>>, // name -> member id
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new member, rejecting duplicate names
    pub fn insert(&self, member: Member) -> MembersResult<()> {
        let mut members = self.members.write().unwrap();
        let mut ids_by_name = self.ids_by_name.write().unwrap();

        if ids_by_name.contains_key(&member.name) {
            return Err(MembersError::DuplicateName(member.name));
        }

        ids_by_name.insert(member.name.clone(), member.id.clone());
        members.insert(member.id.clone(), member);
        Ok(())
    }

    /// Look up a member by id
    pub fn get(&self, id: &str) -> Option<Member> {
        self.members.read().unwrap().get(id).cloned()
    }

    /// Look up a member by name
    pub fn get_by_name(&self, name: &str) -> Option<Member> {
        // The name-index guard must be released before locking `members`:
        // `insert` takes the locks in the opposite order, and holding both
        // here can deadlock against it.
        let id = self.ids_by_name.read().unwrap().get(name).cloned()?;
        self.members.read().unwrap().get(&id).cloned()
    }

    /// Number of registered members
    pub fn len(&self) -> usize {
        self.members.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
