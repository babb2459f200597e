//! Member registration and lookup service

use crate::error::{MembersError, MembersResult};
use crate::store::{Member, MemberStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Sign-up input for a new member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub info: Option<String>,
}

/// Service wrapping the member store
#[derive(Debug, Clone, Default)]
pub struct MemberService {
    store: MemberStore,
}

impl MemberService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MemberStore) -> Self {
        Self { store }
    }

    /// Register a new member and return the generated id
    pub fn sign_up(&self, new_member: NewMember) -> MembersResult<String> {
        debug!("Starting member sign-up for: {}", new_member.name);

        if new_member.name.trim().is_empty() {
            debug!("Sign-up failed: empty member name");
            return Err(MembersError::EmptyName);
        }

        let member = Member::new(new_member.name, new_member.info);
        let id = member.id.clone();
        let name = member.name.clone();
        self.store.insert(member)?;

        info!("Registered new member: {} ({})", name, id);
        Ok(id)
    }

    /// Look up a member by id
    pub fn member(&self, id: &str) -> Option<Member> {
        self.store.get(id)
    }

    /// Look up a member by name
    pub fn member_by_name(&self, name: &str) -> Option<Member> {
        self.store.get_by_name(name)
    }

    /// Number of registered members
    pub fn count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MemberService {
        MemberService::new()
    }

    #[test]
    fn test_sign_up_returns_id() {
        let service = service();
        let id = service
            .sign_up(NewMember {
                name: "kim".to_string(),
                info: Some("hello".to_string()),
            })
            .unwrap();

        let member = service.member(&id).unwrap();
        assert_eq!(member.id, id);
        assert_eq!(member.name, "kim");
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_sign_up_rejects_empty_name() {
        let service = service();
        let result = service.sign_up(NewMember {
            name: "   ".to_string(),
            info: None,
        });
        assert_eq!(result, Err(MembersError::EmptyName));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_sign_up_rejects_duplicate_name() {
        let service = service();
        service
            .sign_up(NewMember {
                name: "lee".to_string(),
                info: None,
            })
            .unwrap();

        let result = service.sign_up(NewMember {
            name: "lee".to_string(),
            info: Some("second".to_string()),
        });
        assert_eq!(result, Err(MembersError::DuplicateName("lee".to_string())));
    }

    #[test]
    fn test_unknown_member_is_none() {
        let service = service();
        assert!(service.member("missing").is_none());
        assert!(service.member_by_name("missing").is_none());
    }
}
