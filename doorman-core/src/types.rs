//! Core data types: roles, principals, and route requirements

use crate::error::{AccessError, AccessResult};
use serde::{Deserialize, Serialize};

/// Membership tier assigned to a resolved principal
///
/// The three roles are unranked siblings: no role implies another, and the
/// gate in [`RoleRequirement::check`] compares them by exact equality only.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Staff tier
    Manager,
    /// Premium membership tier
    VipMember,
    /// Base membership tier, also the fallback classification
    Member,
}

impl Role {
    /// Classify an identifier by its first character.
    ///
    /// `'a'` maps to `Manager` and `'b'` to `VipMember`, case-sensitively;
    /// every other first character (uppercase, digits, punctuation,
    /// non-ASCII) falls through to `Member` without error. Callers are
    /// expected to hand in a non-empty identifier; see
    /// [`Principal::resolve`] for the boundary that enforces it.
    pub fn from_identifier(identifier: &str) -> Role {
        match identifier.chars().next() {
            Some('a') => Role::Manager,
            Some('b') => Role::VipMember,
            _ => Role::Member,
        }
    }

    /// All roles, in declaration order
    pub const fn all() -> [Role; 3] {
        [Role::Manager, Role::VipMember, Role::Member]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Manager => write!(f, "manager"),
            Role::VipMember => write!(f, "vip_member"),
            Role::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "vip_member" | "vip" => Ok(Role::VipMember),
            "member" => Ok(Role::Member),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// The resolved actor for one request
///
/// A `Principal` is constructed exactly once per request by
/// [`Principal::resolve`], is immutable afterwards, and is dropped with the
/// request. It is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Raw identifier the role was derived from
    pub identifier: String,
    /// Resolved membership tier
    pub role: Role,
}

impl Principal {
    /// Resolve a principal from the identifier supplied with the request.
    ///
    /// Resolution is a pure function of its input: the same identifier
    /// always yields an equal principal. An absent identifier fails with
    /// [`AccessError::MissingIdentifier`]; a present-but-empty identifier
    /// has no first character to classify and fails the same way.
    pub fn resolve(identifier: Option<&str>) -> AccessResult<Principal> {
        match identifier {
            Some(id) if !id.is_empty() => Ok(Principal {
                identifier: id.to_string(),
                role: Role::from_identifier(id),
            }),
            _ => Err(AccessError::MissingIdentifier),
        }
    }

    /// Whether this principal's role equals the required role.
    pub fn satisfies(&self, required: Role) -> bool {
        self.role == required
    }
}

/// The role a route demands of every principal it admits
///
/// Requirements are attached to a route when it is registered and never
/// change per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// Role a principal must hold to pass the gate
    pub required: Role,
}

impl RoleRequirement {
    pub const fn new(required: Role) -> Self {
        Self { required }
    }

    /// Gate decision for one request: allow iff the principal's role equals
    /// the required role, deny otherwise.
    ///
    /// The decision is computed fresh from the two inputs on every call;
    /// nothing is cached and nothing is retried.
    pub fn check(&self, principal: &Principal) -> AccessResult<()> {
        if principal.satisfies(self.required) {
            Ok(())
        } else {
            Err(AccessError::RoleMismatch {
                required: self.required,
                resolved: principal.role,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_identifier_starting_with_a_is_manager() {
        assert_eq!(Role::from_identifier("aaa"), Role::Manager);
        assert_eq!(Role::from_identifier("a1"), Role::Manager);
        assert_eq!(Role::from_identifier("admin"), Role::Manager);
    }

    #[test]
    fn test_identifier_starting_with_b_is_vip() {
        assert_eq!(Role::from_identifier("bxy"), Role::VipMember);
        assert_eq!(Role::from_identifier("b"), Role::VipMember);
    }

    #[test]
    fn test_any_other_first_character_is_member() {
        assert_eq!(Role::from_identifier("ccc"), Role::Member);
        assert_eq!(Role::from_identifier("zed"), Role::Member);
        assert_eq!(Role::from_identifier("123"), Role::Member);
        assert_eq!(Role::from_identifier("!admin"), Role::Member);
        // Classification is case-sensitive
        assert_eq!(Role::from_identifier("Aaa"), Role::Member);
        assert_eq!(Role::from_identifier("Bxy"), Role::Member);
        // Multi-byte first characters take the fallback branch too
        assert_eq!(Role::from_identifier("회원아"), Role::Member);
        assert_eq!(Role::from_identifier("ä-user"), Role::Member);
    }

    #[test]
    fn test_resolve_keeps_raw_identifier() {
        let principal = Principal::resolve(Some("aaa")).unwrap();
        assert_eq!(principal.identifier, "aaa");
        assert_eq!(principal.role, Role::Manager);

        let principal = Principal::resolve(Some("bxy")).unwrap();
        assert_eq!(principal.identifier, "bxy");
        assert_eq!(principal.role, Role::VipMember);
    }

    #[test]
    fn test_resolve_missing_identifier() {
        assert_eq!(
            Principal::resolve(None),
            Err(AccessError::MissingIdentifier)
        );
    }

    #[test]
    fn test_resolve_empty_identifier() {
        // Present-but-empty carries no first character and fails like an
        // absent one
        assert_eq!(
            Principal::resolve(Some("")),
            Err(AccessError::MissingIdentifier)
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = Principal::resolve(Some("b-42")).unwrap();
        let second = Principal::resolve(Some("b-42")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_gate_allows_only_exact_role() {
        for resolved in Role::all() {
            let principal = Principal {
                identifier: "test".to_string(),
                role: resolved,
            };
            for required in Role::all() {
                let requirement = RoleRequirement::new(required);
                if resolved == required {
                    assert!(requirement.check(&principal).is_ok());
                } else {
                    assert_eq!(
                        requirement.check(&principal),
                        Err(AccessError::RoleMismatch { required, resolved })
                    );
                }
            }
        }
    }

    #[test]
    fn test_manager_does_not_imply_member() {
        let manager = Principal::resolve(Some("alice")).unwrap();
        assert_eq!(manager.role, Role::Manager);
        assert!(!manager.satisfies(Role::Member));
        assert!(!manager.satisfies(Role::VipMember));
    }

    #[test]
    fn test_role_display_and_parse_round_trip() {
        for role in Role::all() {
            let parsed = Role::from_str(&role.to_string()).unwrap();
            assert_eq!(parsed, role);
        }
        assert_eq!(Role::from_str("vip"), Ok(Role::VipMember));
        assert!(Role::from_str("janitor").is_err());
    }

    #[test]
    fn test_role_serde_names() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        assert_eq!(
            serde_json::to_string(&Role::VipMember).unwrap(),
            "\"vip_member\""
        );
        let role: Role = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(role, Role::Member);
    }
}
