//! Application state shared across handlers

use crate::WebConfig;
use doorman_members::MemberService;

/// Shared state handed to every handler
///
/// Cloning is cheap: the member service is backed by shared storage, so all
/// clones observe the same registry.
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// Member registry service
    pub members: MemberService,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: WebConfig) -> Self {
        Self {
            config,
            members: MemberService::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WebConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_registry() {
        let state = AppState::default();
        let clone = state.clone();

        let id = clone
            .members
            .sign_up(doorman_members::NewMember {
                name: "kim".to_string(),
                info: None,
            })
            .unwrap();

        assert!(state.members.member(&id).is_some());
    }
}
