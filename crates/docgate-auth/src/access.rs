//! Page access decisions

use docgate_core::Session;
use tracing::debug;

/// What a protected page requires, supplied at evaluation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAccessRule {
    /// Group label the viewer's session must grant
    pub required_group: String,
    /// Where to send a denied viewer
    pub fallback_location: String,
}

impl PageAccessRule {
    pub fn new(required_group: impl Into<String>, fallback_location: impl Into<String>) -> Self {
        Self {
            required_group: required_group.into(),
            fallback_location: fallback_location.into(),
        }
    }
}

/// Outcome of evaluating a page's rule against the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    DeniedNotLoggedIn,
    DeniedWrongGroup,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

/// Decide whether the current session may view a page.
///
/// Pure policy check, no IO and no side effects: on either denial the
/// caller is responsible for navigating to the rule's fallback location.
/// Group authorization uses the session's substring containment semantics
/// (see [`Session::group_grants`]), not exact token membership.
pub fn check_access(session: Option<&Session>, rule: &PageAccessRule) -> AccessDecision {
    let decision = match session {
        None => AccessDecision::DeniedNotLoggedIn,
        Some(session) if !session.group_grants(&rule.required_group) => {
            AccessDecision::DeniedWrongGroup
        }
        Some(_) => AccessDecision::Allowed,
    };

    debug!(
        "Access decision for group '{}': {:?}",
        rule.required_group, decision
    );
    decision
}
