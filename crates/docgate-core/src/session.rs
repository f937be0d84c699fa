//! The logged-in session record

use serde::{Deserialize, Serialize};

/// The session of the currently logged-in user.
///
/// A session is a single composite value: either the whole record exists
/// (logged in) or none of it does (logged out). Stores persist and clear it
/// as a unit, so no reader can ever observe a user without its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Username the session was created for
    pub user: String,
    /// Group label carried by the matching credential record
    pub group: String,
}

impl Session {
    /// Create a session for a user and its group label
    pub fn new(user: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            group: group.into(),
        }
    }

    /// Check whether this session's group label grants a required label.
    ///
    /// Granting is substring containment, not token-set membership: a stored
    /// group of `"admin,editor"` grants both `"admin"` and `"editor"`, but
    /// it also grants `"dmin"` and refuses `"editorial"`. The comparison is
    /// case-sensitive. One broad stored label can therefore imply several
    /// narrower ones, and an unrelated label that happens to contain the
    /// required one will be granted as well.
    pub fn group_grants(&self, required: &str) -> bool {
        self.group.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_exact_label() {
        let session = Session::new("alice", "admin");
        assert!(session.group_grants("admin"));
    }

    #[test]
    fn comma_separated_label_grants_each_part() {
        let session = Session::new("alice", "admin,editor");
        assert!(session.group_grants("admin"));
        assert!(session.group_grants("editor"));
    }

    #[test]
    fn containment_is_substring_not_token() {
        // "editorial" is not contained in "admin", even though it starts
        // with a granted-looking prefix.
        let session = Session::new("alice", "admin");
        assert!(!session.group_grants("editorial"));

        // The reverse pitfall: any substring of the stored label passes.
        let session = Session::new("alice", "administrators");
        assert!(session.group_grants("admin"));
        assert!(session.group_grants("strat"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let session = Session::new("alice", "Admin");
        assert!(!session.group_grants("admin"));
    }
}
