//! Pure projection of session state onto UI state

use docgate_core::Session;

/// Label of the login button when nobody is logged in
pub const LOGIN_LABEL: &str = "Login";

/// Prefix of the login button label when a session exists
pub const LOGGED_IN_PREFIX: &str = "Logged in as ";

/// Status message shown when no session exists
pub const NO_PAGES_MESSAGE: &str = "No pages to view. Please log in.";

/// A navigation entry of the embedding page.
///
/// The identifier doubles as the group token gating the entry's visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: String,
}

impl NavigationItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Computed visible state of the page chrome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// Text of the login button
    pub login_label: String,
    /// Visibility flag per navigation item, in item order
    pub nav_visibility: Vec<(String, bool)>,
    /// Status message, present only when logged out
    pub status_message: Option<String>,
}

/// Project the current session onto UI state.
///
/// Pure function of its inputs: the login button names the logged-in user
/// or reads "Login"; a navigation item is visible iff a session exists and
/// its group contains the item id as a substring (the same containment
/// semantics as page access); the status message asks the visitor to log
/// in when no session exists.
pub fn render(session: Option<&Session>, items: &[NavigationItem]) -> UiState {
    let login_label = match session {
        Some(session) => format!("{}{}", LOGGED_IN_PREFIX, session.user),
        None => LOGIN_LABEL.to_string(),
    };

    let nav_visibility = items
        .iter()
        .map(|item| {
            let visible = session.is_some_and(|s| s.group_grants(&item.id));
            (item.id.clone(), visible)
        })
        .collect();

    let status_message = match session {
        Some(_) => None,
        None => Some(NO_PAGES_MESSAGE.to_string()),
    };

    UiState {
        login_label,
        nav_visibility,
        status_message,
    }
}
