//! Session-driven UI controller

use docgate_auth::{AccessDecision, Authenticator, PageAccessRule, check_access};
use docgate_core::Session;
use tracing::warn;

use crate::state::{NavigationItem, render};
use crate::surface::UiSurface;

/// Alert raised when a login attempt fails, for whatever reason
pub const LOGIN_FAILED_ALERT: &str = "Invalid username or password";

/// Alert raised when a protected page is opened without a session
pub const NOT_LOGGED_IN_ALERT: &str = "You must log in to view this page.";

/// Alert raised when the session's group does not grant the page
pub const WRONG_GROUP_ALERT: &str = "You are not authorized to view this page.";

/// Drives the UI surface from session state and page events.
///
/// The controller reads the session through the authenticator and holds no
/// write access of its own. Refreshes are not automatic: event handlers
/// call the refresh methods after every login or logout, and each protected
/// page calls [`UiController::guard_page`] once at load time.
pub struct UiController<U: UiSurface> {
    auth: Authenticator,
    surface: U,
    items: Vec<NavigationItem>,
}

impl<U: UiSurface> UiController<U> {
    pub fn new(auth: Authenticator, surface: U, items: Vec<NavigationItem>) -> Self {
        Self {
            auth,
            surface,
            items,
        }
    }

    /// The underlying surface, for embeddings that also drive it directly
    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// Read the session; a failing store reads as logged out
    async fn current_session(&self) -> Option<Session> {
        match self.auth.session().await {
            Ok(session) => session,
            Err(e) => {
                warn!("Session store read failed, treating as logged out: {}", e);
                None
            }
        }
    }

    /// Update the login button text from the current session
    pub async fn refresh_login_affordance(&mut self) {
        let session = self.current_session().await;
        let state = render(session.as_ref(), &self.items);
        self.surface.set_login_label(&state.login_label);
    }

    /// Update every navigation item and the status message from the
    /// current session
    pub async fn refresh_navigation_visibility(&mut self) {
        let session = self.current_session().await;
        let state = render(session.as_ref(), &self.items);

        for (id, visible) in &state.nav_visibility {
            self.surface.set_nav_item_visible(id, *visible);
        }
        self.surface.set_status_message(state.status_message.as_deref());
    }

    pub fn open_login_modal(&mut self) {
        self.surface.set_modal_open(true);
    }

    pub fn close_login_modal(&mut self) {
        self.surface.set_modal_open(false);
    }

    /// Make the page body visible.
    ///
    /// Pages gated by this module ship with their body hidden to avoid a
    /// flash of protected content; this runs on every page load, before and
    /// independent of any access decision.
    pub fn reveal_content(&mut self) {
        self.surface.reveal_content();
    }

    /// Handle a submitted login form.
    ///
    /// The embedding page binds this to the form's submit action (including
    /// the Enter key inside the form). Every failure surfaces as the same
    /// generic alert; a credential-source fault is only distinguishable in
    /// the diagnostic log. Returns whether the login succeeded.
    pub async fn submit_login(&mut self, username: &str, password: &str) -> bool {
        match self.auth.login(username, password).await {
            Ok(_) => {
                self.close_login_modal();
                self.refresh_login_affordance().await;
                self.refresh_navigation_visibility().await;
                true
            }
            Err(_) => {
                self.surface.alert(LOGIN_FAILED_ALERT);
                false
            }
        }
    }

    /// Handle the logout action
    pub async fn logout(&mut self) {
        if let Err(e) = self.auth.logout().await {
            warn!("Logout failed to clear the session store: {}", e);
        }
        self.refresh_login_affordance().await;
        self.refresh_navigation_visibility().await;
    }

    /// Gate a protected page, once at load time.
    ///
    /// Content is revealed unconditionally first, so the page stays legible
    /// whatever the decision. On denial the visitor is alerted with the
    /// reason and sent to the rule's fallback location.
    pub async fn guard_page(&mut self, rule: &PageAccessRule) -> AccessDecision {
        self.reveal_content();

        let session = self.current_session().await;
        let decision = check_access(session.as_ref(), rule);

        match decision {
            AccessDecision::Allowed => {}
            AccessDecision::DeniedNotLoggedIn => {
                self.surface.alert(NOT_LOGGED_IN_ALERT);
                self.surface.navigate(&rule.fallback_location);
            }
            AccessDecision::DeniedWrongGroup => {
                self.surface.alert(WRONG_GROUP_ALERT);
                self.surface.navigate(&rule.fallback_location);
            }
        }

        decision
    }
}
