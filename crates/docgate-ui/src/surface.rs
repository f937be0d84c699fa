//! Host-page surface trait

/// The seam between the controller and the embedding page.
///
/// Implementations map these calls onto whatever the page uses for its
/// chrome: a login button, a modal container, a navigation list whose items
/// carry group-token identifiers, a status element, and the page body kept
/// hidden until scripts run. All operations are synchronous and infallible,
/// matching the element operations they stand in for.
pub trait UiSurface {
    /// Set the text of the login button
    fn set_login_label(&mut self, label: &str);

    /// Show or hide a navigation item by its identifier
    fn set_nav_item_visible(&mut self, id: &str, visible: bool);

    /// Set or clear the status message element
    fn set_status_message(&mut self, message: Option<&str>);

    /// Open or close the login modal
    fn set_modal_open(&mut self, open: bool);

    /// Make the page body visible
    fn reveal_content(&mut self);

    /// Raise a user-visible alert
    fn alert(&mut self, message: &str);

    /// Leave the current page for the given location
    fn navigate(&mut self, location: &str);
}
