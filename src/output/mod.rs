//! Output renderers for directory results: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::directory::DomainGroups;
use crate::models::User;

/// Trait for rendering directory results to an output format.
pub trait OutputRenderer {
    /// Render a single-user lookup; `None` means nothing was returned.
    fn render_user(&self, user: Option<&User>) -> String;

    /// Render an ordered user list.
    fn render_users(&self, users: &[User]) -> String;

    /// Render users grouped by email domain.
    fn render_groups(&self, groups: &DomainGroups) -> String;
}
