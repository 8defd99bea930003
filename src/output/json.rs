//! JSON output renderer.
//!
//! Outputs `{"user": ...}`, `{"users": [...], "count": n}` or
//! `{"domains": {...}, "count": n}` depending on the command.

use crate::directory::DomainGroups;
use crate::models::User;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_user(&self, user: Option<&User>) -> String {
        pretty(serde_json::json!({ "user": user }))
    }

    fn render_users(&self, users: &[User]) -> String {
        pretty(serde_json::json!({
            "users": users,
            "count": users.len(),
        }))
    }

    fn render_groups(&self, groups: &DomainGroups) -> String {
        pretty(serde_json::json!({
            "domains": groups,
            "count": groups.values().map(Vec::len).sum::<usize>(),
        }))
    }
}

fn pretty(value: serde_json::Value) -> String {
    let mut out = serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}
