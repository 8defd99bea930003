//! Terminal renderer: styled flowing text, one user per line.

use colored::Colorize;

use crate::directory::DomainGroups;
use crate::models::User;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render_user(&self, user: Option<&User>) -> String {
        match user {
            Some(user) => format!("{}\n", user_line(user)),
            None => format!("{}\n", "  ✖ User not found.".yellow()),
        }
    }

    fn render_users(&self, users: &[User]) -> String {
        if users.is_empty() {
            return format!("{}\n", "  No active users.".dimmed());
        }

        let mut output = String::new();
        for user in users {
            output.push_str(&user_line(user));
            output.push('\n');
        }
        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} active {}\n",
            users.len().to_string().bold(),
            if users.len() == 1 { "user" } else { "users" },
        ));
        output
    }

    fn render_groups(&self, groups: &DomainGroups) -> String {
        if groups.is_empty() {
            return format!("{}\n", "  No active users.".dimmed());
        }

        let mut output = String::new();
        for (domain, users) in groups {
            output.push_str(&format!(
                " {} {}\n",
                domain.cyan().bold(),
                format!("({})", users.len()).dimmed()
            ));
            for user in users {
                output.push_str(&format!("  {}\n", user_line(user)));
            }
            output.push('\n');
        }
        output
    }
}

/// `#42  Ada Lovelace <ada@example.com>  since 2024-03-01`
fn user_line(user: &User) -> String {
    let status = if user.is_active() {
        String::new()
    } else {
        format!("  {}", "inactive".red())
    };
    format!(
        " {}  {} <{}>  {}{}",
        format!("#{}", user.id()).dimmed(),
        user.name().bold(),
        user.email(),
        format!("since {}", user.created_at().format("%Y-%m-%d")).dimmed(),
        status,
    )
}
