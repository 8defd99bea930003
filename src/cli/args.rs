//! Clap argument types and output format selection.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use userdir::directory::DomainGroups;
use userdir::models::User;
use userdir::output::OutputRenderer;
use userdir::output::json::JsonRenderer;
use userdir::output::terminal::TerminalRenderer;

/// Query a user directory API.
#[derive(Parser, Debug)]
#[command(
    name = "userdir",
    version = userdir::constants::VERSION,
    about = "Fetch, filter and group users from a directory API",
)]
pub struct Cli {
    /// Directory API root (overrides config and USERDIR_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file to use instead of ./.userdir.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch a single user by id.
    User(UserArgs),

    /// List active users sorted by name.
    Active,

    /// Group active users by email domain.
    Domains,

    /// Print version information.
    Version,
}

/// Arguments for the `user` subcommand.
#[derive(Parser, Debug)]
pub struct UserArgs {
    /// Numeric user id.
    pub id: u32,

    /// Fail when the request itself fails instead of reporting "not found".
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    fn renderer(self) -> &'static dyn OutputRenderer {
        match self {
            OutputFormat::Terminal => &TerminalRenderer,
            OutputFormat::Json => &JsonRenderer,
        }
    }

    pub fn render_user(self, user: Option<&User>) -> String {
        self.renderer().render_user(user)
    }

    pub fn render_users(self, users: &[User]) -> String {
        self.renderer().render_users(users)
    }

    pub fn render_groups(self, groups: &DomainGroups) -> String {
        self.renderer().render_groups(groups)
    }
}
