//! userdir — user directory API client.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userdir::config::Config;
use userdir::constants;
use userdir::directory::UserDirectory;
use userdir::env::Env;
use userdir::logging;
use userdir::transport::{HttpTransport, Lookup};

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{Cli, Command, OutputFormat, UserArgs};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        return run_version();
    }

    let workdir = std::env::current_dir().ok();
    let mut config = Config::load(workdir.as_deref(), cli.config.as_deref(), &Env::real())
        .context("failed to load configuration")?;

    // Layer 1: CLI flags
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    logging::init(&config.log.level);

    let transport = HttpTransport::new(&config.api).context("failed to set up HTTP transport")?;
    let directory = UserDirectory::new(config.api.base_url.clone(), Arc::new(transport));

    match cli.command {
        Command::User(args) => run_user(&directory, args, cli.format).await,
        Command::Active => run_active(&directory, cli.format).await,
        Command::Domains => run_domains(&directory, cli.format).await,
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!("{} {}", constants::APP_NAME.bold(), constants::VERSION.green().bold());
    Ok(())
}

/// Fetch and print a single user.
async fn run_user(directory: &UserDirectory, args: UserArgs, format: OutputFormat) -> Result<()> {
    let user = if args.strict {
        match directory.lookup_by_id(args.id).await {
            Lookup::Found(user) => Some(user),
            Lookup::NotFound => None,
            Lookup::TransportFailed(e) => {
                return Err(e).with_context(|| format!("failed to fetch user {}", args.id));
            }
        }
    } else {
        directory.fetch_by_id(args.id).await
    };

    print!("{}", format.render_user(user.as_ref()));
    Ok(())
}

/// Print active users sorted by name.
async fn run_active(directory: &UserDirectory, format: OutputFormat) -> Result<()> {
    let users = directory.fetch_active_users().await;
    print!("{}", format.render_users(&users));
    Ok(())
}

/// Print active users grouped by email domain.
async fn run_domains(directory: &UserDirectory, format: OutputFormat) -> Result<()> {
    match directory.group_by_email_domain().await {
        Ok(groups) => {
            print!("{}", format.render_groups(&groups));
            Ok(())
        }
        Err(e) => bail!("cannot group users by domain: {e}"),
    }
}
