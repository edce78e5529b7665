//! clubdesk — admin CLI for the club management API
//!
//! Signs in against the remote API, caches the session in a local
//! credential file, and exposes the roster / session / attendance /
//! role resources as subcommands. All requests go through the
//! authenticated gateway, so expired access tokens refresh transparently
//! and a dead session ends with a sign-in hint instead of a stack trace.

mod commands;
mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clubdesk_auth::CredentialStore;
use clubdesk_gateway::{Gateway, Navigator};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "clubdesk")]
#[command(about = "Admin CLI for the student club management API", long_about = None)]
struct Cli {
    /// Config file path (default: clubdesk.toml, or CONFIG_PATH env var)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and cache the session locally
    Login {
        /// Student id to sign in with
        mssv: String,
    },

    /// Drop the cached session
    Logout,

    /// Show the signed-in member
    Whoami,

    /// Set a member's password (admin acting on their behalf)
    SetPassword {
        /// Member id whose password changes
        member: String,
    },

    /// Club overview: member stats, sessions, attendance totals
    Overview,

    /// List members, paged
    Members {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Filter by full name or student id
        #[arg(long)]
        keyword: Option<String>,
    },

    /// Show one member
    Member {
        id: String,
    },

    /// Member counts grouped by status
    MemberStats,

    /// Delete one member
    RemoveMember {
        id: String,
    },

    /// List all sessions
    Sessions,

    /// Show one session with its attendance
    Session {
        id: String,
    },

    /// List attendance records, optionally for one session
    Attendance {
        #[arg(long)]
        session: Option<String>,
    },

    /// Mark attendance for a member at a session
    MarkAttendance {
        #[arg(long)]
        session: String,
        #[arg(long)]
        member: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },

    /// List club roles
    Roles,

    /// Create a club role
    AddRole {
        name: String,
    },

    /// List per-session roles
    RoleSessions,
}

/// CLI stand-in for "redirect to the sign-in page": when the gateway
/// tears a session down it points the user at `clubdesk login`.
struct SignInHint;

impl Navigator for SignInHint {
    fn to_entry_point(&self) {
        eprintln!("Session ended. Run `clubdesk login <mssv>` to sign in again.");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet by default; LOG_LEVEL / RUST_LOG opt into more
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    info!(
        base_url = %config.api.base_url,
        credentials = %config.storage.credentials_path.display(),
        "configuration loaded"
    );

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;

    let store = Arc::new(
        CredentialStore::load(config.storage.credentials_path.clone())
            .await
            .context("failed to load credential store")?,
    );

    let gateway = Arc::new(Gateway::new(
        config.api.base_url.clone(),
        http,
        store,
        Arc::new(SignInHint),
    ));

    match cli.command {
        Commands::Login { mssv } => commands::auth::login(gateway, &mssv).await,
        Commands::Logout => commands::auth::logout(gateway).await,
        Commands::Whoami => commands::auth::whoami(gateway).await,
        Commands::SetPassword { member } => commands::auth::set_password(gateway, &member).await,
        Commands::Overview => commands::overview::show(gateway).await,
        Commands::Members {
            page,
            limit,
            keyword,
        } => commands::members::list(gateway, page, limit, keyword.as_deref()).await,
        Commands::Member { id } => commands::members::show(gateway, &id).await,
        Commands::MemberStats => commands::members::stats(gateway).await,
        Commands::RemoveMember { id } => commands::members::remove(gateway, &id).await,
        Commands::Sessions => commands::sessions::list(gateway).await,
        Commands::Session { id } => commands::sessions::show(gateway, &id).await,
        Commands::Attendance { session } => {
            commands::attendance::list(gateway, session.as_deref()).await
        }
        Commands::MarkAttendance {
            session,
            member,
            status,
            note,
        } => commands::attendance::mark(gateway, &session, &member, status, note).await,
        Commands::Roles => commands::roles::list(gateway).await,
        Commands::AddRole { name } => commands::roles::add(gateway, &name).await,
        Commands::RoleSessions => commands::roles::list_role_sessions(gateway).await,
    }
}
