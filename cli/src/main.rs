mod transport;


use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use portal_client::error::ApiError;
use portal_client::net::api;
use portal_client::net::session::SessionClient;
use portal_client::net::types::{Course, Credentials, Resource, RoleRecord, Transaction, UserProfile};
use portal_client::state::auth::{AuthState, end_session, resolve_session};
use portal_client::util::nav::nav_data_by_role;
use portal_client::util::role::Role;

use transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing credentials; pass --email/--password or set PORTAL_EMAIL/PORTAL_PASSWORD")]
    MissingCredentials,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("session check failed; the backend did not accept the login")]
    NotSignedIn,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "School portal session and API CLI")]
struct Cli {
    #[arg(long, env = "PORTAL_API_BASE_URL", default_value = portal_client::config::DEFAULT_API_BASE_URL)]
    base_url: String,

    #[arg(long, env = "PORTAL_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long, default_value_t = 10, help = "Request timeout in seconds")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Sign in, run the session check, and print the profile and its menu.
    Session,
    /// Sign in and print one collection as JSON.
    List {
        #[arg(value_enum)]
        resource: ResourceKind,
    },
    /// Sign in, then sign out again.
    Logout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ResourceKind {
    Users,
    Roles,
    Courses,
    Transactions,
}

type Client = SessionClient<ReqwestTransport>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_tracing();

    let cli = Cli::parse();
    let transport = ReqwestTransport::new(Duration::from_secs(cli.timeout_secs))?;
    let client = SessionClient::new(portal_client::config::normalize_base_url(&cli.base_url), transport);
    let credentials = credentials(cli.email.as_deref(), cli.password.as_deref())?;

    api::login(&client, &credentials).await?;
    tracing::info!(base_url = client.base_url(), "signed in");

    match cli.command {
        Command::Session => run_session(&client).await,
        Command::List { resource } => run_list(&client, resource).await,
        Command::Logout => run_logout(&client).await,
    }
}

/// Logs go to stderr so `list` output stays pipeable; `RUST_LOG` sets the level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();
}

fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    match directives.map(str::trim) {
        Some(d) if !d.is_empty() => tracing_subscriber::EnvFilter::new(d),
        _ => tracing_subscriber::EnvFilter::new("info"),
    }
}

fn credentials(email: Option<&str>, password: Option<&str>) -> Result<Credentials, CliError> {
    match (email.map(str::trim), password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
        }
        _ => Err(CliError::MissingCredentials),
    }
}

async fn run_session(client: &Client) -> Result<(), CliError> {
    let state = resolve_session(client).await;
    let Some(user) = state.user.as_ref() else {
        return Err(CliError::NotSignedIn);
    };
    print!("{}", render_session(user, &state));
    Ok(())
}

/// Human-readable summary of a resolved session.
fn render_session(user: &UserProfile, state: &AuthState) -> String {
    let role = state.effective_role().unwrap_or(Role::LOWEST_PRIVILEGE);
    let mut out = format!("{} <{}>\nrole: {}\nhome: {}\n", user.display_name(), user.email, role.as_str(), role.home_path());
    for section in nav_data_by_role(Some(role)) {
        out.push_str(&format!("\n[{}]\n", section.title));
        for item in section.items {
            out.push_str(&format!("  {:<16} {}\n", item.title, item.path));
        }
    }
    out
}

async fn run_list(client: &Client, resource: ResourceKind) -> Result<(), CliError> {
    match resource {
        ResourceKind::Users => print_list::<UserProfile>(client).await,
        ResourceKind::Roles => print_list::<RoleRecord>(client).await,
        ResourceKind::Courses => print_list::<Course>(client).await,
        ResourceKind::Transactions => print_list::<Transaction>(client).await,
    }
}

async fn print_list<R: Resource>(client: &Client) -> Result<(), CliError> {
    let items = api::list_resources::<R, _>(client).await?;
    tracing::info!(resource = R::LABEL, count = items.len(), "listed");
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

async fn run_logout(client: &Client) -> Result<(), CliError> {
    let state = end_session(client).await;
    debug_assert!(state.is_unauthenticated());
    println!("signed out");
    Ok(())
}
