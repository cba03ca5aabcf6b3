use std::sync::Arc;

use clap::{Parser, Subcommand};
use client::{ApiClient, ClientError, CurrentUserState, ResolveError, Session};
use jsonapi::{LOGIN_PASSWORD, LOGIN_USERNAME};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("current user unavailable: {0}")]
    Resolve(#[from] ResolveError),
    #[error("current user lookup ended without a result")]
    Unresolved,
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gateway-cli", about = "Client for the token-gated codes API")]
struct Cli {
    #[arg(long, env = "GATEWAY_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "GATEWAY_USERNAME", default_value = LOGIN_USERNAME)]
    username: String,

    #[arg(long, env = "GATEWAY_PASSWORD", default_value = LOGIN_PASSWORD, hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Check that the gateway is up.
    Ping,
    /// Log in and print the access token.
    Login,
    /// Log in and list the protected codes.
    Codes,
    /// List users (no login).
    Users,
    /// Log in and print the current user.
    Me,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Arc::new(Session::new(ApiClient::new(&cli.base_url)?));

    match &cli.command {
        Command::Ping => {
            session.api().health().await?;
            println!("ok");
            Ok(())
        }
        Command::Login => {
            login(&session, &cli).await?;
            println!("{}", session.access_token().unwrap_or_default());
            Ok(())
        }
        Command::Codes => {
            login(&session, &cli).await?;
            print_json(&session.codes().await?)
        }
        Command::Users => print_json(&session.api().query_users(None, None).await?),
        Command::Me => {
            login(&session, &cli).await?;
            run_me(&session).await
        }
    }
}

async fn login(session: &Session, cli: &Cli) -> Result<(), CliError> {
    session.authenticate(&cli.username, &cli.password).await?;
    tracing::debug!(base_url = %cli.base_url, "logged in");
    Ok(())
}

async fn run_me(session: &Arc<Session>) -> Result<(), CliError> {
    let current = session.current_user();
    match current.settled().await {
        CurrentUserState::Resolved(user) => print_json(&user),
        CurrentUserState::Failed(e) => Err(e.into()),
        CurrentUserState::Anonymous | CurrentUserState::Pending => Err(CliError::Unresolved),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
