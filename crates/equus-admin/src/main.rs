//! Main entry point for the EquusID back-office CLI.
//!
//! Loads configuration, installs logging, opens a session and runs one
//! subcommand against the backend.

mod cli;
mod commands;
mod configuration;
mod logging;

use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use equus_client::{EquusApiClient, SessionStore};
use tracing::{debug, info};

use crate::cli::{Cli, Command};
use crate::configuration::Configuration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let configuration = Configuration::new(&cli).context("failed to load configuration")?;
    logging::init_logging(&configuration.log_level())?;

    let client_config = configuration.client_config();
    debug!("Using backend at {}", client_config.base_url);

    let session = match configuration.token() {
        Some(token) => Arc::new(SessionStore::with_token(token)),
        None => Arc::new(SessionStore::new()),
    };
    let api = EquusApiClient::from_config(client_config, session)?;

    if !matches!(cli.command, Command::Login) {
        ensure_session(&api, &configuration).await?;
    }

    match cli.command {
        Command::Login => {
            let (email, password) = credentials(&configuration)?;
            commands::login(&api, &email, &password).await
        }
        Command::List(args) => {
            commands::list(&api, configuration.controller_config()?, &args).await
        }
        Command::Get { resource, id } => commands::get(&api, resource, id).await,
        Command::Delete { resource, id } => commands::delete(&api, resource, id).await,
    }
}

fn credentials(configuration: &Configuration) -> anyhow::Result<(String, String)> {
    match (configuration.email(), configuration.password()) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => bail!("--email and --password (or EQUUS_CLIENT__EMAIL / EQUUS_PASSWORD) are required"),
    }
}

/// Log in with the configured credentials unless a token was supplied
async fn ensure_session(api: &EquusApiClient, configuration: &Configuration) -> anyhow::Result<()> {
    if api.is_authenticated() {
        return Ok(());
    }

    let (email, password) = credentials(configuration)
        .context("no session token configured and no credentials to log in with")?;
    api.login(&email, &password)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    info!("Session opened for {}", email);
    Ok(())
}
