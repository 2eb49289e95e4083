//! Command line arguments

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use equus_client::TravelStatus;

pub const DEFAULT_CONFIG_FILE: &str = "conf/equus-admin.yml";

#[derive(Debug, Parser)]
#[command(name = "equus-admin")]
#[command(about = "EquusID back-office command line")]
pub struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,
    /// Backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Bearer token of an existing session
    #[arg(long, global = true, env = "EQUUS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    #[arg(long, global = true)]
    pub email: Option<String>,
    #[arg(long, global = true, env = "EQUUS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Configuration keys set explicitly on the command line
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        [
            ("client.base_url", &self.base_url),
            ("client.token", &self.token),
            ("client.email", &self.email),
            ("client.password", &self.password),
            ("log.level", &self.log_level),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and print the session token
    Login,
    /// List one page of a resource
    List(ListArgs),
    /// Print one record as JSON
    Get { resource: Resource, id: i64 },
    /// Delete one record
    Delete { resource: Resource, id: i64 },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    pub resource: Resource,
    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size (5, 10, 25 or 50)
    #[arg(long)]
    pub size: Option<u32>,
    /// Case-insensitive search over the loaded page
    #[arg(long)]
    pub search: Option<String>,
    /// Travel status filter
    #[arg(long)]
    pub status: Option<TravelStatus>,
    /// Travels starting on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Travels starting on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl ListArgs {
    pub fn has_travel_filters(&self) -> bool {
        self.status.is_some() || self.from.is_some() || self.to.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Users,
    Equines,
    HealthBooks,
    Stables,
    Travels,
    Breeds,
}
