//! Configuration management for the back-office CLI
//!
//! Values are layered: the optional YAML file, then `EQUUS_*` environment
//! variables (`__` separates sections), then command line flags.

use anyhow::bail;
use config::{Config, Environment, File};
use equus_client::ClientConfig;
use equus_client::config::DEFAULT_BASE_URL;
use equus_console::{ControllerConfig, EmptyPagePolicy, ResponseOrdering};

use crate::cli::Cli;

pub const ENV_PREFIX: &str = "EQUUS";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::with_name(&cli.config).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        for (key, value) in cli.overrides() {
            builder = builder.set_override(key, value)?;
        }

        Ok(Configuration {
            config: builder.build()?,
        })
    }

    // ============== Client ==============

    pub fn base_url(&self) -> String {
        self.config
            .get_string("client.base_url")
            .unwrap_or(DEFAULT_BASE_URL.to_string())
    }

    pub fn context_path(&self) -> String {
        self.config
            .get_string("client.context_path")
            .unwrap_or_default()
    }

    pub fn connect_timeout_ms(&self) -> u64 {
        self.get_u64("client.connect_timeout_ms").unwrap_or(5000)
    }

    pub fn request_timeout_ms(&self) -> u64 {
        self.get_u64("client.request_timeout_ms").unwrap_or(30000)
    }

    pub fn token(&self) -> Option<String> {
        self.non_empty("client.token")
    }

    pub fn email(&self) -> Option<String> {
        self.non_empty("client.email")
    }

    pub fn password(&self) -> Option<String> {
        self.non_empty("client.password")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url())
            .with_timeouts(self.connect_timeout_ms(), self.request_timeout_ms())
            .with_context_path(&self.context_path())
    }

    // ============== Lists ==============

    pub fn page_size(&self) -> Option<u32> {
        self.get_u64("list.page_size")
            .and_then(|v| u32::try_from(v).ok())
    }

    pub fn ordering(&self) -> ResponseOrdering {
        match self.config.get_string("list.ordering").as_deref() {
            Ok("latest_request") => ResponseOrdering::LatestRequest,
            _ => ResponseOrdering::LastToResolve,
        }
    }

    pub fn empty_page_policy(&self) -> EmptyPagePolicy {
        match self.config.get_string("list.empty_page").as_deref() {
            Ok("step_back") => EmptyPagePolicy::StepBack,
            _ => EmptyPagePolicy::Keep,
        }
    }

    pub fn controller_config(&self) -> anyhow::Result<ControllerConfig> {
        let mut config = ControllerConfig::new()
            .with_ordering(self.ordering())
            .with_empty_page_policy(self.empty_page_policy());
        if let Some(size) = self.page_size() {
            if !config.is_allowed_page_size(size) {
                bail!(
                    "list.page_size must be one of {:?}, got {}",
                    config.allowed_page_sizes,
                    size
                );
            }
            config = config.with_page_size(size);
        }
        if let Ok(sort) = self.config.get_string("list.sort") {
            config = config.with_sort(Some(sort.as_str()).filter(|s| !s.is_empty()));
        }
        Ok(config)
    }

    // ============== Logging ==============

    pub fn log_level(&self) -> String {
        self.config
            .get_string("log.level")
            .unwrap_or(DEFAULT_LOG_LEVEL.to_string())
    }

    fn get_u64(&self, key: &str) -> Option<u64> {
        self.config
            .get_int(key)
            .ok()
            .and_then(|v| u64::try_from(v).ok())
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.config
            .get_string(key)
            .ok()
            .filter(|v| !v.trim().is_empty())
    }
}
