// Configuration for the EquusID HTTP client

/// Development origin of the backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8090";

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend origin (e.g. "http://localhost:8090")
    pub base_url: String,
    /// Connection timeout in milliseconds (default: 5000)
    pub connect_timeout_ms: u64,
    /// Whole-request timeout in milliseconds (default: 30000)
    pub request_timeout_ms: u64,
    /// Optional context path prepended to every endpoint
    pub context_path: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: 5000,
            request_timeout_ms: 30000,
            context_path: String::new(),
            user_agent: concat!("equus-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new config pointing at the given origin
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, request_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.request_timeout_ms = request_ms;
        self
    }

    /// Set context path
    pub fn with_context_path(mut self, path: &str) -> Self {
        self.context_path = path.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8090");
        assert_eq!(config.connect_timeout_ms, 5000);
        assert_eq!(config.request_timeout_ms, 30000);
        assert!(config.context_path.is_empty());
        assert!(config.user_agent.starts_with("equus-client/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://api.equusid.example/")
            .with_timeouts(1000, 8000)
            .with_context_path("/backoffice")
            .with_user_agent("admin-cli");

        assert_eq!(config.base_url, "https://api.equusid.example");
        assert_eq!(config.connect_timeout_ms, 1000);
        assert_eq!(config.request_timeout_ms, 8000);
        assert_eq!(config.context_path, "/backoffice");
        assert_eq!(config.user_agent, "admin-cli");
    }
}
