use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

use crate::sources::github::DEFAULT_GITHUB_API_URL;
use crate::sources::helius::DEFAULT_HELIUS_RPC_URL;
use crate::sources::http::HttpClientConfig;
use crate::sources::stackexchange::{DEFAULT_STACKEXCHANGE_API_URL, DEFAULT_STACKEXCHANGE_SITE};

/// Configuration for the reputation gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Upstream API configuration
    pub upstream: UpstreamConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Inbound request limits and CORS
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Code-host API base URL
    pub github_api_url: String,
    /// Q&A API base URL
    pub stackexchange_api_url: String,
    /// Q&A site filter
    pub stackexchange_site: String,
    /// Ledger RPC base URL (API key is appended as a query parameter)
    pub helius_rpc_url: String,
    /// Ledger RPC API key - NO DEFAULT, must come from the environment
    #[serde(skip_serializing)]
    pub helius_api_key: Option<String>,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent sent on every upstream call
    pub user_agent: String,
    /// Maximum accepted upstream response size in bytes
    pub max_response_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Enable per-request logging
    pub log_requests: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allow any origin, method and header
    pub enable_cors: bool,
    /// Maximum request body size in bytes
    pub max_request_size: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        let http = HttpClientConfig::default();
        Self {
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            stackexchange_api_url: DEFAULT_STACKEXCHANGE_API_URL.to_string(),
            stackexchange_site: DEFAULT_STACKEXCHANGE_SITE.to_string(),
            helius_rpc_url: DEFAULT_HELIUS_RPC_URL.to_string(),
            helius_api_key: None,
            timeout_secs: http.timeout_secs,
            user_agent: http.user_agent,
            max_response_size: http.max_response_size,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8001,
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                log_requests: true,
            },
            security: SecurityConfig {
                enable_cors: true,
                max_request_size: 64 * 1024, // 64KB
            },
        }
    }
}

impl UpstreamConfig {
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
            max_response_size: self.max_response_size,
        }
    }

    pub fn github_url(&self) -> Result<Url> {
        parse_upstream_url("REPUTATION_GITHUB_API_URL", &self.github_api_url)
    }

    pub fn stackexchange_url(&self) -> Result<Url> {
        parse_upstream_url("REPUTATION_STACKEXCHANGE_API_URL", &self.stackexchange_api_url)
    }

    pub fn helius_url(&self) -> Result<Url> {
        parse_upstream_url("REPUTATION_HELIUS_RPC_URL", &self.helius_rpc_url)
    }

    /// Ledger API key in log-safe form, `None` when unset
    pub fn masked_api_key(&self) -> Option<String> {
        self.helius_api_key.as_deref().map(mask_secret)
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables and validate it
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("REPUTATION_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env::var("REPUTATION_PORT") {
            config.server.port = port.parse().context("Invalid REPUTATION_PORT value")?;
        }

        // Upstream configuration
        if let Ok(url) = env::var("REPUTATION_GITHUB_API_URL") {
            config.upstream.github_api_url = url;
        }

        if let Ok(url) = env::var("REPUTATION_STACKEXCHANGE_API_URL") {
            config.upstream.stackexchange_api_url = url;
        }

        if let Ok(site) = env::var("REPUTATION_STACKEXCHANGE_SITE") {
            config.upstream.stackexchange_site = site;
        }

        if let Ok(url) = env::var("REPUTATION_HELIUS_RPC_URL") {
            config.upstream.helius_rpc_url = url;
        }

        config.upstream.helius_api_key = env::var("HELIUS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(timeout) = env::var("REPUTATION_UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = timeout
                .parse()
                .context("Invalid REPUTATION_UPSTREAM_TIMEOUT_SECS value")?;
        }

        if let Ok(user_agent) = env::var("REPUTATION_USER_AGENT") {
            config.upstream.user_agent = user_agent;
        }

        // Logging configuration
        if let Ok(level) = env::var("REPUTATION_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(log_requests) = env::var("REPUTATION_LOG_REQUESTS") {
            config.logging.log_requests = log_requests
                .parse()
                .context("Invalid REPUTATION_LOG_REQUESTS value")?;
        }

        // Inbound limits
        if let Ok(enable_cors) = env::var("REPUTATION_ENABLE_CORS") {
            config.security.enable_cors = enable_cors
                .parse()
                .context("Invalid REPUTATION_ENABLE_CORS value")?;
        }

        if let Ok(size) = env::var("REPUTATION_MAX_REQUEST_SIZE") {
            config.security.max_request_size = size
                .parse()
                .context("Invalid REPUTATION_MAX_REQUEST_SIZE value")?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(anyhow::anyhow!("Server host cannot be empty"));
        }

        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port must be non-zero"));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Upstream timeout must be non-zero"));
        }

        if self.upstream.user_agent.trim().is_empty() {
            return Err(anyhow::anyhow!("Upstream User-Agent cannot be empty"));
        }

        if self.upstream.stackexchange_site.trim().is_empty() {
            return Err(anyhow::anyhow!("Stack Exchange site cannot be empty"));
        }

        if self.security.max_request_size == 0 {
            return Err(anyhow::anyhow!("Maximum request size must be non-zero"));
        }

        self.upstream.github_url()?;
        self.upstream.stackexchange_url()?;
        self.upstream.helius_url()?;

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_upstream_url(name: &str, raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid {} value: {}", name, raw))?;
    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(anyhow::anyhow!(
            "{} must be an http(s) URL, got scheme {}",
            name,
            url.scheme()
        ));
    }
    if url.host_str().is_none() {
        return Err(anyhow::anyhow!("{} must have a valid host: {}", name, raw));
    }
    Ok(url)
}

/// Mask a credential for logging, keeping only a short prefix and suffix
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    } else {
        "***".to_string()
    }
}
