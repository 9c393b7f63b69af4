//! Configuration for twist-mcp
//!
//! Values come from command-line flags, falling back to environment
//! variables:
//! 1. `TWIST_API_TOKEN` - bearer token (required)
//! 2. `TWIST_WORKSPACE_ID` - default workspace for workspace-scoped tools
//! 3. `TWIST_API_BASE_URL` - API root (default `https://api.twist.com/api/v3/`)
//! 4. `TWIST_TIMEOUT_SECS` - per-request timeout (default 30)
//!
//! Everything is resolved once into an immutable [`TwistConfig`].

use std::fmt;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

pub const TOKEN_ENV: &str = "TWIST_API_TOKEN";
pub const WORKSPACE_ENV: &str = "TWIST_WORKSPACE_ID";
pub const DEFAULT_BASE_URL: &str = "https://api.twist.com/api/v3/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Command-line interface of the `twist-mcp` binary
#[derive(Debug, Clone, Parser)]
#[command(name = "twist-mcp", version, about = "MCP server for Twist threads and inbox")]
pub struct Cli {
    /// Twist API bearer token
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub api_token: Option<String>,

    /// Workspace used when a workspace-scoped tool is called without one
    #[arg(long, env = WORKSPACE_ENV)]
    pub workspace_id: Option<i64>,

    /// Root URL of the Twist API
    #[arg(long, env = "TWIST_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Timeout for each outbound request, in seconds
    #[arg(long, env = "TWIST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

/// Errors that stop the server from starting
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TWIST_API_TOKEN environment variable is required")]
    MissingToken,

    #[error("invalid Twist API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Process-wide settings shared read-only by every tool call
#[derive(Clone, PartialEq, Eq)]
pub struct TwistConfig {
    api_token: String,
    default_workspace_id: Option<i64>,
    base_url: String,
    timeout: Duration,
}

impl TwistConfig {
    /// Config with the given token and defaults for everything else
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            default_workspace_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_default_workspace(mut self, workspace_id: i64) -> Self {
        self.default_workspace_id = Some(workspace_id);
        self
    }

    /// Override the API root. A trailing `/` is appended when missing so
    /// endpoints can be joined by plain concatenation.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the config from parsed CLI/env values
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let token = cli
            .api_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        if cli.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        reqwest::Url::parse(&cli.api_base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: cli.api_base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut config = Self::new(token)
            .with_base_url(cli.api_base_url)
            .with_timeout(Duration::from_secs(cli.timeout_secs));
        config.default_workspace_id = cli.workspace_id;

        Ok(config)
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn default_workspace_id(&self) -> Option<i64> {
        self.default_workspace_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Keeps the token out of logs.
impl fmt::Debug for TwistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwistConfig")
            .field("api_token", &"<redacted>")
            .field("default_workspace_id", &self.default_workspace_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
