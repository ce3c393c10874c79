//! Resolver endpoint configuration
//!
//! Plain serde types; the caller decides where the JSON lives.

use crate::{Error, Result};
use fusion_name_resolution::ResolveRequest;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default resolver base URL
pub const DEFAULT_RESOLVER_URL: &str = "https://api.fusionens.com/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment override for the base URL
pub const ENV_RESOLVER_URL: &str = "FUSION_RESOLVER_URL";

/// Environment override for the timeout
pub const ENV_RESOLVER_TIMEOUT_SECS: &str = "FUSION_RESOLVER_TIMEOUT_SECS";

/// Everything but RFC 3986 unreserved characters is escaped in userinfo
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// SOCKS5 proxy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy host
    pub host: String,
    /// Proxy port
    pub port: u16,
    /// Username (optional)
    #[serde(default)]
    pub username: Option<String>,
    /// Password (optional)
    #[serde(default)]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Create new proxy config
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            username: None,
            password: None,
        }
    }

    /// With authentication
    pub fn with_auth(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(password);
        self
    }

    /// Proxy URL; `socks5h` so names resolve on the proxy side
    pub fn proxy_url(&self) -> String {
        if let (Some(user), Some(pass)) = (&self.username, &self.password) {
            format!(
                "socks5h://{}:{}@{}:{}",
                utf8_percent_encode(user, USERINFO),
                utf8_percent_encode(pass, USERINFO),
                self.host,
                self.port
            )
        } else {
            format!("socks5h://{}:{}", self.host, self.port)
        }
    }
}

/// Resolver endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base URL, e.g. `https://api.fusionens.com/`
    pub base_url: String,
    /// Whole-request timeout
    pub timeout_secs: u64,
    /// User-Agent header
    pub user_agent: String,
    /// Optional SOCKS5 proxy
    pub proxy: Option<ProxyConfig>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RESOLVER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("fusion-net/{}", env!("CARGO_PKG_VERSION")),
            proxy: None,
        }
    }
}

impl ResolverConfig {
    /// Defaults overlaid with `FUSION_RESOLVER_URL` / `FUSION_RESOLVER_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(ENV_RESOLVER_URL) {
            self.base_url = url;
        }
        if let Some(secs) = lookup(ENV_RESOLVER_TIMEOUT_SECS) {
            self.timeout_secs = secs.trim().parse().map_err(|e| {
                Error::Config(format!("{}={:?}: {}", ENV_RESOLVER_TIMEOUT_SECS, secs, e))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "base_url must be http(s): {}",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL for a request, without the query string
    pub fn endpoint_url(&self, request: &ResolveRequest) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}", base, request.path())
    }
}

/// Configuration storage manager
pub struct ResolverConfigStorage {
    config: ResolverConfig,
}

impl ResolverConfigStorage {
    /// Create new config storage
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Load configuration from JSON
    pub fn load(&mut self, json: &str) -> Result<()> {
        let config: ResolverConfig = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Serialize configuration to JSON
    pub fn save(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Get current configuration
    pub fn get(&self) -> &ResolverConfig {
        &self.config
    }

    /// Update configuration
    pub fn update(&mut self, config: ResolverConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}

impl Default for ResolverConfigStorage {
    fn default() -> Self {
        Self::new()
    }
}
