//! HTTP transport for the resolver
//!
//! One GET per request; non-2xx statuses are transport failures.

use crate::{Error, ResolverConfig, Result};
use async_trait::async_trait;
use fusion_name_resolution::{ResolveRequest, ResolverTransport};
use tracing::{debug, info, warn};

/// reqwest-backed [`ResolverTransport`]
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ResolverConfig,
}

impl HttpTransport {
    /// Build a transport from config
    pub fn new(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        info!("Creating resolver transport: {}", config.base_url);

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone());

        if let Some(ref proxy) = config.proxy {
            let proxy_url = proxy.proxy_url();
            debug!("Using SOCKS5 proxy {}:{}", proxy.host, proxy.port);
            let proxy = reqwest::Proxy::all(&proxy_url)
                .map_err(|e| Error::Proxy(format!("Failed to create SOCKS5 proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Current configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    async fn get(&self, request: &ResolveRequest) -> Result<String> {
        let url = self.config.endpoint_url(request);
        debug!(
            name = %request.domain_name,
            network = %request.network,
            source = %request.source,
            "GET {}",
            url
        );

        let response = self
            .client
            .get(&url)
            .query(&request.query_pairs())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Resolver returned {} for {}", status, request.domain_name);
            return Err(Error::Http(format!("Resolver returned status {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response: {}", e)))
    }
}

#[async_trait]
impl ResolverTransport for HttpTransport {
    async fn fetch(&self, request: &ResolveRequest) -> fusion_name_resolution::Result<String> {
        Ok(self.get(request).await?)
    }
}
