//! Resolution client
//!
//! Turns a [`NormalizedName`] into a [`ResolutionOutcome`] with one request
//! through the injected [`ResolverTransport`]. The client holds no mutable
//! state, so concurrent calls are independent.

use crate::name::NormalizedName;
use crate::policy::{
    link_for_record, search_url, transform_text_record, BrowserAction, CallerContext,
    ResolutionOutcome, DEFAULT_EXPLORER_URL, DEFAULT_SEARCH_URL,
};
use crate::response::{ResolverResponse, ValueSource};
use crate::transport::{ResolveRequest, ResolverTransport};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Record type used by [`ResolutionClient::resolve_text_record`] when none is given
pub const DEFAULT_TEXT_RECORD: &str = "name";

/// Request and policy options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// `network` query parameter
    pub network: String,
    /// `source` query parameter identifying this client
    pub source: String,
    /// Search endpoint prefix for non-link text records in a browser
    pub search_url: String,
    /// Explorer prefix for opening addresses in a browser
    pub explorer_url: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            network: "mainnet".to_string(),
            source: "android".to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
        }
    }
}

/// ENS resolution client
pub struct ResolutionClient<T> {
    transport: T,
    options: ResolverOptions,
}

impl<T: ResolverTransport> ResolutionClient<T> {
    /// Create a client with default options
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, ResolverOptions::default())
    }

    /// Create a client with explicit options
    pub fn with_options(transport: T, options: ResolverOptions) -> Self {
        Self { transport, options }
    }

    /// Current options
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, domain_name: &str) -> ResolveRequest {
        ResolveRequest::new(domain_name, &self.options.network, &self.options.source)
    }

    async fn fetch_response(&self, domain_name: &str) -> Result<ResolverResponse> {
        let request = self.request(domain_name);
        debug!("Resolving {} via {}", domain_name, request.path());

        let body = self.transport.fetch(&request).await?;
        let response = ResolverResponse::from_json(&body)?;

        if let Some(error) = &response.error {
            debug!("Resolver reported error for {}: {}", domain_name, error);
        }
        Ok(response)
    }

    /// Resolve a name, keeping the failure cause
    ///
    /// Text-record queries go through [`transform_text_record`]; everything
    /// else resolves to an address, whatever chain was asked for.
    pub async fn try_resolve(
        &self,
        name: &NormalizedName,
        context: CallerContext,
    ) -> Result<ResolutionOutcome> {
        let response = self.fetch_response(name.as_str()).await?;

        let Some((value, source)) = response.resolved_value() else {
            return Err(Error::NotFound(
                response.error.clone().unwrap_or_else(|| name.to_string()),
            ));
        };
        if source == ValueSource::Legacy {
            debug!("Using legacy address field for {}", name);
        }

        match name.qualifier() {
            Some(record_type) if name.is_text_record() => Ok(transform_text_record(
                record_type,
                value,
                context,
                &self.options.search_url,
            )),
            _ => {
                debug!("Resolved {} -> {}", name, value);
                Ok(ResolutionOutcome::Address(value.to_string()))
            }
        }
    }

    /// Resolve a name; every failure becomes [`ResolutionOutcome::NotFound`]
    pub async fn resolve(&self, name: &NormalizedName, context: CallerContext) -> ResolutionOutcome {
        match self.try_resolve(name, context).await {
            Ok(outcome) => outcome,
            Err(e) => {
                if e.is_operational() {
                    warn!("Resolution of {} failed: {}", name, e);
                } else {
                    debug!("Resolution of {} found nothing: {}", name, e);
                }
                ResolutionOutcome::NotFound
            }
        }
    }

    /// Parse then resolve; invalid text never reaches the network
    pub async fn try_resolve_str(
        &self,
        text: &str,
        context: CallerContext,
    ) -> Result<ResolutionOutcome> {
        let name = NormalizedName::parse(text)?;
        self.try_resolve(&name, context).await
    }

    /// Collapsed form of [`Self::try_resolve_str`]
    pub async fn resolve_str(&self, text: &str, context: CallerContext) -> ResolutionOutcome {
        match NormalizedName::parse(text) {
            Ok(name) => self.resolve(&name, context).await,
            Err(e) => {
                debug!("{}", e);
                ResolutionOutcome::NotFound
            }
        }
    }

    /// Fetch a text record as `name.record_type`, reading only the legacy
    /// top-level `address` field
    pub async fn try_resolve_text_record(&self, name: &str, record_type: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidExpression("empty name".to_string()));
        }

        let suffix = format!(".{}", record_type);
        let full_name = if name.ends_with(&suffix) {
            name.to_string()
        } else {
            format!("{}{}", name, suffix)
        };

        let response = self.fetch_response(&full_name).await?;
        response
            .legacy_address()
            .map(str::to_string)
            .ok_or(Error::NotFound(full_name))
    }

    /// Collapsed form of [`Self::try_resolve_text_record`]
    pub async fn resolve_text_record(&self, name: &str, record_type: &str) -> Option<String> {
        match self.try_resolve_text_record(name, record_type).await {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Text record {} for {} unavailable: {}", record_type, name, e);
                None
            }
        }
    }

    /// URL to open for `name` under the caller's default browser action
    ///
    /// Record-based actions fall back to the explorer when the record is
    /// absent.
    pub async fn resolve_for_browser(
        &self,
        name: &NormalizedName,
        action: BrowserAction,
    ) -> Option<String> {
        if let Some(record_type) = action.record_type() {
            if let Some(value) = self.resolve_text_record(name.as_str(), record_type).await {
                return link_for_record(record_type, &value);
            }
            debug!("No {} record for {}, falling back to explorer", record_type, name);
        }

        match self.resolve(name, CallerContext::Browser).await {
            ResolutionOutcome::Address(address) => {
                Some(format!("{}{}", self.options.explorer_url, address))
            }
            ResolutionOutcome::Url(url) => Some(url),
            ResolutionOutcome::RawText(text) => Some(search_url(&self.options.search_url, &text)),
            ResolutionOutcome::NotFound => None,
        }
    }
}
