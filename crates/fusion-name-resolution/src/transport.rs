//! Transport seam
//!
//! The client issues exactly one GET per resolution:
//! `GET {base}/resolve/{domainName}?network=..&source=..`.
//! Implementations return the raw body; decoding stays in the client.

use crate::Result;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'[')
    .add(b']');

/// One resolver request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Name passed as the path parameter
    pub domain_name: String,
    /// `network` query parameter
    pub network: String,
    /// `source` query parameter (client tag)
    pub source: String,
}

impl ResolveRequest {
    /// Create a request
    pub fn new(
        domain_name: impl Into<String>,
        network: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            network: network.into(),
            source: source.into(),
        }
    }

    /// Path relative to the resolver base URL
    pub fn path(&self) -> String {
        format!(
            "resolve/{}",
            utf8_percent_encode(&self.domain_name, PATH_SEGMENT)
        )
    }

    /// Fixed query parameters
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("network", self.network.as_str()),
            ("source", self.source.as_str()),
        ]
    }
}

/// Abstract network transport
///
/// Implementations must honor cancellation by the host executor: dropping
/// the future abandons the request.
#[async_trait]
pub trait ResolverTransport: Send + Sync {
    /// Perform the GET and return the response body.
    ///
    /// Network, timeout and non-success status failures map to
    /// [`crate::Error::TransportFailure`].
    async fn fetch(&self, request: &ResolveRequest) -> Result<String>;
}

#[async_trait]
impl<T: ResolverTransport + ?Sized> ResolverTransport for std::sync::Arc<T> {
    async fn fetch(&self, request: &ResolveRequest) -> Result<String> {
        (**self).fetch(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path() {
        let request = ResolveRequest::new("vitalik.eth:btc", "mainnet", "android");
        assert_eq!(request.path(), "resolve/vitalik.eth:btc");
    }

    #[test]
    fn test_request_path_escapes() {
        let request = ResolveRequest::new("a/b?c.eth", "mainnet", "android");
        assert_eq!(request.path(), "resolve/a%2Fb%3Fc.eth");

        let request = ResolveRequest::new("名前.eth", "mainnet", "android");
        assert_eq!(request.path(), "resolve/%E5%90%8D%E5%89%8D.eth");
    }

    #[test]
    fn test_query_pairs() {
        let request = ResolveRequest::new("vitalik.eth", "mainnet", "android");
        assert_eq!(
            request.query_pairs(),
            [("network", "mainnet"), ("source", "android")]
        );
    }
}
