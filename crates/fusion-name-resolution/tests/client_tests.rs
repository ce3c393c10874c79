//! Resolution client behaviour through an in-memory transport

use async_trait::async_trait;
use fusion_name_resolution::{
    BrowserAction, CallerContext, Error, NormalizedName, ResolutionClient, ResolutionOutcome,
    ResolveRequest, ResolverOptions, ResolverTransport, Result,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers by domain name and records every request
#[derive(Default)]
struct RecordingTransport {
    bodies: HashMap<String, Result<String>>,
    requests: Mutex<Vec<ResolveRequest>>,
}

impl RecordingTransport {
    fn with(mut self, domain: &str, body: &str) -> Self {
        self.bodies.insert(domain.to_string(), Ok(body.to_string()));
        self
    }

    fn failing(mut self, domain: &str, error: Error) -> Self {
        self.bodies.insert(domain.to_string(), Err(error));
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.domain_name.clone())
            .collect()
    }
}

#[async_trait]
impl ResolverTransport for RecordingTransport {
    async fn fetch(&self, request: &ResolveRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.bodies
            .get(&request.domain_name)
            .cloned()
            .unwrap_or_else(|| Err(Error::TransportFailure("HTTP 404".to_string())))
    }
}

fn name(text: &str) -> NormalizedName {
    NormalizedName::parse(text).unwrap()
}

#[tokio::test]
async fn test_data_address_wins() {
    let client = ResolutionClient::new(RecordingTransport::default().with(
        "vitalik.eth",
        r#"{"success":true,"data":{"address":"0xABC"},"address":"0xOLD"}"#,
    ));

    let outcome = client.resolve(&name("vitalik.eth"), CallerContext::Field).await;
    assert_eq!(outcome, ResolutionOutcome::Address("0xABC".to_string()));
}

#[tokio::test]
async fn test_legacy_address_fallback() {
    let client = ResolutionClient::new(
        RecordingTransport::default().with("vitalik.eth", r#"{"address":"0xDEF"}"#),
    );

    let outcome = client.resolve(&name("vitalik.eth"), CallerContext::Field).await;
    assert_eq!(outcome, ResolutionOutcome::Address("0xDEF".to_string()));
}

#[tokio::test]
async fn test_one_request_with_fixed_parameters() {
    let transport = Arc::new(
        RecordingTransport::default()
            .with("vitalik.eth:btc", r#"{"success":true,"data":{"address":"bc1q"}}"#),
    );
    let options = ResolverOptions {
        source: "test-suite".to_string(),
        ..ResolverOptions::default()
    };
    let client = ResolutionClient::with_options(transport.clone(), options);

    let outcome = client.resolve_str("vitalik:btc", CallerContext::Field).await;
    assert_eq!(outcome, ResolutionOutcome::Address("bc1q".to_string()));

    let requests = transport.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].domain_name, "vitalik.eth:btc");
    assert_eq!(
        requests[0].query_pairs(),
        [("network", "mainnet"), ("source", "test-suite")]
    );
}

#[tokio::test]
async fn test_chain_lookup_never_becomes_url() {
    let client = ResolutionClient::new(RecordingTransport::default().with(
        "vitalik.eth:sol",
        r#"{"success":true,"data":{"address":"https://not-a-link"}}"#,
    ));

    let outcome = client.resolve(&name("vitalik.eth:sol"), CallerContext::Browser).await;
    assert_eq!(outcome, ResolutionOutcome::Address("https://not-a-link".to_string()));
}

#[tokio::test]
async fn test_x_record_becomes_profile_url() {
    let client = ResolutionClient::new(RecordingTransport::default().with(
        "name.eth:x",
        r#"{"success":true,"data":{"address":"@alice"}}"#,
    ));

    let outcome = client.resolve(&name("name.eth:x"), CallerContext::Field).await;
    assert_eq!(outcome, ResolutionOutcome::Url("https://x.com/alice".to_string()));
}

#[tokio::test]
async fn test_text_record_via_legacy_field() {
    let client = ResolutionClient::new(
        RecordingTransport::default().with("nick.eth:url", r#"{"address":"ens.domains"}"#),
    );

    let outcome = client.resolve(&name("nick.eth:url"), CallerContext::Field).await;
    assert_eq!(outcome, ResolutionOutcome::Url("https://ens.domains".to_string()));
}

#[tokio::test]
async fn test_bio_record_by_context() {
    let client = ResolutionClient::new(RecordingTransport::default().with(
        "name.eth:bio",
        r#"{"success":true,"data":{"address":"hello world"}}"#,
    ));
    let bio = name("name.eth:bio");

    assert_eq!(
        client.resolve(&bio, CallerContext::Field).await,
        ResolutionOutcome::RawText("hello world".to_string())
    );
    assert_eq!(
        client.resolve(&bio, CallerContext::Browser).await,
        ResolutionOutcome::Url("https://google.com/search?q=hello%20world".to_string())
    );
}

#[tokio::test]
async fn test_failures_collapse_to_not_found() {
    let client = ResolutionClient::new(
        RecordingTransport::default()
            .with("empty.eth", "{}")
            .with("garbled.eth", "<html>502</html>")
            .failing("down.eth", Error::TransportFailure("timed out".to_string())),
    );

    for text in ["empty.eth", "garbled.eth", "down.eth", "missing.eth"] {
        let outcome = client.resolve(&name(text), CallerContext::Field).await;
        assert!(outcome.is_not_found(), "{} should be not found", text);
    }
}

#[tokio::test]
async fn test_typed_errors_keep_cause() {
    let client = ResolutionClient::new(
        RecordingTransport::default()
            .with("empty.eth", "{}")
            .with("garbled.eth", "<html>502</html>")
            .failing("down.eth", Error::TransportFailure("timed out".to_string())),
    );

    let empty = client.try_resolve(&name("empty.eth"), CallerContext::Field).await;
    assert!(matches!(empty, Err(Error::NotFound(_))));

    let garbled = client.try_resolve(&name("garbled.eth"), CallerContext::Field).await;
    assert!(matches!(garbled, Err(Error::DecodeFailure(_))));

    let down = client.try_resolve(&name("down.eth"), CallerContext::Field).await;
    assert_eq!(down, Err(Error::TransportFailure("timed out".to_string())));
}

#[tokio::test]
async fn test_invalid_text_never_hits_network() {
    let transport = Arc::new(RecordingTransport::default());
    let client = ResolutionClient::new(transport.clone());

    let result = client.try_resolve_str("not a name", CallerContext::Field).await;
    assert!(matches!(result, Err(Error::InvalidExpression(_))));
    assert!(client.resolve_str("vitalik:nope", CallerContext::Field).await.is_not_found());
    assert!(transport.requested().is_empty());
}

#[tokio::test]
async fn test_text_record_convenience_path() {
    let transport = Arc::new(
        RecordingTransport::default()
            .with("nick.eth.name", r#"{"address":"Nick Johnson"}"#)
            .with(
                "nick.eth.github",
                r#"{"success":true,"data":{"address":"arachnid"}}"#,
            ),
    );
    let client = ResolutionClient::new(transport.clone());

    assert_eq!(
        client.resolve_text_record("nick.eth", "name").await,
        Some("Nick Johnson".to_string())
    );
    assert_eq!(
        client.resolve_text_record("nick.eth.name", "name").await,
        Some("Nick Johnson".to_string())
    );
    // Only the legacy field is read on this path
    assert_eq!(client.resolve_text_record("nick.eth", "github").await, None);

    assert_eq!(
        transport.requested(),
        ["nick.eth.name", "nick.eth.name", "nick.eth.github"]
    );
}

#[tokio::test]
async fn test_text_record_rejects_empty_name() {
    let client = ResolutionClient::new(RecordingTransport::default());
    assert!(matches!(
        client.try_resolve_text_record("  ", "name").await,
        Err(Error::InvalidExpression(_))
    ));
}

#[tokio::test]
async fn test_browser_action_uses_record() {
    let client = ResolutionClient::new(
        RecordingTransport::default().with("nick.eth.github", r#"{"address":"@arachnid"}"#),
    );

    let url = client
        .resolve_for_browser(&name("nick.eth"), BrowserAction::Github)
        .await;
    assert_eq!(url.as_deref(), Some("https://github.com/arachnid"));
}

#[tokio::test]
async fn test_browser_action_falls_back_to_explorer() {
    let client = ResolutionClient::new(RecordingTransport::default().with(
        "nick.eth",
        r#"{"success":true,"data":{"address":"0xb8c2"}}"#,
    ));

    let url = client.resolve_for_browser(&name("nick.eth"), BrowserAction::X).await;
    assert_eq!(url.as_deref(), Some("https://etherscan.io/address/0xb8c2"));

    let url = client
        .resolve_for_browser(&name("nick.eth"), BrowserAction::Etherscan)
        .await;
    assert_eq!(url.as_deref(), Some("https://etherscan.io/address/0xb8c2"));
}

#[tokio::test]
async fn test_browser_action_nothing_found() {
    let client = ResolutionClient::new(RecordingTransport::default());
    let url = client
        .resolve_for_browser(&name("ghost.eth"), BrowserAction::Url)
        .await;
    assert_eq!(url, None);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let client = ResolutionClient::new(
        RecordingTransport::default()
            .with("a.eth", r#"{"success":true,"data":{"address":"0xA"}}"#)
            .with("b.eth", r#"{"success":true,"data":{"address":"0xB"}}"#),
    );
    let (a, b) = (name("a.eth"), name("b.eth"));

    let (ra, rb) = tokio::join!(
        client.resolve(&a, CallerContext::Field),
        client.resolve(&b, CallerContext::Field)
    );
    assert_eq!(ra, ResolutionOutcome::Address("0xA".to_string()));
    assert_eq!(rb, ResolutionOutcome::Address("0xB".to_string()));
}
