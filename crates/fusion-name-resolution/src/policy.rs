//! Record-type policy
//!
//! Maps resolved text-record values to URLs or raw text depending on the
//! record type and where the caller will use the result.

use crate::matcher::{extract_candidate, is_valid_ens_expression};
use crate::name::NormalizedName;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::str::FromStr;

/// Default search endpoint for records that are not links
pub const DEFAULT_SEARCH_URL: &str = "https://google.com/search?q=";

/// Default block explorer address page
pub const DEFAULT_EXPLORER_URL: &str = "https://etherscan.io/address/";

/// Everything except RFC 3986 unreserved characters
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Where the caller will use the outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallerContext {
    /// Result replaces text in an input field
    #[default]
    Field,
    /// Result is opened in a browser
    Browser,
}

/// Final result of a resolution call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Blockchain address
    Address(String),
    /// Link to open
    Url(String),
    /// Text to insert as-is
    RawText(String),
    /// Nothing usable
    NotFound,
}

impl ResolutionOutcome {
    /// Inner value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Address(v) | Self::Url(v) | Self::RawText(v) => Some(v),
            Self::NotFound => None,
        }
    }

    /// True for [`ResolutionOutcome::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Consume into the inner value
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Address(v) | Self::Url(v) | Self::RawText(v) => Some(v),
            Self::NotFound => None,
        }
    }
}

fn strip_at(handle: &str) -> &str {
    handle.strip_prefix('@').unwrap_or(handle)
}

/// Ensure a link carries an `http://` or `https://` scheme
pub fn with_https(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}

/// Search URL for arbitrary text
pub fn search_url(search_base: &str, value: &str) -> String {
    format!(
        "{}{}",
        search_base,
        utf8_percent_encode(value, QUERY_ENCODE_SET)
    )
}

/// Link for a record that is inherently a link (`x`, `url`, `github`)
pub fn link_for_record(record_type: &str, value: &str) -> Option<String> {
    match record_type.to_ascii_lowercase().as_str() {
        "x" => Some(format!("https://x.com/{}", strip_at(value))),
        "url" => Some(with_https(value)),
        "github" => Some(format!("https://github.com/{}", strip_at(value))),
        _ => None,
    }
}

/// Apply text-record policy to a resolved value
///
/// `x`, `url` and `github` always become links. Every other record type
/// (including unknown ones) stays raw text when inserted into a field and
/// becomes a search link when opened in a browser.
pub fn transform_text_record(
    record_type: &str,
    value: &str,
    context: CallerContext,
    search_base: &str,
) -> ResolutionOutcome {
    if let Some(link) = link_for_record(record_type, value) {
        return ResolutionOutcome::Url(link);
    }

    match context {
        CallerContext::Field => ResolutionOutcome::RawText(value.to_string()),
        CallerContext::Browser => ResolutionOutcome::Url(search_url(search_base, value)),
    }
}

/// Default browser action preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserAction {
    /// Open the resolved address on the block explorer
    #[default]
    Etherscan,
    /// Open the `url` text record
    Url,
    /// Open the `github` text record
    Github,
    /// Open the `x` text record
    X,
}

impl BrowserAction {
    /// Text record consulted first, `None` for the explorer action
    pub fn record_type(&self) -> Option<&'static str> {
        match self {
            Self::Etherscan => None,
            Self::Url => Some("url"),
            Self::Github => Some("github"),
            Self::X => Some("x"),
        }
    }

    /// Preference string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Etherscan => "etherscan",
            Self::Url => "url",
            Self::Github => "github",
            Self::X => "x",
        }
    }

    /// Parse a stored preference, falling back to the explorer
    pub fn from_preference(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for BrowserAction {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "etherscan" => Ok(Self::Etherscan),
            "url" => Ok(Self::Url),
            "github" => Ok(Self::Github),
            "x" => Ok(Self::X),
            other => Err(crate::Error::InvalidExpression(format!(
                "unknown browser action: {}",
                other
            ))),
        }
    }
}

/// Caller-owned switches that gate resolution while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoResolveSettings {
    /// Resolve automatically while typing
    pub enabled: bool,
}

impl Default for AutoResolveSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Decide whether typed text should be resolved now
///
/// The whole trimmed text must be one valid expression, and its candidate
/// must differ from `last_resolved` (the caller's debounce input).
pub fn auto_resolve_candidate(
    text: &str,
    settings: &AutoResolveSettings,
    last_resolved: Option<&str>,
) -> Option<NormalizedName> {
    if !settings.enabled || !is_valid_ens_expression(text) {
        return None;
    }

    let trimmed = text.trim();
    if last_resolved.is_some_and(|last| last.trim() == trimmed) {
        return None;
    }

    extract_candidate(trimmed).filter(|name| last_resolved != Some(name.as_str()))
}
