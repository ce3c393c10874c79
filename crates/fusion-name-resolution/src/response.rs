//! Resolver wire response
//!
//! Every field is optional. The nested `data.address` is preferred; the
//! top-level `address` is a deprecated fallback channel.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Nested payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverData {
    /// Resolved address or text value
    #[serde(default)]
    pub address: Option<String>,
}

/// Loosely-typed resolver response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverResponse {
    /// Success flag
    #[serde(default)]
    pub success: Option<bool>,
    /// Nested payload
    #[serde(default)]
    pub data: Option<ResolverData>,
    /// Legacy top-level value
    #[serde(default)]
    pub address: Option<String>,
    /// Resolver-reported error
    #[serde(default)]
    pub error: Option<String>,
}

/// Which channel a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// `success == true` and `data.address`
    Data,
    /// Top-level `address`
    Legacy,
}

impl ResolverResponse {
    /// Decode a response body
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::DecodeFailure(e.to_string()))
    }

    /// Nested value, only when the resolver reported success
    pub fn data_address(&self) -> Option<&str> {
        if self.success != Some(true) {
            return None;
        }
        self.data
            .as_ref()
            .and_then(|data| data.address.as_deref())
            .filter(|value| !value.trim().is_empty())
    }

    /// Top-level fallback value
    pub fn legacy_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    /// Pick the usable value: `data.address` on success, else legacy `address`
    pub fn resolved_value(&self) -> Option<(&str, ValueSource)> {
        self.data_address()
            .map(|value| (value, ValueSource::Data))
            .or_else(|| {
                self.legacy_address()
                    .map(|value| (value, ValueSource::Legacy))
            })
    }
}
