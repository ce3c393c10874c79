//! Query and normalized-name types

use crate::matcher::{decompose, ETH_SUFFIX};
use crate::records::{classify_record, is_supported_text_record, RecordClass};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Which grammar a query came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// `name.eth`
    Standard,
    /// `name.eth:chain` or `name:chain`
    MultiChain,
    /// `name.eth:record` or `name:record`
    TextRecord,
}

/// A matched ENS expression, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Literal text that matched
    pub raw_text: String,
    /// Grammar that matched
    pub kind: QueryKind,
    /// Dotted name without `.eth`
    pub base_name: String,
    /// Chain code or record type after `:`
    pub qualifier: Option<String>,
}

impl Query {
    pub(crate) fn standard(raw: &str, base: &str) -> Self {
        Self {
            raw_text: raw.to_string(),
            kind: QueryKind::Standard,
            base_name: base.to_string(),
            qualifier: None,
        }
    }

    pub(crate) fn qualified(raw: &str, base: &str, qualifier: &str) -> Self {
        let kind = if is_supported_text_record(qualifier) {
            QueryKind::TextRecord
        } else {
            QueryKind::MultiChain
        };
        Self {
            raw_text: raw.to_string(),
            kind,
            base_name: base.to_string(),
            qualifier: Some(qualifier.to_string()),
        }
    }

    /// Canonical `base.eth[:qualifier]` string
    pub fn canonical(&self) -> String {
        match &self.qualifier {
            Some(qualifier) => format!("{}{}:{}", self.base_name, ETH_SUFFIX, qualifier),
            None => format!("{}{}", self.base_name, ETH_SUFFIX),
        }
    }
}

/// Canonical resolvable name: `base.eth` or `base.eth:qualifier`
///
/// Built once from a validated [`Query`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    canonical: String,
    query: Query,
}

impl NormalizedName {
    pub(crate) fn from_query(query: Query) -> Self {
        Self {
            canonical: query.canonical(),
            query,
        }
    }

    /// Parse a standalone expression (standard, full or shortcut form)
    pub fn parse(text: &str) -> Result<Self> {
        decompose(text)
            .map(Self::from_query)
            .ok_or_else(|| Error::InvalidExpression(text.trim().to_string()))
    }

    /// Canonical string
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Underlying query
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Qualifier after `:`, if any
    pub fn qualifier(&self) -> Option<&str> {
        self.query.qualifier.as_deref()
    }

    /// Name without any qualifier, e.g. `vitalik.eth`
    pub fn base_with_suffix(&self) -> String {
        format!("{}{}", self.query.base_name, ETH_SUFFIX)
    }

    /// Classification of the qualifier, `None` for standard names
    pub fn record_class(&self) -> Option<RecordClass> {
        self.qualifier().map(classify_record)
    }

    /// True when the qualifier names a text record
    pub fn is_text_record(&self) -> bool {
        self.query.kind == QueryKind::TextRecord
    }

    /// Consume into the canonical string
    pub fn into_string(self) -> String {
        self.canonical
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for NormalizedName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NormalizedName> for String {
    fn from(name: NormalizedName) -> Self {
        name.canonical
    }
}
