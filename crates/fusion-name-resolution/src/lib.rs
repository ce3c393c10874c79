//! ENS name recognition and resolution
//!
//! Detects ENS-like expressions (`name.eth`, `name.eth:chain`, `name:chain`,
//! `name.eth:record`) in free text, normalizes them, and turns resolver
//! responses into addresses, URLs or raw text according to record-type policy.
//!
//! Network access goes through the [`ResolverTransport`] trait so the core
//! stays free of I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod matcher;
pub mod name;
pub mod policy;
pub mod records;
pub mod response;
pub mod suggestions;
pub mod transport;

pub use client::{ResolutionClient, ResolverOptions};
pub use error::{Error, Result};
pub use matcher::{extract_candidate, is_valid_ens_expression, is_valid_ens_name};
pub use name::{NormalizedName, Query, QueryKind};
pub use policy::{
    auto_resolve_candidate, transform_text_record, AutoResolveSettings, BrowserAction,
    CallerContext, ResolutionOutcome,
};
pub use records::{
    classify_record, get_supported_chains, get_supported_text_records, is_supported_chain,
    is_supported_text_record, RecordClass, QUICK_QUALIFIERS, SUBDOMAIN_SUFFIXES,
    SUPPORTED_CHAINS, SUPPORTED_TEXT_RECORDS,
};
pub use response::{ResolverData, ResolverResponse};
pub use suggestions::{filter_suggestions, RecentNames, POPULAR_NAMES};
pub use transport::{ResolveRequest, ResolverTransport};
