//! Resolver network layer
//!
//! HTTP(S) transport for the Fusion ENS resolver, its endpoint
//! configuration, and an optional SOCKS5 proxy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod http;

// Re-export main types
pub use config::{ProxyConfig, ResolverConfig, ResolverConfigStorage};
pub use error::{Error, Result};
pub use http::HttpTransport;
