//! Name suggestions
//!
//! The recent-names list is caller-owned; [`RecentNames`] is a plain value
//! the caller persists however it likes.

use serde::{Deserialize, Serialize};

/// Maximum suggestions shown and recent names kept
pub const MAX_SUGGESTIONS: usize = 10;

/// Names always offered
pub const POPULAR_NAMES: [&str; 5] = [
    "vitalik.eth",
    "ethereum.eth",
    "uniswap.eth",
    "opensea.eth",
    "ens.eth",
];

/// Recently resolved names, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentNames {
    names: Vec<String>,
}

impl RecentNames {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved name, moving it to the front
    pub fn record(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.names.retain(|existing| existing != name);
        self.names.insert(0, name.to_string());
        self.names.truncate(MAX_SUGGESTIONS);
    }

    /// Names, most recent first
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Suggestions for the current input
///
/// Popular names then recent names, filtered by case-insensitive substring
/// when `typed` is non-empty, de-duplicated, at most [`MAX_SUGGESTIONS`].
pub fn filter_suggestions(recent: &RecentNames, typed: &str) -> Vec<String> {
    let needle = typed.trim().to_lowercase();
    let mut out: Vec<String> = Vec::new();

    for candidate in POPULAR_NAMES {
        offer(&mut out, candidate, &needle);
    }
    for candidate in recent.names() {
        offer(&mut out, candidate, &needle);
    }
    out
}

fn offer(out: &mut Vec<String>, candidate: &str, needle: &str) {
    if out.len() == MAX_SUGGESTIONS {
        return;
    }
    if !needle.is_empty() && !candidate.to_lowercase().contains(needle) {
        return;
    }
    if !out.iter().any(|seen| seen == candidate) {
        out.push(candidate.to_string());
    }
}
