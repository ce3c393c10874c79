//! Supported chain codes and text-record types

/// Chain codes accepted after `:` (lower-case)
pub const SUPPORTED_CHAINS: [&str; 14] = [
    "btc", "eth", "sol", "doge", "xrp", "ltc", "ada", "dot", "avax", "matic", "base", "arb",
    "op", "bsc",
];

/// Text-record types accepted after `:` (lower-case)
pub const SUPPORTED_TEXT_RECORDS: [&str; 6] = ["x", "url", "github", "name", "bio", "description"];

/// Popular subdomain suffixes offered for quick insertion
pub const SUBDOMAIN_SUFFIXES: [&str; 4] = [".base.eth", ".uni.eth", ".dao.eth", ".ens.eth"];

/// Qualifier suffixes offered for quick insertion
pub const QUICK_QUALIFIERS: [&str; 12] = [
    ":btc", ":sol", ":doge", ":xrp", ":ltc", ":ada", ":dot", ":url", ":x", ":github", ":name",
    ":bio",
];

/// What a qualifier names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordClass {
    /// Chain code; resolves to an address
    Chain,
    /// Text record; resolves to raw text
    TextRecord,
    /// Neither set
    Unknown,
}

/// Check a chain code (case-insensitive)
pub fn is_supported_chain(code: &str) -> bool {
    SUPPORTED_CHAINS
        .iter()
        .any(|chain| chain.eq_ignore_ascii_case(code))
}

/// Check a text-record type (case-insensitive)
pub fn is_supported_text_record(code: &str) -> bool {
    SUPPORTED_TEXT_RECORDS
        .iter()
        .any(|record| record.eq_ignore_ascii_case(code))
}

/// Check membership in either set
pub fn is_supported_qualifier(code: &str) -> bool {
    is_supported_chain(code) || is_supported_text_record(code)
}

/// Classify a qualifier. The two sets are checked independently; a code in
/// both would classify as a chain.
pub fn classify_record(qualifier: &str) -> RecordClass {
    if is_supported_chain(qualifier) {
        RecordClass::Chain
    } else if is_supported_text_record(qualifier) {
        RecordClass::TextRecord
    } else {
        RecordClass::Unknown
    }
}

/// Supported chain codes in display order
pub fn get_supported_chains() -> Vec<String> {
    SUPPORTED_CHAINS.iter().map(|c| c.to_string()).collect()
}

/// Supported text-record types in display order
pub fn get_supported_text_records() -> Vec<String> {
    SUPPORTED_TEXT_RECORDS.iter().map(|r| r.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_record() {
        assert_eq!(classify_record("btc"), RecordClass::Chain);
        assert_eq!(classify_record("BTC"), RecordClass::Chain);
        assert_eq!(classify_record("x"), RecordClass::TextRecord);
        assert_eq!(classify_record("Github"), RecordClass::TextRecord);
        assert_eq!(classify_record("avatar"), RecordClass::Unknown);
        assert_eq!(classify_record(""), RecordClass::Unknown);
    }

    #[test]
    fn test_sets_are_disjoint() {
        for chain in SUPPORTED_CHAINS {
            assert!(!is_supported_text_record(chain), "{} in both sets", chain);
        }
    }

    #[test]
    fn test_supported_lists_keep_order() {
        let chains = get_supported_chains();
        assert_eq!(chains.first().map(String::as_str), Some("btc"));
        assert_eq!(chains.last().map(String::as_str), Some("bsc"));
        assert_eq!(get_supported_text_records().len(), 6);
    }

    #[test]
    fn test_quick_qualifiers_are_supported() {
        for quick in QUICK_QUALIFIERS {
            let code = quick.trim_start_matches(':');
            assert!(is_supported_qualifier(code), "{} unsupported", quick);
        }
    }

    #[test]
    fn test_subdomain_suffixes_end_with_eth() {
        for suffix in SUBDOMAIN_SUFFIXES {
            assert!(suffix.starts_with('.') && suffix.ends_with(".eth"));
        }
    }
}
