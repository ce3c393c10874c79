//! ENS expression matching
//!
//! Two entry points:
//! - [`is_valid_ens_expression`] checks that a whole (trimmed) string is one
//!   complete expression.
//! - [`extract_candidate`] searches free text for the best single candidate
//!   using an ordered list of grammars.
//!
//! Labels accept Unicode letters, marks and numbers plus inner hyphens.
//! Qualifiers must name a supported chain or text record.

use crate::name::{NormalizedName, Query};
use crate::records::is_supported_qualifier;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Maximum characters per dot-separated label
pub const MAX_LABEL_LENGTH: usize = 63;

/// Suffix every canonical name carries
pub const ETH_SUFFIX: &str = ".eth";

/// Separator between name and qualifier in the full form
pub const FULL_FORM_SEPARATOR: &str = ".eth:";

/// Shortcut expressions must be longer than this (in chars)
const SHORTCUT_MIN_EXCLUSIVE: usize = 3;

/// Standard expressions must be longer than this (in chars)
const STANDARD_MIN_EXCLUSIVE: usize = 4;

/// One label: no leading/trailing hyphen, no dots
static LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N}\p{M}](?:[\p{L}\p{N}\p{M}\-]*[\p{L}\p{N}\p{M}])?$")
        .expect("label pattern is valid")
});

/// Search fragment for a dotted name (subdomains allowed)
const NAME_FRAGMENT: &str = r"([\p{L}\p{N}\p{M}](?:[\p{L}\p{N}\p{M}\-.]*[\p{L}\p{N}\p{M}])?)";

static FULL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\.eth:([a-zA-Z0-9]+)", NAME_FRAGMENT))
        .expect("full-form pattern is valid")
});

static SHORTCUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}:([a-zA-Z0-9]+)", NAME_FRAGMENT))
        .expect("shortcut pattern is valid")
});

static STANDARD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\.eth\b", NAME_FRAGMENT)).expect("standard pattern is valid")
});

/// Surface form a grammar recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    /// `name.eth:qualifier`
    Full,
    /// `name:qualifier`, `.eth` inserted on normalization
    Shortcut,
    /// `name.eth`
    Standard,
}

/// A search grammar: pattern plus the form it produces
struct Grammar {
    form: Form,
    pattern: &'static Lazy<Regex>,
}

/// Grammars in priority order. The full form comes first so the shortcut
/// pattern never claims the `label:qualifier` tail of `label.eth:qualifier`.
static GRAMMARS: [Grammar; 3] = [
    Grammar {
        form: Form::Full,
        pattern: &FULL_RE,
    },
    Grammar {
        form: Form::Shortcut,
        pattern: &SHORTCUT_RE,
    },
    Grammar {
        form: Form::Standard,
        pattern: &STANDARD_RE,
    },
];

impl Grammar {
    /// First match of this grammar in `text`, if its parts validate
    ///
    /// Only the leftmost match is considered; an invalid one hands over to
    /// the next grammar rather than to a later match of the same pattern.
    fn find(&self, text: &str) -> Option<Query> {
        self.pattern
            .captures(text)
            .and_then(|caps| self.accept(&caps))
    }

    fn accept(&self, caps: &Captures<'_>) -> Option<Query> {
        let raw = caps.get(0)?.as_str();
        let base = caps.get(1)?.as_str();
        if !is_valid_ens_name(base) {
            return None;
        }

        match self.form {
            Form::Standard => Some(Query::standard(raw, base)),
            Form::Full | Form::Shortcut => {
                let qualifier = caps.get(2)?.as_str();
                if !is_supported_qualifier(qualifier) {
                    return None;
                }
                Some(Query::qualified(raw, base, qualifier))
            }
        }
    }
}

/// Validate a dotted ENS name without the `.eth` suffix
///
/// Every label must be 1-63 characters of letters, marks or numbers, with
/// hyphens allowed only between them.
pub fn is_valid_ens_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    name.split('.').all(|label| {
        !label.is_empty()
            && label.chars().count() <= MAX_LABEL_LENGTH
            && LABEL_RE.is_match(label)
    })
}

/// Split a complete expression into its parts, or `None` if invalid
pub(crate) fn decompose(text: &str) -> Option<Query> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();

    if trimmed.ends_with(ETH_SUFFIX) && len > STANDARD_MIN_EXCLUSIVE {
        let base = &trimmed[..trimmed.len() - ETH_SUFFIX.len()];
        return is_valid_ens_name(base).then(|| Query::standard(trimmed, base));
    }

    if trimmed.contains(FULL_FORM_SEPARATOR) {
        let parts: Vec<&str> = trimmed.split(FULL_FORM_SEPARATOR).collect();
        if let [base, qualifier] = parts.as_slice() {
            return qualified(trimmed, base, qualifier);
        }
    }

    if trimmed.contains(':') && !trimmed.contains(ETH_SUFFIX) && len > SHORTCUT_MIN_EXCLUSIVE {
        let parts: Vec<&str> = trimmed.split(':').collect();
        if let [base, qualifier] = parts.as_slice() {
            return qualified(trimmed, base, qualifier);
        }
    }

    None
}

fn qualified(raw: &str, base: &str, qualifier: &str) -> Option<Query> {
    (is_valid_ens_name(base) && is_supported_qualifier(qualifier))
        .then(|| Query::qualified(raw, base, qualifier))
}

/// Check whether `text` (trimmed) is exactly one valid ENS expression
///
/// Accepts `name.eth`, `name.eth:qualifier` and the shortcut `name:qualifier`
/// (only when `.eth` appears nowhere in the text). More than one separator
/// makes the expression invalid.
pub fn is_valid_ens_expression(text: &str) -> bool {
    decompose(text).is_some()
}

/// Find the first ENS-like candidate in free text and normalize it
///
/// Grammars are tried in priority order (full form, shortcut, standard). Each
/// grammar contributes its first match only; the first grammar whose first
/// match validates wins, regardless of where other grammars would have
/// matched in the text. Shortcut matches get `.eth`
/// inserted before the qualifier.
pub fn extract_candidate(text: &str) -> Option<NormalizedName> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    GRAMMARS
        .iter()
        .find_map(|grammar| grammar.find(trimmed))
        .map(NormalizedName::from_query)
}

/// Like [`extract_candidate`] but returns the matched query without normalizing
pub fn extract_query(text: &str) -> Option<Query> {
    let trimmed = text.trim();
    GRAMMARS.iter().find_map(|grammar| grammar.find(trimmed))
}
