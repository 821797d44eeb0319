//! Rule-chain grammar
//!
//! A rule chain is the annotation attached to one field, e.g.
//! `"nonil  sword len=8"`. After whitespace normalization it is a sequence of
//! tokens separated by single spaces. Each token is either a bare rule name
//! (`nonil`) or a keyed rule `name=value` (`len=8`, `rgx=^a=b$`).
//!
//! ```
//! use fieldcheck::grammar::{RuleChain, RuleToken};
//!
//! let chain = RuleChain::parse("  nonil   len=8 ");
//! let tokens: Vec<_> = chain.tokens().collect();
//! assert_eq!(tokens[0], RuleToken::Bare("nonil"));
//! assert_eq!(tokens[1].name(), "len");
//! assert_eq!(tokens[1].argument(), "8");
//! ```

use std::sync::LazyLock;

use regex::Regex;

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("acronym boundary regex"));

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("camel boundary regex"));

// ============================================================================
// STRING HELPERS
// ============================================================================

/// Collapses every whitespace run to a single space and trims both ends.
///
/// ```
/// use fieldcheck::grammar::normalize_spacing;
///
/// assert_eq!(normalize_spacing("  nonil \t  len=5  "), "nonil len=5");
/// ```
#[must_use]
pub fn normalize_spacing(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a normalized chain on single spaces. Empty input yields no tokens.
#[must_use]
pub fn split_tokens(normalized: &str) -> Vec<&str> {
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized.split(' ').collect()
}

/// Splits a `name=value` token.
///
/// Returns `Some((name, value))` only when `name` is one or more ASCII letters
/// and `value` is non-empty. The split happens at the first `=`, so the value
/// keeps any later `=` characters.
///
/// ```
/// use fieldcheck::grammar::split_key_value;
///
/// assert_eq!(split_key_value("len=10"), Some(("len", "10")));
/// assert_eq!(split_key_value("rgx=^a=b$"), Some(("rgx", "^a=b$")));
/// assert_eq!(split_key_value("len="), None);
/// assert_eq!(split_key_value("l3n=1"), None);
/// ```
#[must_use]
pub fn split_key_value(token: &str) -> Option<(&str, &str)> {
    let (name, value) = token.split_once('=')?;
    let valid_name = !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic());
    let valid_value = !value.is_empty() && !value.contains('\n');
    (valid_name && valid_value).then_some((name, value))
}

/// Renders an identifier as space-separated words for messages.
///
/// The acronym boundary pass runs before the camel boundary pass.
///
/// ```
/// use fieldcheck::grammar::split_display_words;
///
/// assert_eq!(split_display_words("UserName"), "User Name");
/// assert_eq!(split_display_words("JSONData"), "JSON Data");
/// assert_eq!(split_display_words("address2Line"), "address2 Line");
/// ```
#[must_use]
pub fn split_display_words(identifier: &str) -> String {
    let pass = ACRONYM_BOUNDARY.replace_all(identifier, "${1} ${2}");
    CAMEL_BOUNDARY.replace_all(&pass, "${1} ${2}").into_owned()
}

// ============================================================================
// TOKENS
// ============================================================================

/// One rule within a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleToken<'a> {
    /// A token without a well-formed `name=value` shape.
    Bare(&'a str),
    /// A `name=value` token.
    Keyed {
        /// The token as written.
        raw: &'a str,
        /// Text before the first `=`.
        name: &'a str,
        /// Text after the first `=`.
        value: &'a str,
    },
}

impl<'a> RuleToken<'a> {
    /// Classifies a single token.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match split_key_value(raw) {
            Some((name, value)) => Self::Keyed { raw, name, value },
            None => Self::Bare(raw),
        }
    }

    /// The token exactly as it appears in the chain.
    #[must_use]
    pub fn raw(&self) -> &'a str {
        match *self {
            Self::Bare(raw) | Self::Keyed { raw, .. } => raw,
        }
    }

    /// Rule name: the whole token for bare tokens, the key for keyed ones.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match *self {
            Self::Bare(name) | Self::Keyed { name, .. } => name,
        }
    }

    /// Argument passed to the rule; empty for bare tokens.
    #[must_use]
    pub fn argument(&self) -> &'a str {
        match *self {
            Self::Bare(_) => "",
            Self::Keyed { value, .. } => value,
        }
    }
}

// ============================================================================
// CHAIN
// ============================================================================

/// A normalized rule chain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleChain {
    normalized: String,
}

impl RuleChain {
    /// Normalizes `annotation` into a chain.
    #[must_use]
    pub fn parse(annotation: &str) -> Self {
        Self {
            normalized: normalize_spacing(annotation),
        }
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// True when the chain holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Tokens in chain order.
    pub fn tokens(&self) -> impl Iterator<Item = RuleToken<'_>> {
        split_tokens(&self.normalized).into_iter().map(RuleToken::parse)
    }
}
