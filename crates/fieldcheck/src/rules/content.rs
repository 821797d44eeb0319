//! Character-class and shape rules

use std::sync::LazyLock;

use regex::Regex;

use crate::rules::presence::edge_space_violation;
use crate::rules::violation;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_\-\.]+)@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,5})$").expect("email regex")
});

static TRIPLE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"( ){3}").expect("triple space regex"));

/// Characters rejected by [`FreeText`].
pub const DENIED_PUNCTUATION: &str = "!\"#$%&'()*+,./:;<=>?@[\\]^_}{~|";

// ============================================================================
// SAFE WORD
// ============================================================================

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | 'ñ' | 'Ñ')
}

crate::rule! {
    /// `sword`: only ASCII letters, digits, `_`, `ñ` and `Ñ`. Empty passes.
    pub SafeWord = "sword";
    rule(field) { field.value().chars().all(is_word_char) }
    error(field) {
        violation(
            Self::NAME,
            field,
            format!("in field `{}` only numeric and alphabetic characters are allowed", field.name()),
        )
    }
}

// ============================================================================
// FREE TEXT
// ============================================================================

crate::rule! {
    /// `txt`: free text without edge spaces, runs of 3+ spaces or symbols
    /// from [`DENIED_PUNCTUATION`]. The first failing condition is reported.
    pub FreeText = "txt";
    check(field, arg) {
        if let Some(error) = edge_space_violation(Self::NAME, field) {
            return Err(error.into());
        }

        if TRIPLE_SPACE.is_match(field.value()) {
            let message = format!(
                "field `{}` cannot have words separated by more than 2 spaces",
                field.name()
            );
            return Err(violation(Self::NAME, field, message).into());
        }

        if let Some(c) = field.value().chars().find(|c| DENIED_PUNCTUATION.contains(*c)) {
            let message = format!(
                "field `{}` cannot contain any of these characters {DENIED_PUNCTUATION}",
                field.name()
            );
            return Err(violation(Self::NAME, field, message)
                .with_param("character", c.to_string())
                .into());
        }

        Ok(())
    }
}

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// `email`: `local@domain.tld` with a 2-5 letter TLD.
    pub Email = "email";
    rule(field) { EMAIL_REGEX.is_match(field.value()) }
    error(field) {
        violation(
            Self::NAME,
            field,
            format!(
                "field `{}` must be an email address, `{}` is not a valid email",
                field.name(),
                field.value()
            ),
        )
    }
}
