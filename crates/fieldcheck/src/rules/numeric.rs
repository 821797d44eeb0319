//! Numeric string rules

use std::sync::LazyLock;

use regex::Regex;

use crate::rules::violation;

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("digits regex"));

// The separator is deliberately an unescaped `.`: any single character between
// the digit runs is accepted.
static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+.[0-9]+$").expect("decimal regex"));

crate::rule! {
    /// `num`: one or more ASCII digits.
    pub Integer = "num";
    rule(field) { DIGITS.is_match(field.value()) }
    error(field) {
        violation(
            Self::NAME,
            field,
            format!(
                "all characters must be numeric, invalid value `{}` in field `{}`",
                field.value(),
                field.name()
            ),
        )
    }
}

crate::rule! {
    /// `decimal`: digits, one separator character, digits.
    pub Decimal = "decimal";
    rule(field) { DECIMAL.is_match(field.value()) }
    error(field) {
        violation(
            Self::NAME,
            field,
            format!(
                "decimal expected, invalid value `{}` in field `{}`",
                field.value(),
                field.name()
            ),
        )
    }
}
