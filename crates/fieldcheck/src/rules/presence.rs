//! Presence and boundary-whitespace rules

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;
use crate::rules::violation;

// Two-character windows: a space touching another character at either edge.
static LEADING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^( .)").expect("leading space regex"));
static TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(. )$").expect("trailing space regex"));

// ============================================================================
// NON BLANK
// ============================================================================

crate::rule! {
    /// `nonil`: the value must contain something other than whitespace.
    pub NonBlank = "nonil";
    check(field, arg) {
        if !field.value().trim().is_empty() {
            return Ok(());
        }
        let message = if field.value().is_empty() {
            format!("field `{}` cannot be empty", field.name())
        } else {
            format!("field `{}` cannot contain whitespace only", field.name())
        };
        Err(violation(Self::NAME, field, message).into())
    }
}

// ============================================================================
// NO EDGE SPACES
// ============================================================================

/// Reports a leading or trailing space, leading first.
pub(crate) fn edge_space_violation(
    code: &'static str,
    field: &crate::foundation::Field<'_>,
) -> Option<ValidationError> {
    let side = if LEADING_SPACE.is_match(field.value()) {
        "leading"
    } else if TRAILING_SPACE.is_match(field.value()) {
        "trailing"
    } else {
        return None;
    };
    let message = format!("field `{}` cannot contain {side} spaces", field.name());
    Some(violation(code, field, message).with_param("side", side))
}

crate::rule! {
    /// `nosp`: no space adjacent to another character at the start or end.
    ///
    /// Only the two-character edge window is inspected, so a value made of a
    /// single space passes.
    pub NoEdgeSpaces = "nosp";
    check(field, arg) {
        match edge_space_violation(Self::NAME, field) {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Field, Rule};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message(rule: &dyn Rule, value: &str) -> Option<String> {
        rule.check(&Field::new("Name", value), "")
            .err()
            .map(|e| e.to_string())
    }

    #[test]
    fn non_blank_reports_empty() {
        assert_eq!(
            message(&NonBlank, ""),
            Some("field `Name` cannot be empty".to_string())
        );
    }

    #[test]
    fn non_blank_reports_whitespace_only() {
        assert_eq!(
            message(&NonBlank, "  "),
            Some("field `Name` cannot contain whitespace only".to_string())
        );
        assert_eq!(
            message(&NonBlank, "\t\n"),
            Some("field `Name` cannot contain whitespace only".to_string())
        );
    }

    #[test]
    fn non_blank_accepts_text() {
        assert_eq!(message(&NonBlank, " a "), None);
    }

    #[rstest]
    #[case("abc", None)]
    #[case("a b", None)]
    #[case("", None)]
    #[case(" ", None)]
    #[case(" abc", Some("leading"))]
    #[case("  ", Some("leading"))]
    #[case(" abc ", Some("leading"))]
    #[case("abc ", Some("trailing"))]
    fn no_edge_spaces(#[case] value: &str, #[case] side: Option<&str>) {
        let result = NoEdgeSpaces.check(&Field::new("Name", value), "");
        let reported = result
            .err()
            .and_then(|e| e.as_violation().and_then(|v| v.param("side").map(str::to_string)));
        assert_eq!(reported.as_deref(), side);
    }
}
