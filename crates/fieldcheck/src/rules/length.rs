//! Length rules
//!
//! Length is measured in Unicode scalar values. The argument is the text after
//! `=` in the token (`len=8`) and must parse as a non-negative integer;
//! anything else is a configuration error, not a violation.

use tracing::error;

use crate::foundation::{CheckError, Field};
use crate::rules::violation;

/// Parses a length argument, reporting a configuration error on failure.
fn parse_length(rule: &'static str, field: &Field<'_>, arg: &str) -> Result<usize, CheckError> {
    arg.parse::<usize>().map_err(|e| {
        error!(rule, field = field.name(), arg, "invalid length argument: {e}");
        CheckError::invalid_argument(rule, field.name(), arg, e)
    })
}

#[inline]
fn measure(field: &Field<'_>) -> usize {
    field.value().chars().count()
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::rule! {
    /// `len=N`: exactly `N` characters.
    pub ExactLength = "len";
    check(field, arg) {
        let expected = parse_length(Self::NAME, field, arg)?;
        let actual = measure(field);
        if actual == expected {
            return Ok(());
        }
        let message = format!(
            "number of characters in field `{}` must be `{expected}`, `{}` has `{actual}` characters",
            field.name(),
            field.value(),
        );
        Err(violation(Self::NAME, field, message)
            .with_param("expected", expected.to_string())
            .with_param("actual", actual.to_string())
            .into())
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// `max=N`: at most `N` characters.
    pub MaxLength = "max";
    check(field, arg) {
        let max = parse_length(Self::NAME, field, arg)?;
        let actual = measure(field);
        if actual <= max {
            return Ok(());
        }
        let message = format!(
            "field `{}` maximum number of characters must be `{max}`, `{}` has `{actual}` characters",
            field.name(),
            field.value(),
        );
        Err(violation(Self::NAME, field, message)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
            .into())
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// `min=N`: at least `N` characters.
    pub MinLength = "min";
    check(field, arg) {
        let min = parse_length(Self::NAME, field, arg)?;
        let actual = measure(field);
        if actual >= min {
            return Ok(());
        }
        let message = format!(
            "the minimum number of characters in the `{}` field must be `{min}`, `{}` has `{actual}` characters",
            field.name(),
            field.value(),
        );
        Err(violation(Self::NAME, field, message)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
            .into())
    }
}
