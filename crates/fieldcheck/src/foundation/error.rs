//! Error types for rule-chain validation
//!
//! Two layers:
//!
//! - [`ValidationError`]: a rule legitimately failed for a value. Carries a
//!   code (the rule name), a human-readable message, the field display name
//!   and ordered parameters.
//! - [`CheckError`]: everything a validation run can return, split into
//!   violations, configuration mistakes (unknown rules, malformed arguments)
//!   and invalid input (the record itself could not be read).
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>`, so static
//! codes and messages are borrowed.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rule violation for a single field.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("len", "number of characters in field `Code` must be `4`")
///     .with_field("Code")
///     .with_param("expected", "4")
///     .with_param("actual", "5");
///
/// assert_eq!(error.param("actual"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule name that produced the error, e.g. `"nonil"` or `"len"`.
    pub code: Cow<'static, str>,

    /// Human-readable message, already naming the field.
    pub message: Cow<'static, str>,

    /// Display name of the field that failed.
    pub field: Option<Cow<'static, str>>,

    /// Ordered parameters (typically 0-3), e.g. `[("expected", "4"), ("actual", "5")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new violation with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field display name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CHECK ERROR
// ============================================================================

/// Broad classification of a [`CheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value failed a rule. Expected and user-facing.
    Violation,
    /// The annotation is wrong: unknown rule, bad argument, bad pattern.
    Configuration,
    /// The record could not be read at all.
    InvalidInput,
}

/// Error returned by every validation entry point.
///
/// Every variant short-circuits the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// A resolved rule rejected the field value.
    #[error(transparent)]
    Violation(#[from] ValidationError),

    /// A token is neither a registered bare rule nor a `name=value` pair with
    /// a registered name.
    #[error("rule `{token}` in field `{field}` cannot be resolved")]
    UnresolvedRule {
        /// The offending token as written in the chain.
        token: String,
        /// Display name of the field carrying the chain.
        field: String,
    },

    /// A rule received an argument it cannot use.
    #[error("rule `{rule}` in field `{field}` has invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Rule name.
        rule: Cow<'static, str>,
        /// Display name of the field carrying the chain.
        field: String,
        /// The argument as written.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The record could not be turned into fields.
    #[error("invalid input: {0}")]
    InvalidInput(Cow<'static, str>),
}

impl CheckError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(
        rule: impl Into<Cow<'static, str>>,
        field: impl Into<String>,
        argument: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::InvalidArgument {
            rule: rule.into(),
            field: field.into(),
            argument: argument.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Violation(_) => ErrorKind::Violation,
            Self::UnresolvedRule { .. } | Self::InvalidArgument { .. } => ErrorKind::Configuration,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Returns true for legitimate rule failures.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        self.kind() == ErrorKind::Violation
    }

    /// Returns true for annotation mistakes.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    /// Returns the violation, if this is one.
    #[must_use]
    pub fn as_violation(&self) -> Option<&ValidationError> {
        match self {
            Self::Violation(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("nonil", "field `Name` cannot be empty");
        assert_eq!(error.code, "nonil");
        assert_eq!(error.to_string(), "field `Name` cannot be empty");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("max", "too long")
            .with_field("Name")
            .with_param("max", "5")
            .with_param("actual", "7");

        assert_eq!(error.field.as_deref(), Some("Name"));
        assert_eq!(error.param("max"), Some("5"));
        assert_eq!(error.param("actual"), Some("7"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("nonil", "static");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn violation_is_transparent() {
        let err = CheckError::from(ValidationError::new("num", "digits only"));
        assert_eq!(err.to_string(), "digits only");
        assert_eq!(err.kind(), ErrorKind::Violation);
        assert!(err.as_violation().is_some());
    }

    #[test]
    fn configuration_kinds() {
        let unresolved = CheckError::UnresolvedRule {
            token: "bogus".into(),
            field: "User Name".into(),
        };
        assert!(unresolved.is_configuration());
        assert_eq!(
            unresolved.to_string(),
            "rule `bogus` in field `User Name` cannot be resolved"
        );

        let bad_arg = CheckError::invalid_argument("len", "Code", "x", "not a number");
        assert!(bad_arg.is_configuration());
        assert!(!bad_arg.is_violation());
    }

    #[test]
    fn invalid_input_kind() {
        let err = CheckError::invalid_input("nil value was received");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "invalid input: nil value was received");
    }
}
