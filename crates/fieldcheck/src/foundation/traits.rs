//! The rule trait
//!
//! A rule is the pass/fail behavior bound to a name in a
//! [`RuleRegistry`](crate::registry::RuleRegistry).

use crate::foundation::{CheckError, Field};

/// Validator behavior for one rule name.
///
/// `arg` is the text after `=` for keyed tokens (`len=5` → `"5"`) and the empty
/// string for bare tokens. Rules keep no state between calls and must be safe
/// to invoke from several threads once registered.
///
/// Any `Fn(&Field<'_>, &str) -> Result<(), CheckError>` closure is a rule.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{CheckError, Field, Rule, ValidationError};
///
/// struct Lowercase;
///
/// impl Rule for Lowercase {
///     fn check(&self, field: &Field<'_>, _arg: &str) -> Result<(), CheckError> {
///         if field.value().chars().all(|c| !c.is_uppercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("lower", format!("field `{}` must be lowercase", field.name())).into())
///         }
///     }
/// }
///
/// assert!(Lowercase.check(&Field::new("Tag", "abc"), "").is_ok());
/// assert!(Lowercase.check(&Field::new("Tag", "Abc"), "").is_err());
/// ```
pub trait Rule: Send + Sync {
    /// Checks a field, returning the first problem found.
    fn check(&self, field: &Field<'_>, arg: &str) -> Result<(), CheckError>;
}

impl<F> Rule for F
where
    F: Fn(&Field<'_>, &str) -> Result<(), CheckError> + Send + Sync,
{
    #[inline]
    fn check(&self, field: &Field<'_>, arg: &str) -> Result<(), CheckError> {
        self(field, arg)
    }
}

/// Pins a closure to the [`Rule`] signature so its argument types are inferred.
///
/// ```
/// use fieldcheck::foundation::{rule_fn, Rule, Field};
///
/// let always_ok = rule_fn(|_field, _arg| Ok(()));
/// assert!(always_ok.check(&Field::new("X", ""), "").is_ok());
/// ```
pub fn rule_fn<F>(f: F) -> F
where
    F: Fn(&Field<'_>, &str) -> Result<(), CheckError> + Send + Sync,
{
    f
}
