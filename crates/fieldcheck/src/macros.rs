//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a unit rule struct, its registry name and its [`Rule`](crate::foundation::Rule) impl
//!
//! # Examples
//!
//! ```
//! use fieldcheck::rule;
//! use fieldcheck::foundation::{Rule, Field, ValidationError};
//!
//! // Predicate form: a boolean rule plus the violation to report.
//! rule! {
//!     /// Value must be upper case.
//!     pub Upper = "upper";
//!     rule(field) { field.value().chars().all(|c| !c.is_lowercase()) }
//!     error(field) { ValidationError::new("upper", format!("field `{}` must be upper case", field.name())) }
//! }
//!
//! assert_eq!(Upper::NAME, "upper");
//! assert!(Upper.check(&Field::new("Code", "AB1"), "").is_ok());
//! assert!(Upper.check(&Field::new("Code", "ab1"), "").is_err());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a rule: a zero-sized struct, a `NAME` constant holding its
/// registry name and a [`Rule`](crate::foundation::Rule) implementation.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always applied.
///
/// # Variants
///
/// **Predicate rule** (argument ignored):
/// ```ignore
/// rule! {
///     pub Integer = "num";
///     rule(field) { DIGITS.is_match(field.value()) }
///     error(field) { ValidationError::new("num", "digits only") }
/// }
/// ```
///
/// **Full rule** (body returns `Result<(), CheckError>` and may use the argument):
/// ```ignore
/// rule! {
///     pub MaxLength = "max";
///     check(field, arg) {
///         let max = parse_length(Self::NAME, field, arg)?;
///         // ...
///     }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: predicate + error ─────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $key:literal;
        rule($field:ident) $rule:block
        error($efield:ident) $err:block
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name = $key;
            check($field, _arg) {
                if $rule {
                    Ok(())
                } else {
                    let $efield = $field;
                    Err($crate::foundation::CheckError::from($err))
                }
            }
        }
    };

    // ── Variant 2: full check body ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $key:literal;
        check($field:ident, $arg:ident) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// Name this rule is registered under.
            pub const NAME: &'static str = $key;
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn check(
                &self,
                $field: &$crate::foundation::Field<'_>,
                $arg: &str,
            ) -> Result<(), $crate::foundation::CheckError> $body
        }
    };
}
