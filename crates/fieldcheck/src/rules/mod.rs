//! Built-in rules
//!
//! | name | rule | argument |
//! |---|---|---|
//! | `nonil` | [`NonBlank`] | ignored |
//! | `nosp` | [`NoEdgeSpaces`] | ignored |
//! | `sword` | [`SafeWord`] | ignored |
//! | `txt` | [`FreeText`] | ignored |
//! | `email` | [`Email`] | ignored |
//! | `num` | [`Integer`] | ignored |
//! | `decimal` | [`Decimal`] | ignored |
//! | `len` | [`ExactLength`] | character count |
//! | `max` | [`MaxLength`] | character count |
//! | `min` | [`MinLength`] | character count |
//! | `rgx` | [`Pattern`] | regular expression |

pub mod content;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod presence;

pub use content::{DENIED_PUNCTUATION, Email, FreeText, SafeWord};
pub use length::{ExactLength, MaxLength, MinLength};
pub use numeric::{Decimal, Integer};
pub use pattern::Pattern;
pub use presence::{NoEdgeSpaces, NonBlank};

use crate::foundation::{Field, ValidationError};
use crate::registry::RuleRegistry;

/// Names of every built-in rule, in registration order.
pub const BUILTIN_NAMES: [&str; 11] = [
    NonBlank::NAME,
    NoEdgeSpaces::NAME,
    SafeWord::NAME,
    FreeText::NAME,
    Email::NAME,
    Integer::NAME,
    Decimal::NAME,
    ExactLength::NAME,
    MaxLength::NAME,
    MinLength::NAME,
    Pattern::NAME,
];

/// Registers every built-in rule, replacing any rule already using one of
/// their names.
pub fn register_builtins(registry: &mut RuleRegistry) {
    registry.register(NonBlank::NAME, NonBlank);
    registry.register(NoEdgeSpaces::NAME, NoEdgeSpaces);
    registry.register(SafeWord::NAME, SafeWord);
    registry.register(FreeText::NAME, FreeText);
    registry.register(Email::NAME, Email);
    registry.register(Integer::NAME, Integer);
    registry.register(Decimal::NAME, Decimal);
    registry.register(ExactLength::NAME, ExactLength);
    registry.register(MaxLength::NAME, MaxLength);
    registry.register(MinLength::NAME, MinLength);
    registry.register(Pattern::NAME, Pattern);
}

/// Builds a violation attributed to `field`.
pub(crate) fn violation(code: &'static str, field: &Field<'_>, message: String) -> ValidationError {
    ValidationError::new(code, message).with_field(field.name().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_registered() {
        let mut registry = RuleRegistry::new();
        register_builtins(&mut registry);
        assert_eq!(registry.len(), BUILTIN_NAMES.len());
        for name in BUILTIN_NAMES {
            assert!(registry.contains(name), "missing builtin `{name}`");
        }
    }
}
