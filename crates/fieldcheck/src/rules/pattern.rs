//! Arbitrary pattern rule

use regex::Regex;
use tracing::error;

use crate::foundation::CheckError;
use crate::rules::violation;

crate::rule! {
    /// `rgx=PATTERN`: the value must contain a match of `PATTERN`.
    ///
    /// The match is unanchored; write `^...$` to constrain the whole value.
    /// An invalid pattern is a configuration error.
    pub Pattern = "rgx";
    check(field, arg) {
        let pattern = Regex::new(arg).map_err(|e| {
            error!(field = field.name(), pattern = arg, "invalid pattern: {e}");
            CheckError::invalid_argument(Self::NAME, field.name(), arg, e)
        })?;

        if pattern.is_match(field.value()) {
            return Ok(());
        }

        let message = format!(
            "the value `{}` in the field `{}` is invalid, check with the administrator for more information",
            field.value(),
            field.name(),
        );
        Err(violation(Self::NAME, field, message)
            .with_param("pattern", arg.to_string())
            .into())
    }
}
