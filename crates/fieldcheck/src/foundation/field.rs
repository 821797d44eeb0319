//! The field descriptor every rule consumes.

use std::borrow::Cow;

use crate::grammar::split_display_words;

/// A single string field as seen by a [`Rule`](crate::foundation::Rule).
///
/// `name` is the human-readable display name used in messages, `value` is the
/// field's current contents. Created fresh for every validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    name: Cow<'a, str>,
    value: &'a str,
}

impl<'a> Field<'a> {
    /// Creates a field from an already human-readable name.
    pub fn new(name: impl Into<Cow<'a, str>>, value: &'a str) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Creates a field from a raw identifier, splitting camel case into words.
    ///
    /// ```
    /// use fieldcheck::foundation::Field;
    ///
    /// let field = Field::from_ident("UserName", "bob");
    /// assert_eq!(field.name(), "User Name");
    /// ```
    pub fn from_ident(ident: &str, value: &'a str) -> Self {
        Self {
            name: Cow::Owned(split_display_words(ident)),
            value,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field contents.
    #[must_use]
    pub fn value(&self) -> &'a str {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ident_splits_words() {
        let field = Field::from_ident("HTTPServerName", "x");
        assert_eq!(field.name(), "HTTP Server Name");
        assert_eq!(field.value(), "x");
    }

    #[test]
    fn new_keeps_name_verbatim() {
        let field = Field::new("already spaced", "");
        assert_eq!(field.name(), "already spaced");
    }
}
