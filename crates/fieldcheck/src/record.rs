//! Record providers
//!
//! The engine never inspects concrete types. It asks a [`Record`] for its
//! string fields in declaration order, each with an identifier, a value and an
//! optional rule chain.
//!
//! Providers shipped with the crate:
//!
//! - `#[derive(Record)]` (feature `derive`) for structs with string fields
//! - [`FieldMap`] for records assembled at runtime
//! - [`JsonRecord`](crate::json::JsonRecord) (feature `json`) for JSON objects
//! - `Option<R>`, which rejects `None` as invalid input

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::foundation::{CheckError, Field};

// ============================================================================
// RECORD FIELD
// ============================================================================

/// One string field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField<'a> {
    /// Identifier used for selection, e.g. `"UserName"`.
    pub ident: Cow<'a, str>,
    /// Current value.
    pub value: Cow<'a, str>,
    /// Rule chain, if the field is annotated.
    pub rules: Option<Cow<'a, str>>,
}

impl<'a> RecordField<'a> {
    /// Creates an unannotated field.
    pub fn new(ident: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            ident: ident.into(),
            value: value.into(),
            rules: None,
        }
    }

    /// Attaches a rule chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rules(mut self, rules: impl Into<Cow<'a, str>>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    /// The rule chain, or `""` when absent.
    #[must_use]
    pub fn rules(&self) -> &str {
        self.rules.as_deref().unwrap_or_default()
    }

    /// Returns true when the field carries at least one rule token.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        !self.rules().trim().is_empty()
    }

    /// The descriptor handed to rules, with the identifier split into words.
    #[must_use]
    pub fn descriptor(&self) -> Field<'_> {
        Field::from_ident(&self.ident, &self.value)
    }
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A structured object exposing named string fields.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::CheckError;
/// use fieldcheck::record::{Record, RecordField};
///
/// struct Login {
///     user: String,
///     password: String,
/// }
///
/// impl Record for Login {
///     fn fields(&self) -> Result<Vec<RecordField<'_>>, CheckError> {
///         Ok(vec![
///             RecordField::new("User", self.user.as_str()).with_rules("nonil sword"),
///             RecordField::new("Password", self.password.as_str()).with_rules("min=8"),
///         ])
///     }
/// }
///
/// let login = Login { user: "bob".into(), password: "hunter22".into() };
/// assert_eq!(login.rule_chain("User").unwrap().as_deref(), Some("nonil sword"));
/// ```
pub trait Record {
    /// String fields in declaration order.
    fn fields(&self) -> Result<Vec<RecordField<'_>>, CheckError>;

    /// Rule chain of the string field named `ident`.
    ///
    /// `Ok(None)` if there is no such string field, `Ok(Some(""))` if the field
    /// exists but is not annotated.
    fn rule_chain(&self, ident: &str) -> Result<Option<String>, CheckError> {
        Ok(self
            .fields()?
            .into_iter()
            .find(|field| field.ident == ident)
            .map(|field| field.rules().to_owned()))
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Result<Vec<RecordField<'_>>, CheckError> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Result<Vec<RecordField<'_>>, CheckError> {
        (**self).fields()
    }
}

impl<R: Record> Record for Option<R> {
    fn fields(&self) -> Result<Vec<RecordField<'_>>, CheckError> {
        match self {
            Some(record) => record.fields(),
            None => Err(CheckError::invalid_input("nil value was received")),
        }
    }
}

// ============================================================================
// FIELD MAP
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct OwnedField {
    ident: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rules: Option<String>,
}

/// A record assembled at runtime. Keeps insertion order.
///
/// Serializes as a list of `{ ident, value, rules? }` objects, so records can
/// be loaded from configuration files.
///
/// ```
/// use fieldcheck::record::FieldMap;
///
/// let record = FieldMap::new()
///     .annotated("UserName", "bob", "nonil sword")
///     .field("Comment", "anything goes");
///
/// assert_eq!(record.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: Vec<OwnedField>,
}

impl FieldMap {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unannotated field.
    pub fn field(mut self, ident: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(ident, value, None::<String>);
        self
    }

    /// Appends an annotated field.
    pub fn annotated(
        mut self,
        ident: impl Into<String>,
        value: impl Into<String>,
        rules: impl Into<String>,
    ) -> Self {
        self.push(ident, value, Some(rules));
        self
    }

    /// Appends a field. An existing field with the same identifier keeps its
    /// position and takes the new value and rules.
    pub fn push(
        &mut self,
        ident: impl Into<String>,
        value: impl Into<String>,
        rules: Option<impl Into<String>>,
    ) {
        let field = OwnedField {
            ident: ident.into(),
            value: value.into(),
            rules: rules.map(Into::into),
        };
        match self.fields.iter_mut().find(|f| f.ident == field.ident) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, ident: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.ident == ident)
            .map(|f| f.value.as_str())
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for FieldMap {
    fn fields(&self) -> Result<Vec<RecordField<'_>>, CheckError> {
        Ok(self
            .fields
            .iter()
            .map(|f| RecordField {
                ident: Cow::Borrowed(&f.ident),
                value: Cow::Borrowed(&f.value),
                rules: f.rules.as_deref().map(Cow::Borrowed),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn record_field_annotation() {
        assert!(!RecordField::new("A", "").is_annotated());
        assert!(!RecordField::new("A", "").with_rules("   ").is_annotated());
        assert!(RecordField::new("A", "").with_rules("nonil").is_annotated());
    }

    #[test]
    fn descriptor_uses_display_name() {
        let field = RecordField::new("FirstName", "Ada");
        let descriptor = field.descriptor();
        assert_eq!(descriptor.name(), "First Name");
        assert_eq!(descriptor.value(), "Ada");
    }

    #[test]
    fn field_map_keeps_order_and_replaces_in_place() {
        let mut record = FieldMap::new().field("A", "1").field("B", "2");
        record.push("A", "3", Some("num"));

        let fields = record.fields().unwrap();
        let idents: Vec<_> = fields.iter().map(|f| f.ident.as_ref()).collect();
        assert_eq!(idents, ["A", "B"]);
        assert_eq!(record.value("A"), Some("3"));
        assert_eq!(fields[0].rules(), "num");
    }

    #[test]
    fn rule_chain_lookup() {
        let record = FieldMap::new()
            .annotated("Code", "x", "len=4")
            .field("Note", "y");
        assert_eq!(record.rule_chain("Code").unwrap().as_deref(), Some("len=4"));
        assert_eq!(record.rule_chain("Note").unwrap().as_deref(), Some(""));
        assert_eq!(record.rule_chain("Missing").unwrap(), None);
    }

    #[test]
    fn none_is_invalid_input() {
        let record: Option<FieldMap> = None;
        let err = record.fields().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn field_map_deserializes() {
        let record: FieldMap = serde_json::from_str(
            r#"[{"ident":"Email","value":"a@b.com","rules":"email"},{"ident":"Note","value":""}]"#,
        )
        .unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.rule_chain("Email").unwrap().as_deref(), Some("email"));
    }
}
