//! JSON records.
//!
//! [`JsonRecord`] pairs a `serde_json::Value` object with a [`RuleTable`]
//! mapping keys to rule chains. String members are the record's fields, in the
//! order the object's keys were written (serde_json's `preserve_order`).
//! Other members are not fields, just as non-string fields of a struct are
//! ignored. A value that is not an object is invalid input.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::json::{JsonRecord, RuleTable};
//! use serde_json::json;
//!
//! let rules: RuleTable = serde_json::from_value(json!({
//!     "UserName": "nonil sword",
//!     "Email": "email",
//! }))
//! .unwrap();
//!
//! let body = json!({ "UserName": "bob_1", "Email": "bob@example.com", "Age": 41 });
//! assert!(fieldcheck::validate_all(&JsonRecord::new(&body, &rules)).is_ok());
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::CheckError;
use crate::record::{Record, RecordField};

/// Key → rule chain table, typically loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    chains: BTreeMap<String, String>,
}

impl RuleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule chain for `key`.
    pub fn rule(mut self, key: impl Into<String>, chain: impl Into<String>) -> Self {
        self.chains.insert(key.into(), chain.into());
        self
    }

    /// Rule chain for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.chains.get(key).map(String::as_str)
    }
}

/// A JSON object viewed as a record.
#[derive(Debug, Clone, Copy)]
pub struct JsonRecord<'a> {
    value: &'a Value,
    rules: &'a RuleTable,
}

impl<'a> JsonRecord<'a> {
    /// Pairs `value` with the chains in `rules`.
    #[must_use]
    pub fn new(value: &'a Value, rules: &'a RuleTable) -> Self {
        Self { value, rules }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Record for JsonRecord<'_> {
    fn fields(&self) -> Result<Vec<RecordField<'_>>, CheckError> {
        let object = match self.value {
            Value::Object(object) => object,
            Value::Null => return Err(CheckError::invalid_input("nil value was received")),
            other => {
                return Err(CheckError::invalid_input(format!(
                    "a JSON object was expected, got {}",
                    kind_of(other)
                )));
            }
        };

        Ok(object
            .iter()
            .filter_map(|(key, member)| {
                let text = member.as_str()?;
                Some(RecordField {
                    ident: Cow::Borrowed(key.as_str()),
                    value: Cow::Borrowed(text),
                    rules: self.rules.get(key).map(Cow::Borrowed),
                })
            })
            .collect())
    }
}
