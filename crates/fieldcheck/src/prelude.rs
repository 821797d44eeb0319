//! Prelude module for convenient imports.
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let record = FieldMap::new().annotated("Age", "41", "nonil num");
//! assert!(Checker::default().validate_all(&record).is_ok());
//! ```

pub use crate::dispatch::{
    Checker, validate, validate_all, validate_except, validate_field, validate_only,
};
pub use crate::foundation::{
    CheckError, CheckResult, ErrorKind, Field, Rule, ValidationError, rule_fn,
};
pub use crate::record::{FieldMap, Record, RecordField};
pub use crate::registry::{RegistryBuilder, RuleRegistry, register_rule};
pub use crate::selector::{Selection, SelectionMode};

#[cfg(feature = "json")]
pub use crate::json::{JsonRecord, RuleTable};

#[cfg(feature = "derive")]
pub use fieldcheck_macros::Record;
