//! # fieldcheck
//!
//! Declarative validation of string fields against rule chains.
//!
//! Each field carries a rule chain: a space-separated list of rule tokens,
//! either bare (`nonil`) or keyed (`len=8`). Validation walks the selected
//! fields in declaration order, runs every token of each chain and stops at
//! the first error.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "derive")] {
//! use fieldcheck::Record;
//!
//! #[derive(Record)]
//! struct SignUp {
//!     #[chk("nonil sword max=20")]
//!     user_name: String,
//!     #[chk("nonil email")]
//!     email: String,
//!     #[chk("nonil min=8")]
//!     password: String,
//!     referrer: String,
//! }
//!
//! let form = SignUp {
//!     user_name: "ada_l".into(),
//!     email: "ada@example.com".into(),
//!     password: "short".into(),
//!     referrer: String::new(),
//! };
//!
//! let err = fieldcheck::validate_all(&form).unwrap_err();
//! assert!(err.is_violation());
//! assert!(fieldcheck::validate_except(&form, ["password"]).is_ok());
//! # }
//! ```
//!
//! ## Built-in Rules
//!
//! `nonil`, `nosp`, `sword`, `txt`, `email`, `num`, `decimal`, `len=N`,
//! `max=N`, `min=N`, `rgx=PATTERN`. See [`rules`].
//!
//! ## Custom Rules
//!
//! Register with [`register_rule`] during start-up, or build a sealed
//! [`Checker`] with [`RegistryBuilder`].

pub mod dispatch;
pub mod foundation;
pub mod grammar;
#[cfg(feature = "json")]
pub mod json;
mod macros;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod rules;
pub mod selector;

pub use dispatch::{
    Checker, validate, validate_all, validate_except, validate_field, validate_only,
};
pub use foundation::{CheckError, CheckResult, ErrorKind, Field, Rule, ValidationError};
pub use record::{FieldMap, Record, RecordField};
pub use registry::{RegistryBuilder, RuleRegistry, register_rule, registered_rules, snapshot};
pub use selector::{Selection, SelectionMode};

#[cfg(feature = "derive")]
pub use fieldcheck_macros::Record;
