//! Core types shared by every part of the engine
//!
//! - **Field**: [`Field`], the `(display name, value)` pair rules consume
//! - **Errors**: [`ValidationError`], [`CheckError`], [`ErrorKind`]
//! - **Traits**: [`Rule`]

pub mod error;
pub mod field;
pub mod traits;

pub use error::{CheckError, ErrorKind, ValidationError};
pub use field::Field;
pub use traits::{Rule, rule_fn};

/// Result of a validation run.
pub type CheckResult<T = ()> = Result<T, CheckError>;
