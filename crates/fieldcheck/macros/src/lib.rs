//! # fieldcheck macros
//!
//! Derive support for the `fieldcheck` validation engine.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Record`](derive@Record) | Implements `fieldcheck::record::Record` |
//!
//! ```ignore
//! use fieldcheck::Record;
//!
//! #[derive(Record)]
//! struct Account {
//!     #[chk("nonil sword")]
//!     user_name: String,
//!     #[chk(rules = "nonil email", rename = "EmailAddress")]
//!     email: String,
//!     age: u32,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Every named field whose type is `String`, `&str` or `Cow<str>` becomes a
/// record field, in declaration order. Other fields are not part of the record.
///
/// # Field attributes
///
/// - `#[chk("...")]` - Rule chain for the field
/// - `#[chk(rules = "...")]` - Same, in key-value form
/// - `#[chk(rename = "...")]` - Identifier used for selection and messages
///   (default: the field name as written)
///
/// Messages split the identifier on camel-case boundaries only, so a field
/// named `user_name` is reported as ``field `user_name` ...``. Give it
/// `rename = "UserName"` to read ``field `User Name` ...`` instead.
///
/// Putting `#[chk]` on a field that is not string-typed is a compile error.
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// struct Address {
///     #[chk(rules = "nonil txt max=80", rename = "StreetLine")]
///     street: String,
///     #[chk("nonil num len=5")]
///     zip: &'static str,
/// }
/// ```
#[proc_macro_derive(Record, attributes(chk))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
