//! Shared helpers for attribute parsing and diagnostics.

pub mod attrs;
pub mod diag;
