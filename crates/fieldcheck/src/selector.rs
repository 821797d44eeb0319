//! Field selection policies
//!
//! - [`SelectionMode::Omit`]: every annotated field except the listed ones.
//!   Unannotated fields are always skipped.
//! - [`SelectionMode::Only`]: exactly the listed fields, annotated or not. A
//!   listed field without rules is selected but has nothing to enforce.

use crate::record::RecordField;

/// How the identifiers of a [`Selection`] are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Skip the listed fields.
    Omit,
    /// Keep only the listed fields.
    Only,
}

/// A set of field identifiers plus a [`SelectionMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    idents: Vec<String>,
}

impl Selection {
    /// Every annotated field.
    #[must_use]
    pub fn all() -> Self {
        Self {
            mode: SelectionMode::Omit,
            idents: Vec::new(),
        }
    }

    /// Every annotated field except `idents`.
    pub fn omit<I, S>(idents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: SelectionMode::Omit,
            idents: idents.into_iter().map(Into::into).collect(),
        }
    }

    /// Only `idents`.
    pub fn only<I, S>(idents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: SelectionMode::Only,
            idents: idents.into_iter().map(Into::into).collect(),
        }
    }

    /// The selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns true if `ident` is one of the listed identifiers.
    #[must_use]
    pub fn lists(&self, ident: &str) -> bool {
        self.idents.iter().any(|listed| listed == ident)
    }

    /// Decides whether `field` is validated under this selection.
    #[must_use]
    pub fn includes(&self, field: &RecordField<'_>) -> bool {
        match self.mode {
            SelectionMode::Omit => field.is_annotated() && !self.lists(&field.ident),
            SelectionMode::Only => self.lists(&field.ident),
        }
    }

    /// Filters `fields`, keeping declaration order.
    pub fn apply<'a>(&self, fields: Vec<RecordField<'a>>) -> Vec<RecordField<'a>> {
        fields.into_iter().filter(|f| self.includes(f)).collect()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::all()
    }
}
