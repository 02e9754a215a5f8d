//! Crate-level error type.

use crate::persist::PersistError;
use crate::templates::TemplateKind;
use thiserror::Error;

/// Errors from template application and action resolution.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A name was absent from its catalog. Never silently defaulted.
    #[error("{kind} template '{name}' not found")]
    NotFound { kind: TemplateKind, name: String },

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Catalog persistence failed: {0}")]
    Persist(#[from] PersistError),
}

impl SheetError {
    pub fn not_found(kind: TemplateKind, name: impl Into<String>) -> Self {
        SheetError::NotFound {
            kind,
            name: name.into(),
        }
    }
}

pub type SheetResult<T> = Result<T, SheetError>;
