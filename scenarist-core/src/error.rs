//! Error types for content loading and lookup.

use thiserror::Error;

/// Which kind of record a lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Scenario,
    Pack,
    Category,
    BlogPost,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scenario => write!(f, "scenario"),
            Self::Pack => write!(f, "pack"),
            Self::Category => write!(f, "category"),
            Self::BlogPost => write!(f, "blog post"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    /// A lookup by id or slug found nothing.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: RecordKind, key: String },

    /// The loader could not read a content source.
    #[error("failed to load {source_name}: {message}")]
    Load {
        source_name: String,
        message: String,
    },

    /// Content parsed but breaks a structural rule.
    #[error("invalid content: {0}")]
    Invalid(String),
}

impl ContentError {
    #[must_use]
    pub fn not_found(kind: RecordKind, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn load(source_name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Load {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
