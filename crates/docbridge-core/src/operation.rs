use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Discriminant of an [`Operation`], used in error messages and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Update,
    Delete,
    Submit,
    Cancel,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Submit => "submit",
            Self::Cancel => "cancel",
        };
        write!(f, "{s}")
    }
}

/// A single mutating step against the remote document store.
///
/// Each variant carries only the fields its semantics require; a request
/// with an unknown operation tag fails at the deserialization boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Operation {
    /// Insert a new document into a resource collection.
    Create {
        resource_type: String,
        document: Document,
    },
    /// Apply a partial patch to an existing document.
    Update {
        resource_type: String,
        identifier: String,
        patch: Document,
    },
    /// Remove a document.
    Delete {
        resource_type: String,
        identifier: String,
    },
    /// Transition a document's lifecycle status to submitted.
    Submit {
        resource_type: String,
        identifier: String,
    },
    /// Transition a document's lifecycle status to cancelled.
    Cancel {
        resource_type: String,
        identifier: String,
    },
}

impl Operation {
    #[must_use]
    pub fn create(resource_type: impl Into<String>, document: Document) -> Self {
        Self::Create {
            resource_type: resource_type.into(),
            document,
        }
    }

    #[must_use]
    pub fn update(
        resource_type: impl Into<String>,
        identifier: impl Into<String>,
        patch: Document,
    ) -> Self {
        Self::Update {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
            patch,
        }
    }

    #[must_use]
    pub fn delete(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::Delete {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn submit(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::Submit {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn cancel(resource_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::Cancel {
            resource_type: resource_type.into(),
            identifier: identifier.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Create { .. } => OperationKind::Create,
            Self::Update { .. } => OperationKind::Update,
            Self::Delete { .. } => OperationKind::Delete,
            Self::Submit { .. } => OperationKind::Submit,
            Self::Cancel { .. } => OperationKind::Cancel,
        }
    }

    #[must_use]
    pub fn resource_type(&self) -> &str {
        match self {
            Self::Create { resource_type, .. }
            | Self::Update { resource_type, .. }
            | Self::Delete { resource_type, .. }
            | Self::Submit { resource_type, .. }
            | Self::Cancel { resource_type, .. } => resource_type,
        }
    }

    /// Identifier targeted by this operation, `None` for creations (the
    /// store assigns one on success).
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Create { .. } => None,
            Self::Update { identifier, .. }
            | Self::Delete { identifier, .. }
            | Self::Submit { identifier, .. }
            | Self::Cancel { identifier, .. } => Some(identifier),
        }
    }
}
