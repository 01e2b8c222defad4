//! Error and warning taxonomy for the conversion engine.

use serde::Serialize;
use thiserror::Error;

/// Locates a record inside the input document for diagnostics.
///
/// A path names the collection kind (e.g. `wasGeneratedBy`), optionally the
/// record identifier within it, and optionally the attribute field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordPath {
    /// Collection kind key, or `document` for the root.
    pub kind: String,
    /// Record identifier within the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Attribute key within the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl RecordPath {
    /// Path addressing the document root.
    pub fn root() -> Self {
        Self::collection("document")
    }

    /// Path addressing a whole record collection.
    pub fn collection(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            field: None,
        }
    }

    /// Path addressing one record.
    pub fn record(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: Some(id.into()),
            field: None,
        }
    }

    /// The same path narrowed to one attribute field.
    pub fn with_field(&self, field: impl Into<String>) -> Self {
        Self {
            kind: self.kind.clone(),
            id: self.id.clone(),
            field: Some(field.into()),
        }
    }
}

impl std::fmt::Display for RecordPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(id) = &self.id {
            write!(f, " '{}'", id)?;
        }
        if let Some(field) = &self.field {
            write!(f, ", field '{}'", field)?;
        }
        Ok(())
    }
}

/// Recoverable conditions recorded during conversion.
///
/// Warnings accumulate into [`Conversion::warnings`](crate::Conversion) and
/// never abort the document unless escalated via
/// [`ConverterConfig::strict`](crate::ConverterConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Warning {
    /// A typed-literal or language-tagged object is missing a required
    /// sub-field; the attribute was emitted as a best-effort plain value.
    #[error("malformed attribute '{key}' at {path}: {reason}")]
    MalformedAttribute {
        path: RecordPath,
        key: String,
        reason: String,
    },

    /// A record collection key outside the 14 fixed relation kinds.
    #[error("unknown relation kind '{kind}' skipped")]
    UnknownRelationKind { kind: String },

    /// A record collection key outside the fixed element kinds.
    #[error("unknown element kind '{kind}' skipped")]
    UnknownElementKind { kind: String },

    /// A bare attribute key collides with one of the record's renamed role
    /// keys; the role interpretation wins and the attribute is dropped.
    #[error("attribute '{key}' at {path} collides with a role key; attribute dropped")]
    RoleCollision { path: RecordPath, key: String },
}

/// Fatal conversion failures.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input violates the PROV-JSON record shape.
    #[error("invalid PROV-JSON at {path}: {message}")]
    Parse { path: RecordPath, message: String },

    /// A qualified name references a prefix absent from the active table.
    #[error("unresolved prefix '{prefix}' in name '{name}' at {path}")]
    UnresolvedPrefix {
        prefix: String,
        name: String,
        path: RecordPath,
    },

    /// The input is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A recoverable warning escalated by strict-mode configuration.
    #[error(transparent)]
    Strict(#[from] Warning),
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
