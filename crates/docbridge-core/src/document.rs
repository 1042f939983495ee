use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A structured document (or partial patch) as the remote store sees it.
///
/// Field order is preserved so that documents round-trip through the wire
/// representation unchanged.
pub type Document = IndexMap<String, Value>;

/// Payload returned by the remote store for a successful mutation.
///
/// Serializes to the wire shape `{identifier, ...fields}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub identifier: String,
    #[serde(flatten)]
    pub fields: Document,
}

impl DocumentPayload {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            fields: Document::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Document) -> Self {
        self.fields = fields;
        self
    }
}
