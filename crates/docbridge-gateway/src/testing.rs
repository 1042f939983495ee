//! In-memory gateway doubles for exercising batch execution without a
//! remote store.

use std::collections::HashMap;
use std::sync::Mutex;

use docbridge_core::{Document, DocumentPayload};
use serde_json::Value;

use crate::{DocumentGateway, GatewayError, LifecycleState, Result};

/// Gateway primitive a scripted failure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayMethod {
    Create,
    Update,
    Delete,
    SetLifecycleStatus,
}

/// One recorded gateway call, in the order it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Create {
        resource_type: String,
    },
    Update {
        resource_type: String,
        identifier: String,
    },
    Delete {
        resource_type: String,
        identifier: String,
    },
    SetLifecycleStatus {
        resource_type: String,
        identifier: String,
        target: LifecycleState,
    },
}

/// Scriptable in-memory gateway that records every call.
///
/// Creations are assigned deterministic identifiers
/// (`<resource_type>-<n>`, counted across the gateway's lifetime) so tests
/// can assert compensation order. Calls scripted to fail are still
/// recorded: the call reached the store, the store rejected it.
pub struct RecordingGateway {
    calls: Mutex<Vec<GatewayCall>>,
    created: Mutex<usize>,
    failures: Mutex<HashMap<(GatewayMethod, String), GatewayError>>,
}

impl RecordingGateway {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            created: Mutex::new(0),
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Script a failure for future calls of `method`.
    ///
    /// Creations match on resource type (no identifier exists yet); every
    /// other method matches on identifier.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_failure(
        self,
        method: GatewayMethod,
        target: impl Into<String>,
        error: GatewayError,
    ) -> Self {
        self.failures
            .lock()
            .expect("lock poisoned")
            .insert((method, target.into()), error);
        self
    }

    /// All recorded calls, in issue order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }

    /// Identifiers passed to `delete`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn deleted_identifiers(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Delete { identifier, .. } => Some(identifier.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().expect("lock poisoned").push(call);
    }

    fn scripted_failure(&self, method: GatewayMethod, target: &str) -> Option<GatewayError> {
        self.failures
            .lock()
            .expect("lock poisoned")
            .get(&(method, target.to_string()))
            .cloned()
    }
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentGateway for RecordingGateway {
    fn create(&self, resource_type: &str, document: &Document) -> Result<DocumentPayload> {
        self.record(GatewayCall::Create {
            resource_type: resource_type.to_string(),
        });
        if let Some(error) = self.scripted_failure(GatewayMethod::Create, resource_type) {
            return Err(error);
        }
        let sequence = {
            let mut created = self.created.lock().expect("lock poisoned");
            *created += 1;
            *created
        };
        let identifier = format!("{resource_type}-{sequence}");
        Ok(DocumentPayload::new(identifier).with_fields(document.clone()))
    }

    fn update(
        &self,
        resource_type: &str,
        identifier: &str,
        patch: &Document,
    ) -> Result<DocumentPayload> {
        self.record(GatewayCall::Update {
            resource_type: resource_type.to_string(),
            identifier: identifier.to_string(),
        });
        if let Some(error) = self.scripted_failure(GatewayMethod::Update, identifier) {
            return Err(error);
        }
        Ok(DocumentPayload::new(identifier).with_fields(patch.clone()))
    }

    fn delete(&self, resource_type: &str, identifier: &str) -> Result<()> {
        self.record(GatewayCall::Delete {
            resource_type: resource_type.to_string(),
            identifier: identifier.to_string(),
        });
        if let Some(error) = self.scripted_failure(GatewayMethod::Delete, identifier) {
            return Err(error);
        }
        Ok(())
    }

    fn set_lifecycle_status(
        &self,
        resource_type: &str,
        identifier: &str,
        target: LifecycleState,
    ) -> Result<DocumentPayload> {
        self.record(GatewayCall::SetLifecycleStatus {
            resource_type: resource_type.to_string(),
            identifier: identifier.to_string(),
            target,
        });
        if let Some(error) = self.scripted_failure(GatewayMethod::SetLifecycleStatus, identifier) {
            return Err(error);
        }
        Ok(DocumentPayload::new(identifier)
            .with_field("status", Value::String(target.as_str().to_string())))
    }
}
