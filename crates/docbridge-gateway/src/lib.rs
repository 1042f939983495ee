//! Contract for the remote document store.
//!
//! The store is reachable only through a stateless resource API; this crate
//! specifies the four mutation primitives and the classified error they
//! return. Transport, sessions and credentials live behind implementations
//! of [`DocumentGateway`].

mod error;
mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{ErrorKind, GatewayError};
pub use types::LifecycleState;

use docbridge_core::{Document, DocumentPayload};

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Synchronous access to the remote document store, keyed by
/// `(resource_type, identifier)`.
///
/// Every call either succeeds with the store's payload or returns a
/// [`GatewayError`]; a per-call timeout that exhausts surfaces as an
/// ordinary error.
pub trait DocumentGateway: Send + Sync {
    /// Insert a new document; the store assigns and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the document or the call fails.
    fn create(&self, resource_type: &str, document: &Document) -> Result<DocumentPayload>;

    /// Apply a partial patch to an existing document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist, the patch is
    /// rejected, or the call fails.
    fn update(&self, resource_type: &str, identifier: &str, patch: &Document)
    -> Result<DocumentPayload>;

    /// Remove a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist or the call fails.
    fn delete(&self, resource_type: &str, identifier: &str) -> Result<()>;

    /// Transition a document's lifecycle status to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not exist, is already in the
    /// target state, or the call fails.
    fn set_lifecycle_status(
        &self,
        resource_type: &str,
        identifier: &str,
        target: LifecycleState,
    ) -> Result<DocumentPayload>;
}

impl<G: DocumentGateway + ?Sized> DocumentGateway for &G {
    fn create(&self, resource_type: &str, document: &Document) -> Result<DocumentPayload> {
        (**self).create(resource_type, document)
    }

    fn update(
        &self,
        resource_type: &str,
        identifier: &str,
        patch: &Document,
    ) -> Result<DocumentPayload> {
        (**self).update(resource_type, identifier, patch)
    }

    fn delete(&self, resource_type: &str, identifier: &str) -> Result<()> {
        (**self).delete(resource_type, identifier)
    }

    fn set_lifecycle_status(
        &self,
        resource_type: &str,
        identifier: &str,
        target: LifecycleState,
    ) -> Result<DocumentPayload> {
        (**self).set_lifecycle_status(resource_type, identifier, target)
    }
}
