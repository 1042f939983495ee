use docbridge_gateway::DocumentGateway;
use tracing::{debug, warn};

/// A creation that completed and can be undone by deleting the document the
/// store returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompletedCreation {
    pub resource_type: String,
    pub identifier: String,
}

/// Undo completed creations in reverse completion order.
///
/// Only creations have a defined inverse: updates are not value-versioned,
/// deletes destroy unrecoverable state, and lifecycle transitions are not
/// guaranteed reversible by the store. Each compensating delete is
/// attempted independently; a failure is logged and swallowed so the
/// remaining compensations still run.
pub(crate) fn undo_creations<G: DocumentGateway>(
    gateway: &G,
    creations: &mut Vec<CompletedCreation>,
) {
    debug!(count = creations.len(), "rolling back completed creations");
    while let Some(creation) = creations.pop() {
        match gateway.delete(&creation.resource_type, &creation.identifier) {
            Ok(()) => debug!(
                resource_type = %creation.resource_type,
                identifier = %creation.identifier,
                "undid creation"
            ),
            Err(error) => warn!(
                resource_type = %creation.resource_type,
                identifier = %creation.identifier,
                error = %error,
                "compensating delete failed"
            ),
        }
    }
}
