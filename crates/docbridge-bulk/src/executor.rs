use docbridge_core::{BatchReport, DocumentPayload, Operation, OperationOutcome};
use docbridge_gateway::{DocumentGateway, GatewayError, LifecycleState};
use tracing::debug;

use crate::rollback::{self, CompletedCreation};
use crate::validator::validate_batch;

/// Drives an ordered batch of operations against the remote store.
///
/// The gateway handle is injected at construction; the executor keeps no
/// state between batches, and concurrent executors over the same store do
/// not coordinate.
pub struct BulkExecutor<G> {
    gateway: G,
}

impl<G: DocumentGateway> BulkExecutor<G> {
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Execute `operations` strictly in order as one logical unit.
    ///
    /// In best-effort mode (`rollback_on_failure == false`) every operation
    /// is attempted exactly once and the report covers the full batch. With
    /// `rollback_on_failure` set, execution stops at the first failure,
    /// completed creations are undone in reverse completion order, and
    /// operations after the failure are neither executed nor reported.
    ///
    /// Once any gateway call has been made the batch always yields a
    /// report: per-operation failures are recorded in it, not raised.
    ///
    /// # Errors
    ///
    /// Returns a [`BatchError`](docbridge_core::BatchError) if the batch
    /// fails validation, in which case no gateway call has been made.
    pub fn run_batch(
        &self,
        operations: &[Operation],
        rollback_on_failure: bool,
    ) -> crate::Result<BatchReport> {
        validate_batch(operations)?;

        let mut outcomes = Vec::with_capacity(operations.len());
        let mut creations: Vec<CompletedCreation> = Vec::new();
        let mut rolled_back = false;

        for (index, operation) in operations.iter().enumerate() {
            debug!(
                index,
                kind = %operation.kind(),
                resource_type = %operation.resource_type(),
                "dispatching operation"
            );
            match self.dispatch(operation) {
                Ok(payload) => {
                    if let (Operation::Create { resource_type, .. }, Some(created)) =
                        (operation, payload.as_ref())
                    {
                        creations.push(CompletedCreation {
                            resource_type: resource_type.clone(),
                            identifier: created.identifier.clone(),
                        });
                    }
                    outcomes.push(OperationOutcome::success(index, payload));
                }
                Err(error) => {
                    debug!(index, error = %error, "operation failed");
                    outcomes.push(OperationOutcome::failure(index, error.to_string()));
                    if rollback_on_failure {
                        rollback::undo_creations(&self.gateway, &mut creations);
                        rolled_back = true;
                        break;
                    }
                }
            }
        }

        Ok(BatchReport::assemble(outcomes, rolled_back))
    }

    fn dispatch(&self, operation: &Operation) -> Result<Option<DocumentPayload>, GatewayError> {
        match operation {
            Operation::Create {
                resource_type,
                document,
            } => self.gateway.create(resource_type, document).map(Some),
            Operation::Update {
                resource_type,
                identifier,
                patch,
            } => self
                .gateway
                .update(resource_type, identifier, patch)
                .map(Some),
            Operation::Delete {
                resource_type,
                identifier,
            } => self.gateway.delete(resource_type, identifier).map(|()| None),
            Operation::Submit {
                resource_type,
                identifier,
            } => self
                .gateway
                .set_lifecycle_status(resource_type, identifier, LifecycleState::Submitted)
                .map(Some),
            Operation::Cancel {
                resource_type,
                identifier,
            } => self
                .gateway
                .set_lifecycle_status(resource_type, identifier, LifecycleState::Cancelled)
                .map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use docbridge_core::Document;
    use docbridge_gateway::testing::{GatewayCall, RecordingGateway};
    use serde_json::json;

    use super::*;

    fn document(field: &str, value: &str) -> Document {
        let mut doc = Document::new();
        doc.insert(field.to_string(), json!(value));
        doc
    }

    #[test]
    fn submit_and_cancel_map_to_lifecycle_transitions() -> anyhow::Result<()> {
        let gateway = RecordingGateway::new();
        let executor = BulkExecutor::new(&gateway);

        executor.run_batch(
            &[
                Operation::submit("invoice", "INV-001"),
                Operation::cancel("invoice", "INV-002"),
            ],
            false,
        )?;

        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::SetLifecycleStatus {
                    resource_type: "invoice".to_string(),
                    identifier: "INV-001".to_string(),
                    target: LifecycleState::Submitted,
                },
                GatewayCall::SetLifecycleStatus {
                    resource_type: "invoice".to_string(),
                    identifier: "INV-002".to_string(),
                    target: LifecycleState::Cancelled,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn delete_succeeds_without_a_payload() -> anyhow::Result<()> {
        let gateway = RecordingGateway::new();
        let executor = BulkExecutor::new(&gateway);

        let report = executor.run_batch(&[Operation::delete("invoice", "INV-001")], false)?;

        assert!(report.outcomes[0].succeeded);
        assert!(report.outcomes[0].payload.is_none());
        Ok(())
    }

    #[test]
    fn create_payload_carries_the_assigned_identifier() -> anyhow::Result<()> {
        let gateway = RecordingGateway::new();
        let executor = BulkExecutor::new(&gateway);

        let report = executor.run_batch(
            &[Operation::create("invoice", document("customer", "ACME"))],
            false,
        )?;

        let payload = report.outcomes[0]
            .payload
            .as_ref()
            .expect("create returns a payload");
        assert_eq!(payload.identifier, "invoice-1");
        Ok(())
    }

    #[test]
    fn executor_exposes_its_gateway_handle() {
        let executor = BulkExecutor::new(RecordingGateway::new());

        assert_eq!(executor.gateway().call_count(), 0);
    }
}
