//! Integration tests for all-or-nothing mode: stop at the first failure and
//! undo completed creations in reverse completion order.

use docbridge_bulk::BulkExecutor;
use docbridge_core::{Document, Operation};
use docbridge_gateway::GatewayError;
use docbridge_gateway::testing::{GatewayCall, GatewayMethod, RecordingGateway};
use serde_json::json;

fn document(field: &str, value: &str) -> Document {
    let mut doc = Document::new();
    doc.insert(field.to_string(), json!(value));
    doc
}

#[test]
fn completed_creations_are_deleted_in_reverse_order() -> anyhow::Result<()> {
    let gateway = RecordingGateway::new().with_failure(
        GatewayMethod::Update,
        "INV-MISSING",
        GatewayError::not_found("invoice INV-MISSING does not exist"),
    );
    let executor = BulkExecutor::new(&gateway);
    let operations = vec![
        Operation::create("invoice", document("customer", "ACME")),
        Operation::create("invoice", document("customer", "Initech")),
        Operation::update("invoice", "INV-MISSING", document("total", "99")),
    ];

    let report = executor.run_batch(&operations, true)?;

    assert!(report.rolled_back);
    assert_eq!(
        gateway.deleted_identifiers(),
        vec!["invoice-2", "invoice-1"]
    );
    assert_eq!(
        gateway.calls(),
        vec![
            GatewayCall::Create {
                resource_type: "invoice".to_string(),
            },
            GatewayCall::Create {
                resource_type: "invoice".to_string(),
            },
            GatewayCall::Update {
                resource_type: "invoice".to_string(),
                identifier: "INV-MISSING".to_string(),
            },
            GatewayCall::Delete {
                resource_type: "invoice".to_string(),
                identifier: "invoice-2".to_string(),
            },
            GatewayCall::Delete {
                resource_type: "invoice".to_string(),
                identifier: "invoice-1".to_string(),
            },
        ]
    );
    Ok(())
}

#[test]
fn operations_after_the_failure_are_not_executed_and_get_no_outcome() -> anyhow::Result<()> {
    let gateway = RecordingGateway::new().with_failure(
        GatewayMethod::Update,
        "INV-MISSING",
        GatewayError::not_found("invoice INV-MISSING does not exist"),
    );
    let executor = BulkExecutor::new(&gateway);
    let operations = vec![
        Operation::create("invoice", document("customer", "ACME")),
        Operation::update("invoice", "INV-MISSING", document("total", "99")),
        Operation::submit("invoice", "invoice-1"),
    ];

    let report = executor.run_batch(&operations, true)?;

    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.completed_count, 1);
    assert_eq!(report.failed_count, 1);
    let lifecycle_calls = gateway
        .calls()
        .iter()
        .filter(|call| matches!(call, GatewayCall::SetLifecycleStatus { .. }))
        .count();
    assert_eq!(lifecycle_calls, 0);
    Ok(())
}

#[test]
fn failure_with_no_prior_creations_still_marks_the_report() -> anyhow::Result<()> {
    let gateway = RecordingGateway::new().with_failure(
        GatewayMethod::Update,
        "INV-MISSING",
        GatewayError::not_found("invoice INV-MISSING does not exist"),
    );
    let executor = BulkExecutor::new(&gateway);
    let operations = vec![Operation::update(
        "invoice",
        "INV-MISSING",
        document("total", "99"),
    )];

    let report = executor.run_batch(&operations, true)?;

    assert!(report.rolled_back);
    assert_eq!(report.outcomes.len(), 1);
    assert!(gateway.deleted_identifiers().is_empty());
    Ok(())
}

#[test]
fn only_creations_are_compensated() -> anyhow::Result<()> {
    let gateway = RecordingGateway::new().with_failure(
        GatewayMethod::SetLifecycleStatus,
        "INV-DONE",
        GatewayError::already_in_state("invoice is already submitted"),
    );
    let executor = BulkExecutor::new(&gateway);
    let operations = vec![
        Operation::update("invoice", "INV-007", document("total", "150")),
        Operation::create("lead", document("company", "Hooli")),
        Operation::submit("invoice", "INV-DONE"),
    ];

    let report = executor.run_batch(&operations, true)?;

    assert!(report.rolled_back);
    assert_eq!(gateway.deleted_identifiers(), vec!["lead-1"]);
    assert!(report.outcomes[0].succeeded);
    assert!(report.outcomes[1].succeeded);
    assert!(!report.outcomes[2].succeeded);
    Ok(())
}

#[test]
fn successful_batch_is_not_rolled_back() -> anyhow::Result<()> {
    let gateway = RecordingGateway::new();
    let executor = BulkExecutor::new(&gateway);
    let operations = vec![
        Operation::create("invoice", document("customer", "ACME")),
        Operation::submit("invoice", "invoice-1"),
        Operation::cancel("invoice", "invoice-1"),
    ];

    let report = executor.run_batch(&operations, true)?;

    assert!(!report.rolled_back);
    assert_eq!(report.completed_count, 3);
    assert_eq!(report.failed_count, 0);
    assert!(gateway.deleted_identifiers().is_empty());
    Ok(())
}
