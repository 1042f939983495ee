use serde::{Deserialize, Serialize};

use crate::document::DocumentPayload;

/// Outcome of one executed operation.
///
/// Produced exactly once, at the moment the operation's execution completes,
/// and immutable thereafter. `index` is the operation's position in the
/// input batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub index: usize,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<DocumentPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl OperationOutcome {
    /// Outcome for an operation the store accepted. Deletions succeed
    /// without a payload.
    #[must_use]
    pub fn success(index: usize, payload: Option<DocumentPayload>) -> Self {
        Self {
            index,
            succeeded: true,
            payload,
            error_message: None,
        }
    }

    #[must_use]
    pub fn failure(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            succeeded: false,
            payload: None,
            error_message: Some(message.into()),
        }
    }
}

/// Final report for one batch run.
///
/// `outcomes` covers every operation that was executed, in input order.
/// In all-or-nothing mode that is the prefix up to and including the first
/// failure; operations that were never issued get no entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<OperationOutcome>,
    pub rolled_back: bool,
    pub completed_count: usize,
    pub failed_count: usize,
}

impl BatchReport {
    /// Assemble the report from the recorded outcomes and the rollback flag.
    ///
    /// Pure: the same inputs always produce an identical report.
    #[must_use]
    pub fn assemble(outcomes: Vec<OperationOutcome>, rolled_back: bool) -> Self {
        let completed_count = outcomes.iter().filter(|o| o.succeeded).count();
        let failed_count = outcomes.len() - completed_count;
        Self {
            outcomes,
            rolled_back,
            completed_count,
            failed_count,
        }
    }

    /// One line per outcome for display.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        for outcome in &self.outcomes {
            match &outcome.error_message {
                None => lines.push(format!("✓ operation {}", outcome.index)),
                Some(message) => lines.push(format!("✗ operation {}: {message}", outcome.index)),
            }
        }
        if self.rolled_back {
            lines.push("↩ completed creations rolled back".to_string());
        }
        lines.join("\n")
    }
}
