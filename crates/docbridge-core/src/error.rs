use thiserror::Error;

use crate::operation::OperationKind;

/// Batch-rejection errors, raised by validation before any remote call.
///
/// One of these aborts the whole batch with zero side effects; per-operation
/// failures during execution are reported through the outcome list instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("batch contains no operations")]
    Empty,

    #[error("batch contains {count} operations, maximum is {max}")]
    TooManyOperations { count: usize, max: usize },

    #[error("resource type required at index {index}")]
    MissingResourceType { index: usize },

    #[error("document required for create at index {index}")]
    EmptyDocument { index: usize },

    #[error("identifier required for {kind} at index {index}")]
    MissingIdentifier { kind: OperationKind, index: usize },

    #[error("patch required for update at index {index}")]
    EmptyPatch { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_operations_names_both_counts() {
        let err = BatchError::TooManyOperations {
            count: 104,
            max: 100,
        };

        let msg = err.to_string();

        assert!(msg.contains("104"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn element_errors_name_the_offending_index() {
        let err = BatchError::MissingIdentifier {
            kind: OperationKind::Submit,
            index: 3,
        };

        assert_eq!(err.to_string(), "identifier required for submit at index 3");
    }

    #[test]
    fn empty_batch_error_message() {
        assert_eq!(
            BatchError::Empty.to_string(),
            "batch contains no operations"
        );
    }
}
