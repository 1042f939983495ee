use docbridge_core::{BatchError, Operation};

/// Upper bound on operations per batch.
pub const MAX_BATCH_OPERATIONS: usize = 100;

/// Validate a whole batch before any gateway call is made.
///
/// Batch-level rules run first (empty list, size limit), then each element
/// is checked in input order. The first violation aborts validation, so a
/// rejected batch has had zero side effects.
///
/// # Errors
///
/// Returns the first [`BatchError`] found; element-level errors name the
/// offending index.
pub fn validate_batch(operations: &[Operation]) -> crate::Result<()> {
    if operations.is_empty() {
        return Err(BatchError::Empty);
    }
    if operations.len() > MAX_BATCH_OPERATIONS {
        return Err(BatchError::TooManyOperations {
            count: operations.len(),
            max: MAX_BATCH_OPERATIONS,
        });
    }
    for (index, operation) in operations.iter().enumerate() {
        validate_operation(index, operation)?;
    }
    Ok(())
}

fn validate_operation(index: usize, operation: &Operation) -> crate::Result<()> {
    if operation.resource_type().is_empty() {
        return Err(BatchError::MissingResourceType { index });
    }
    if let Some(identifier) = operation.identifier() {
        if identifier.is_empty() {
            return Err(BatchError::MissingIdentifier {
                kind: operation.kind(),
                index,
            });
        }
    }
    match operation {
        Operation::Create { document, .. } if document.is_empty() => {
            Err(BatchError::EmptyDocument { index })
        }
        Operation::Update { patch, .. } if patch.is_empty() => {
            Err(BatchError::EmptyPatch { index })
        }
        _ => Ok(()),
    }
}
