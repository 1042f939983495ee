pub mod document;
pub mod error;
pub mod operation;
pub mod report;

pub use document::{Document, DocumentPayload};
pub use error::BatchError;
pub use operation::{Operation, OperationKind};
pub use report::{BatchReport, OperationOutcome};
