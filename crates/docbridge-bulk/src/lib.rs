//! Bulk transaction execution against the remote document store.
//!
//! A batch is validated as a whole before any remote call, then driven
//! strictly in order. Per-operation failures become outcome entries, never
//! errors; only validation rejects the call itself. In all-or-nothing mode
//! a failure stops execution and completed creations are undone in reverse
//! completion order.

mod executor;
mod rollback;
mod validator;

pub use executor::BulkExecutor;
pub use validator::{MAX_BATCH_OPERATIONS, validate_batch};

pub type Result<T> = std::result::Result<T, docbridge_core::BatchError>;
