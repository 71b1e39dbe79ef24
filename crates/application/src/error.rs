//! Application error types

use registrar_domain::{Fault, ProcedureName};
use thiserror::Error;

/// A multi-call workflow stopped at a faulted step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{step} failed: {fault}")]
pub struct WorkflowError {
    /// Procedure whose call faulted.
    pub step: ProcedureName,
    /// Fault returned by that call.
    pub fault: Fault,
}

impl WorkflowError {
    /// Creates a workflow error for `step`.
    #[must_use]
    pub const fn new(step: ProcedureName, fault: Fault) -> Self {
        Self { step, fault }
    }
}

/// Result type alias for workflows.
pub type WorkflowResult<T> = Result<T, WorkflowError>;
