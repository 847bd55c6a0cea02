use thiserror::Error;

use super::ids::{CorrelationId, TaskId};
use super::task::TaskStatus;

/// Error taxonomy for the approval workflow.
///
/// Every variant is surfaced to the caller of `submit`/`resume` as an
/// explicit outcome; none is retried on the caller's behalf.
#[derive(Debug, Error)]
pub enum HarborError {
    /// Referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Caller reused a task id; it must choose a fresh one.
    #[error("duplicate task id: {0}")]
    DuplicateTask(TaskId),

    /// Two simultaneous suspensions on one task: an invariant violation.
    #[error("task {0} already has an unresolved checkpoint")]
    ConflictingCheckpoint(TaskId),

    /// Decision submitted for an already-resolved or unknown checkpoint
    /// (double-submit, typo, stale retry). Retrying cannot change this.
    #[error("no unresolved checkpoint for {0}")]
    UnknownCorrelation(CorrelationId),

    /// The store rejected a status transition.
    #[error("illegal status transition for task {task_id}: {from} -> {to}")]
    IllegalTransition {
        task_id: TaskId,
        from: TaskStatus,
        to: TaskStatus,
    },

    /// A decision arrived for a task that is no longer suspended
    /// (independently failed or otherwise moved on).
    #[error("task {task_id} is not suspended (status: {status})")]
    InvalidState { task_id: TaskId, status: TaskStatus },

    /// A remote collaborator precondition failed before any task state
    /// was created.
    #[error("dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// The completion capability failed; propagated as a task failure.
    #[error("completion failed: {0}")]
    Completion(String),

    /// Unclassified error during execution.
    #[error("{0}")]
    Execution(String),
}
