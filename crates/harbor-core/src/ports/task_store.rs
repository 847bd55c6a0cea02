//! TaskStore port - the single source of truth for tasks and checkpoints.
//!
//! The store is the only shared mutable resource in the system; all
//! mutation goes through the atomic operations below. No other component
//! may touch persisted records directly.

use async_trait::async_trait;

use crate::domain::{
    Checkpoint, CorrelationId, HarborError, ShippingRequest, TaskId, TaskRecord, TaskStatus,
};

/// Durable keyed storage for Task and Checkpoint records.
///
/// Invariants the implementation must uphold:
/// - At most one unresolved checkpoint per task.
/// - `resolve_checkpoint` is atomic-and-destructive: under concurrent
///   resume attempts exactly one caller succeeds for a given correlation
///   id; all others get `UnknownCorrelation`.
/// - `update_status` rejects illegal transitions (terminal states never
///   move again).
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Create a new task in `running` status.
    ///
    /// Fails with `DuplicateTask` if the id is already taken.
    async fn create_task(
        &self,
        task_id: TaskId,
        request: ShippingRequest,
    ) -> Result<TaskRecord, HarborError>;

    /// Fails with `NotFound` if absent.
    async fn get_task(&self, task_id: &TaskId) -> Result<TaskRecord, HarborError>;

    /// Persist a checkpoint for its owning task.
    ///
    /// Fails with `ConflictingCheckpoint` if an unresolved checkpoint
    /// already exists for that task, `NotFound` if the task is unknown.
    async fn save_checkpoint(&self, checkpoint: Checkpoint) -> Result<(), HarborError>;

    /// Atomically retrieve and remove the checkpoint.
    ///
    /// Fails with `UnknownCorrelation` if no matching unresolved
    /// checkpoint exists (including: it was already resolved).
    async fn resolve_checkpoint(
        &self,
        correlation_id: CorrelationId,
    ) -> Result<Checkpoint, HarborError>;

    /// Transition the task's status.
    ///
    /// Fails with `NotFound` or `IllegalTransition`.
    async fn update_status(&self, task_id: &TaskId, status: TaskStatus)
        -> Result<(), HarborError>;

    /// Transition to `failed`, preserving the error detail on the record.
    async fn mark_failed(&self, task_id: &TaskId, error: String) -> Result<(), HarborError>;
}
