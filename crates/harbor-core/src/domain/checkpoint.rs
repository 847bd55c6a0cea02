//! Checkpoint: the suspended state of a task awaiting a decision.

use serde::{Deserialize, Serialize};

use super::ids::{CorrelationId, TaskId};
use super::order::{OrderResult, ShippingOrder};

/// Persisted snapshot of one suspended gated invocation.
///
/// Everything needed to resume lives here: the gated order itself, its
/// position in the task's batch, and the results of the orders already
/// placed. While suspended, the task holds no thread or in-memory state,
/// so the process may restart between suspension and resumption.
///
/// Invariants:
/// - At most one unresolved checkpoint per task at a time.
/// - Created once by the approval gate, consumed and deleted exactly once
///   when a matching decision arrives, never mutated otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// The only valid key for resuming this exact suspension.
    pub correlation_id: CorrelationId,

    /// Owning task.
    pub task_id: TaskId,

    /// Human-readable description of what is being approved.
    pub hint: String,

    /// Parameters of the gated invocation, immutable once created.
    pub order: ShippingOrder,

    /// Position of the gated order within the task's batch.
    pub position: usize,

    /// Results of the orders placed before the suspension point.
    pub completed: Vec<OrderResult>,
}

impl Checkpoint {
    pub fn new(
        correlation_id: CorrelationId,
        task_id: TaskId,
        hint: String,
        order: ShippingOrder,
        position: usize,
        completed: Vec<OrderResult>,
    ) -> Self {
        Self {
            correlation_id,
            task_id,
            hint,
            order,
            position,
            completed,
        }
    }
}
