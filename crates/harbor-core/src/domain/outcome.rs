//! Execution outcomes returned to the caller of `submit`/`resume`.

use serde::{Deserialize, Serialize};

use super::errors::HarborError;
use super::ids::CorrelationId;
use super::order::OrderResult;

/// Aggregated business result of a task that reached a terminal business
/// outcome (completed or rejected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Results in placement order, including a trailing rejection if the
    /// task ended rejected.
    pub results: Vec<OrderResult>,

    /// One-line human summary produced by the completion capability.
    pub summary: String,
}

/// What the caller gets back from one `submit` or `resume` call.
///
/// Errors are carried inside `Failed` rather than a `Result` so that every
/// path out of the executor is an explicit outcome; nothing is swallowed
/// and nothing is retried on the caller's behalf.
#[derive(Debug)]
pub enum ExecutionOutcome {
    /// The task reached completed or rejected; see the result's statuses.
    Done(TaskResult),

    /// The task is suspended awaiting a decision for `correlation_id`.
    Pending {
        correlation_id: CorrelationId,
        hint: String,
    },

    /// The call failed; the task (if one was created) is marked failed.
    Failed(HarborError),
}

impl ExecutionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, ExecutionOutcome::Pending { .. })
    }

    pub fn is_done(&self) -> bool {
        matches!(self, ExecutionOutcome::Done(_))
    }
}
