//! Task record and status management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TaskId;
use super::order::ShippingRequest;

/// Task status.
///
/// State transitions:
/// - Running -> Suspended (a gated order is awaiting a decision)
/// - Running -> Completed | Rejected | Failed
/// - Suspended -> Running (briefly, while resuming) -> Completed | Rejected | Failed
/// - Suspended -> Failed (operator intervention / store-level failure)
///
/// Completed, Rejected and Failed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Running,
    Suspended,
    Completed,
    Rejected,
    Failed,
}

impl TaskStatus {
    /// Is this a terminal status (no further transitions)?
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskStatus::Completed | TaskStatus::Rejected | TaskStatus::Failed
        )
    }

    /// Is `next` a legal transition from this status?
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        match self {
            TaskStatus::Running => matches!(
                next,
                TaskStatus::Suspended
                    | TaskStatus::Completed
                    | TaskStatus::Rejected
                    | TaskStatus::Failed
            ),
            TaskStatus::Suspended => matches!(next, TaskStatus::Running | TaskStatus::Failed),
            TaskStatus::Completed | TaskStatus::Rejected | TaskStatus::Failed => false,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Running => "running",
            TaskStatus::Suspended => "suspended",
            TaskStatus::Completed => "completed",
            TaskStatus::Rejected => "rejected",
            TaskStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Durable record of one task.
///
/// Design:
/// - This is the single source of truth for task state; the store owns it.
/// - The executor never caches a copy across a suspension boundary, it
///   always reloads on resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub task_id: TaskId,
    pub request: ShippingRequest,
    pub status: TaskStatus,

    /// Detail of the error that moved this task to Failed, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,

    /// Timestamps for observability.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    pub fn new(task_id: TaskId, request: ShippingRequest, now: DateTime<Utc>) -> Self {
        Self {
            task_id,
            request,
            status: TaskStatus::Running,
            last_error: None,
            created_at: now,
            updated_at: now,
        }
    }
}
