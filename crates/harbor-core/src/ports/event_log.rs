//! EventLog port - append-only session log.

use async_trait::async_trait;

use crate::domain::{HarborError, TaskEvent};

/// Append-only event store keyed by session id.
///
/// The core requires no ordering guarantee beyond append order within one
/// session. Each task logs under its own session (its task id).
#[async_trait]
pub trait EventLog: Send + Sync {
    async fn append_event(&self, session_id: &str, event: TaskEvent) -> Result<(), HarborError>;
}
