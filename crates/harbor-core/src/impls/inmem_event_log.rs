//! In-memory event log implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{HarborError, TaskEvent};
use crate::ports::EventLog;

/// Append-only in-memory event log, one vector per session.
#[derive(Default)]
pub struct InMemoryEventLog {
    sessions: Mutex<HashMap<String, Vec<TaskEvent>>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events appended for one session, in append order.
    pub async fn events(&self, session_id: &str) -> Vec<TaskEvent> {
        let sessions = self.sessions.lock().await;
        sessions.get(session_id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl EventLog for InMemoryEventLog {
    async fn append_event(&self, session_id: &str, event: TaskEvent) -> Result<(), HarborError> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(session_id.to_string())
            .or_default()
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_are_kept_in_append_order_per_session() {
        let log = InMemoryEventLog::new();

        log.append_event("s1", TaskEvent::Submitted { orders: 1 })
            .await
            .unwrap();
        log.append_event("s2", TaskEvent::Submitted { orders: 2 })
            .await
            .unwrap();
        log.append_event(
            "s1",
            TaskEvent::Completed {
                summary: "done".to_string(),
            },
        )
        .await
        .unwrap();

        let s1 = log.events("s1").await;
        assert_eq!(s1.len(), 2);
        assert!(matches!(s1[0], TaskEvent::Submitted { orders: 1 }));
        assert!(matches!(s1[1], TaskEvent::Completed { .. }));

        assert_eq!(log.events("s2").await.len(), 1);
        assert!(log.events("s3").await.is_empty());
    }
}
