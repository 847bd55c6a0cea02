//! Decision channel: carries the external approve/reject answer back in.

use std::sync::Arc;

use crate::domain::{Checkpoint, CorrelationId, Decision, HarborError};
use crate::ports::TaskStore;

/// A claimed checkpoint plus the decision that claimed it.
///
/// Handing this to the executor is the only way to resume a suspension.
#[derive(Debug)]
pub struct ResumeHandle {
    pub checkpoint: Checkpoint,
    pub decision: Decision,
}

/// Accepts an external decision and routes it to the executor.
///
/// Exactly-once: `resolve_checkpoint` is atomic-and-destructive, so
/// submitting the same correlation id twice succeeds once and yields
/// `UnknownCorrelation` on every later attempt. Callers must treat that
/// error as "decision already applied or never requested" and not retry.
pub struct DecisionChannel {
    store: Arc<dyn TaskStore>,
}

impl DecisionChannel {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    pub async fn submit_decision(
        &self,
        correlation_id: CorrelationId,
        approved: bool,
    ) -> Result<ResumeHandle, HarborError> {
        let checkpoint = self.store.resolve_checkpoint(correlation_id).await?;
        Ok(ResumeHandle {
            checkpoint,
            decision: Decision::new(correlation_id, approved),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ShippingOrder, ShippingRequest, TaskId};
    use crate::ports::{IdGenerator, SystemClock, UlidGenerator};
    use crate::store::InMemoryTaskStore;
    use ulid::Ulid;

    #[tokio::test]
    async fn unknown_correlation_is_surfaced() {
        let store: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::new());
        let channel = DecisionChannel::new(store);

        let err = channel
            .submit_decision(CorrelationId::from(Ulid::new()), true)
            .await
            .unwrap_err();
        assert!(matches!(err, HarborError::UnknownCorrelation(_)));
    }

    #[tokio::test]
    async fn same_decision_twice_succeeds_exactly_once() {
        let store: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::new());
        let ids = UlidGenerator::new(SystemClock);
        let task_id = TaskId::new("T2");

        store
            .create_task(task_id.clone(), ShippingRequest::single(10, "Rotterdam"))
            .await
            .unwrap();
        let checkpoint = Checkpoint::new(
            ids.next_correlation_id(),
            task_id,
            "Large order".to_string(),
            ShippingOrder::new(10, "Rotterdam"),
            0,
            vec![],
        );
        let correlation_id = checkpoint.correlation_id;
        store.save_checkpoint(checkpoint).await.unwrap();

        let channel = DecisionChannel::new(store);

        let handle = channel.submit_decision(correlation_id, true).await.unwrap();
        assert!(handle.decision.approved);
        assert_eq!(handle.checkpoint.correlation_id, correlation_id);

        let err = channel
            .submit_decision(correlation_id, true)
            .await
            .unwrap_err();
        assert!(matches!(err, HarborError::UnknownCorrelation(_)));
    }
}
