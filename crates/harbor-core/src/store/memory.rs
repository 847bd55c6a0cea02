//! In-memory task store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Checkpoint, CorrelationId, HarborError, ShippingRequest, TaskId, TaskRecord, TaskStatus,
};
use crate::ports::{Clock, SystemClock, TaskStore};

/// In-memory store state.
struct StoreState {
    /// All task records (single source of truth for tasks).
    tasks: HashMap<TaskId, TaskRecord>,

    /// Unresolved checkpoints keyed by correlation id.
    checkpoints: HashMap<CorrelationId, Checkpoint>,

    /// Which task currently holds an unresolved checkpoint.
    suspended: HashMap<TaskId, CorrelationId>,
}

impl StoreState {
    fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            checkpoints: HashMap::new(),
            suspended: HashMap::new(),
        }
    }

    fn transition(
        &mut self,
        task_id: &TaskId,
        status: TaskStatus,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), HarborError> {
        let record = self
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| HarborError::NotFound(task_id.clone()))?;

        if !record.status.can_transition_to(status) {
            return Err(HarborError::IllegalTransition {
                task_id: task_id.clone(),
                from: record.status,
                to: status,
            });
        }

        record.status = status;
        record.updated_at = now;
        Ok(())
    }
}

/// In-memory `TaskStore`.
///
/// All operations take the single state lock, which makes each of them
/// atomic with respect to the others; in particular `resolve_checkpoint`
/// is retrieve-and-remove under the lock, so exactly one of any number of
/// concurrent resolvers wins.
pub struct InMemoryTaskStore {
    state: Arc<Mutex<StoreState>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::new())),
            clock,
        }
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create_task(
        &self,
        task_id: TaskId,
        request: ShippingRequest,
    ) -> Result<TaskRecord, HarborError> {
        let mut state = self.state.lock().await;

        if state.tasks.contains_key(&task_id) {
            return Err(HarborError::DuplicateTask(task_id));
        }

        let record = TaskRecord::new(task_id.clone(), request, self.clock.now());
        state.tasks.insert(task_id.clone(), record.clone());

        tracing::debug!(task_id = %task_id, "task created");
        Ok(record)
    }

    async fn get_task(&self, task_id: &TaskId) -> Result<TaskRecord, HarborError> {
        let state = self.state.lock().await;
        state
            .tasks
            .get(task_id)
            .cloned()
            .ok_or_else(|| HarborError::NotFound(task_id.clone()))
    }

    async fn save_checkpoint(&self, checkpoint: Checkpoint) -> Result<(), HarborError> {
        let mut state = self.state.lock().await;

        let task_id = checkpoint.task_id.clone();
        if !state.tasks.contains_key(&task_id) {
            return Err(HarborError::NotFound(task_id));
        }
        if state.suspended.contains_key(&task_id) {
            return Err(HarborError::ConflictingCheckpoint(task_id));
        }

        state
            .suspended
            .insert(task_id.clone(), checkpoint.correlation_id);
        state
            .checkpoints
            .insert(checkpoint.correlation_id, checkpoint);

        tracing::debug!(task_id = %task_id, "checkpoint saved");
        Ok(())
    }

    async fn resolve_checkpoint(
        &self,
        correlation_id: CorrelationId,
    ) -> Result<Checkpoint, HarborError> {
        let mut state = self.state.lock().await;

        let checkpoint = state
            .checkpoints
            .remove(&correlation_id)
            .ok_or(HarborError::UnknownCorrelation(correlation_id))?;
        state.suspended.remove(&checkpoint.task_id);

        tracing::debug!(
            task_id = %checkpoint.task_id,
            correlation_id = %correlation_id,
            "checkpoint resolved"
        );
        Ok(checkpoint)
    }

    async fn update_status(
        &self,
        task_id: &TaskId,
        status: TaskStatus,
    ) -> Result<(), HarborError> {
        let mut state = self.state.lock().await;
        state.transition(task_id, status, self.clock.now())
    }

    async fn mark_failed(&self, task_id: &TaskId, error: String) -> Result<(), HarborError> {
        let mut state = self.state.lock().await;
        let now = self.clock.now();
        state.transition(task_id, TaskStatus::Failed, now)?;
        if let Some(record) = state.tasks.get_mut(task_id) {
            record.last_error = Some(error);
        }
        Ok(())
    }
}
