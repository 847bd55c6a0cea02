//! Task executor: drives a task from submission to a terminal state.
//!
//! The executor is the only component that sequences the others: it
//! creates the task record, walks the order batch through the approval
//! gate, persists checkpoints on suspension, and picks the batch back up
//! when a decision arrives through the channel.

use std::sync::Arc;

use crate::channel::DecisionChannel;
use crate::domain::{
    CorrelationId, ExecutionOutcome, HarborError, OrderResult, OrderStatus, ShippingRequest,
    TaskEvent, TaskId, TaskResult, TaskStatus,
};
use crate::gate::{ApprovalGate, GateResult};
use crate::ports::{Completion, EventLog, ServiceProbe, TaskStore};

/// Optional remote-dependency check performed before any task state is
/// created.
struct Preflight {
    probe: Arc<dyn ServiceProbe>,
    url: String,
}

/// Drives tasks through the approval state machine.
///
/// Per task: running -> {completed | failed | suspended};
/// suspended -> running (briefly, while resuming) -> {completed | rejected
/// | failed}. Suspending is the only blocking point in the system; a
/// suspended task holds no thread and no in-memory state.
pub struct Executor {
    store: Arc<dyn TaskStore>,
    gate: ApprovalGate,
    channel: DecisionChannel,
    completion: Arc<dyn Completion>,
    events: Arc<dyn EventLog>,
    preflight: Option<Preflight>,
}

impl Executor {
    pub fn new(
        store: Arc<dyn TaskStore>,
        gate: ApprovalGate,
        completion: Arc<dyn Completion>,
        events: Arc<dyn EventLog>,
    ) -> Self {
        let channel = DecisionChannel::new(Arc::clone(&store));
        Self {
            store,
            gate,
            channel,
            completion,
            events,
            preflight: None,
        }
    }

    /// Require `probe.check_available(url)` to pass before each submit.
    pub fn with_preflight(mut self, probe: Arc<dyn ServiceProbe>, url: impl Into<String>) -> Self {
        self.preflight = Some(Preflight {
            probe,
            url: url.into(),
        });
        self
    }

    /// Submit a new task.
    ///
    /// Returns `Pending` if a gated order suspended the task, `Done` if the
    /// whole batch went through, `Failed` otherwise. A failed submission
    /// never leaves the task dangling in `running`.
    pub async fn submit(&self, task_id: TaskId, request: ShippingRequest) -> ExecutionOutcome {
        if let Some(preflight) = &self.preflight
            && !preflight.probe.check_available(&preflight.url).await
        {
            tracing::warn!(task_id = %task_id, url = %preflight.url, "dependency unavailable");
            return ExecutionOutcome::Failed(HarborError::DependencyUnavailable(
                preflight.url.clone(),
            ));
        }

        let record = match self.store.create_task(task_id.clone(), request).await {
            Ok(record) => record,
            Err(e) => return ExecutionOutcome::Failed(e),
        };
        tracing::info!(task_id = %task_id, orders = record.request.orders.len(), "task submitted");

        let submitted = TaskEvent::Submitted {
            orders: record.request.orders.len(),
        };
        if let Err(e) = self.events.append_event(task_id.as_str(), submitted).await {
            return self.fail_task(&task_id, e).await;
        }

        match self.drive(&task_id, &record.request, 0, Vec::new(), None).await {
            Ok(outcome) => outcome,
            Err(e) => self.fail_task(&task_id, e).await,
        }
    }

    /// Resume a suspended task with an external decision.
    ///
    /// The checkpoint is claimed atomically first, so a second resume with
    /// the same correlation id fails with `UnknownCorrelation` no matter
    /// how the calls interleave.
    pub async fn resume(&self, correlation_id: CorrelationId, approved: bool) -> ExecutionOutcome {
        let handle = match self.channel.submit_decision(correlation_id, approved).await {
            Ok(handle) => handle,
            // Already applied or never requested; nothing to roll back.
            Err(e) => return ExecutionOutcome::Failed(e),
        };
        let task_id = handle.checkpoint.task_id.clone();
        tracing::info!(task_id = %task_id, correlation_id = %correlation_id, approved, "decision received");

        // The store is authoritative: a missing record here is corruption,
        // not a race, and is fatal.
        let record = match self.store.get_task(&task_id).await {
            Ok(record) => record,
            Err(e) => return ExecutionOutcome::Failed(e),
        };
        if record.status != TaskStatus::Suspended {
            return ExecutionOutcome::Failed(HarborError::InvalidState {
                task_id,
                status: record.status,
            });
        }

        if let Err(e) = self.store.update_status(&task_id, TaskStatus::Running).await {
            return ExecutionOutcome::Failed(e);
        }

        let received = TaskEvent::DecisionReceived {
            correlation_id,
            approved,
        };
        if let Err(e) = self.events.append_event(task_id.as_str(), received).await {
            return self.fail_task(&task_id, e).await;
        }

        let checkpoint = handle.checkpoint;
        match self
            .drive(
                &task_id,
                &record.request,
                checkpoint.position,
                checkpoint.completed,
                Some(handle.decision),
            )
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => self.fail_task(&task_id, e).await,
        }
    }

    /// Walk the order batch from `start`, applying the gate to each order.
    ///
    /// `decision` applies only to the order at `start` (the one the caller
    /// is resuming); a later large order suspends again, so sequential
    /// approvals per task come out of the same loop, one checkpoint at a
    /// time.
    async fn drive(
        &self,
        task_id: &TaskId,
        request: &ShippingRequest,
        start: usize,
        mut completed: Vec<OrderResult>,
        mut decision: Option<crate::domain::Decision>,
    ) -> Result<ExecutionOutcome, HarborError> {
        for (position, order) in request.orders.iter().enumerate().skip(start) {
            let gate_result =
                self.gate
                    .evaluate(task_id, order, position, &completed, decision.take().as_ref());

            let result = match gate_result {
                GateResult::AutoApproved(result) => {
                    tracing::info!(task_id = %task_id, order_id = ?result.order_id, "order auto-approved");
                    result
                }
                GateResult::Resumed(result) => result,
                GateResult::Suspend(checkpoint) => {
                    let correlation_id = checkpoint.correlation_id;
                    let hint = checkpoint.hint.clone();

                    self.store.save_checkpoint(checkpoint).await?;
                    self.store
                        .update_status(task_id, TaskStatus::Suspended)
                        .await?;
                    self.events
                        .append_event(
                            task_id.as_str(),
                            TaskEvent::ApprovalRequested {
                                correlation_id,
                                hint: hint.clone(),
                            },
                        )
                        .await?;

                    tracing::warn!(task_id = %task_id, correlation_id = %correlation_id, "awaiting approval");
                    return Ok(ExecutionOutcome::Pending {
                        correlation_id,
                        hint,
                    });
                }
            };

            let rejected = result.status == OrderStatus::Rejected;
            self.events
                .append_event(
                    task_id.as_str(),
                    TaskEvent::OrderPlaced {
                        result: result.clone(),
                    },
                )
                .await?;
            completed.push(result);

            if rejected {
                return self.finish(task_id, completed, TaskStatus::Rejected).await;
            }
        }

        self.finish(task_id, completed, TaskStatus::Completed).await
    }

    /// Close out a task with a terminal business outcome.
    async fn finish(
        &self,
        task_id: &TaskId,
        results: Vec<OrderResult>,
        status: TaskStatus,
    ) -> Result<ExecutionOutcome, HarborError> {
        let context = results
            .iter()
            .map(|r| r.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        let summary = self.completion.complete(&context).await?;

        self.store.update_status(task_id, status).await?;

        let event = match status {
            TaskStatus::Rejected => TaskEvent::Rejected {
                summary: summary.clone(),
            },
            _ => TaskEvent::Completed {
                summary: summary.clone(),
            },
        };
        self.events.append_event(task_id.as_str(), event).await?;

        tracing::info!(task_id = %task_id, %status, "task finished");
        Ok(ExecutionOutcome::Done(TaskResult { results, summary }))
    }

    /// Transition the task to failed, preserving the error detail.
    ///
    /// Secondary failures (the store itself, the event log) are logged and
    /// dropped so the original error reaches the caller.
    async fn fail_task(&self, task_id: &TaskId, error: HarborError) -> ExecutionOutcome {
        tracing::error!(task_id = %task_id, %error, "task failed");

        if let Err(store_err) = self.store.mark_failed(task_id, error.to_string()).await {
            tracing::warn!(task_id = %task_id, %store_err, "could not record failure");
        }
        let failed = TaskEvent::Failed {
            error: error.to_string(),
        };
        if let Err(log_err) = self.events.append_event(task_id.as_str(), failed).await {
            tracing::warn!(task_id = %task_id, %log_err, "could not log failure event");
        }

        ExecutionOutcome::Failed(error)
    }
}
