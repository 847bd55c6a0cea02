//! Approval gate: the suspend decision for one gated invocation.

mod rule;

pub use rule::{ContainerThresholdRule, GateRule, LARGE_ORDER_THRESHOLD};

use std::sync::Arc;

use crate::domain::{Checkpoint, Decision, OrderResult, ShippingOrder, TaskId};
use crate::ports::IdGenerator;

/// What the gate decided for one order.
#[derive(Debug)]
pub enum GateResult {
    /// The rule found no confirmation needed; the order went through.
    AutoApproved(OrderResult),

    /// Confirmation required and no decision is present yet. The caller
    /// must persist the checkpoint and report pending upward.
    Suspend(Checkpoint),

    /// A decision was supplied; the order completed with an outcome
    /// reflecting approved/rejected.
    Resumed(OrderResult),
}

/// Applies the gated rule to one order, with or without a decision.
///
/// The gate has no side effects beyond computing the checkpoint payload
/// (which includes minting its correlation id); persistence is the
/// executor's responsibility. That keeps the gate testable in isolation.
pub struct ApprovalGate {
    rule: Arc<dyn GateRule>,
    ids: Arc<dyn IdGenerator>,
}

impl ApprovalGate {
    pub fn new(rule: Arc<dyn GateRule>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { rule, ids }
    }

    /// Evaluate one order at `position` within its task's batch.
    ///
    /// `completed` is carried into the checkpoint so a resumed task can
    /// pick up exactly where it left off.
    pub fn evaluate(
        &self,
        task_id: &TaskId,
        order: &ShippingOrder,
        position: usize,
        completed: &[OrderResult],
        decision: Option<&Decision>,
    ) -> GateResult {
        if !self.rule.requires_confirmation(order) {
            return GateResult::AutoApproved(OrderResult::auto_approved(order));
        }

        match decision {
            None => {
                let checkpoint = Checkpoint::new(
                    self.ids.next_correlation_id(),
                    task_id.clone(),
                    self.rule.hint(order),
                    order.clone(),
                    position,
                    completed.to_vec(),
                );
                GateResult::Suspend(checkpoint)
            }
            Some(decision) if decision.approved => {
                GateResult::Resumed(OrderResult::human_approved(order))
            }
            // Rejection is a normal terminal business outcome, not an error.
            Some(_) => GateResult::Resumed(OrderResult::rejected(order)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CorrelationId, OrderStatus};
    use crate::ports::{SystemClock, UlidGenerator};
    use rstest::rstest;
    use ulid::Ulid;

    fn gate() -> ApprovalGate {
        ApprovalGate::new(
            Arc::new(ContainerThresholdRule::default()),
            Arc::new(UlidGenerator::new(SystemClock)),
        )
    }

    #[rstest]
    #[case::small(3)]
    #[case::at_threshold(5)]
    fn orders_at_or_below_threshold_auto_approve(#[case] containers: u32) {
        let order = ShippingOrder::new(containers, "Singapore");

        let result = gate().evaluate(&TaskId::new("T1"), &order, 0, &[], None);

        match result {
            GateResult::AutoApproved(result) => {
                assert_eq!(result.status, OrderStatus::Approved);
                assert_eq!(
                    result.order_id.as_deref(),
                    Some(format!("ORD-{containers}-AUTO").as_str())
                );
            }
            other => panic!("expected AutoApproved, got {other:?}"),
        }
    }

    #[test]
    fn large_order_without_decision_suspends() {
        let order = ShippingOrder::new(10, "Rotterdam");
        let task_id = TaskId::new("T2");

        let result = gate().evaluate(&task_id, &order, 0, &[], None);

        match result {
            GateResult::Suspend(checkpoint) => {
                assert_eq!(checkpoint.task_id, task_id);
                assert_eq!(checkpoint.order, order);
                assert_eq!(checkpoint.position, 0);
                assert!(checkpoint.hint.contains("10 containers to Rotterdam"));
            }
            other => panic!("expected Suspend, got {other:?}"),
        }
    }

    #[test]
    fn large_order_with_approval_resumes_approved() {
        let order = ShippingOrder::new(10, "Rotterdam");
        let decision = Decision::new(CorrelationId::from(Ulid::new()), true);

        let result = gate().evaluate(&TaskId::new("T2"), &order, 0, &[], Some(&decision));

        match result {
            GateResult::Resumed(result) => {
                assert_eq!(result.status, OrderStatus::Approved);
                assert_eq!(result.order_id.as_deref(), Some("ORD-10-HUMAN"));
            }
            other => panic!("expected Resumed, got {other:?}"),
        }
    }

    #[test]
    fn large_order_with_rejection_resumes_rejected() {
        let order = ShippingOrder::new(8, "Los Angeles");
        let decision = Decision::new(CorrelationId::from(Ulid::new()), false);

        let result = gate().evaluate(&TaskId::new("T3"), &order, 0, &[], Some(&decision));

        match result {
            GateResult::Resumed(result) => {
                assert_eq!(result.status, OrderStatus::Rejected);
                assert!(result.order_id.is_none());
            }
            other => panic!("expected Resumed, got {other:?}"),
        }
    }

    #[test]
    fn checkpoint_carries_prior_results_and_position() {
        let prior = vec![OrderResult::auto_approved(&ShippingOrder::new(2, "Oslo"))];
        let order = ShippingOrder::new(10, "Rotterdam");

        let result = gate().evaluate(&TaskId::new("T4"), &order, 1, &prior, None);

        match result {
            GateResult::Suspend(checkpoint) => {
                assert_eq!(checkpoint.position, 1);
                assert_eq!(checkpoint.completed, prior);
            }
            other => panic!("expected Suspend, got {other:?}"),
        }
    }
}
