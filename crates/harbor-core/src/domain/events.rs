//! Session events appended to the event log as a task progresses.

use serde::{Deserialize, Serialize};

use super::ids::CorrelationId;
use super::order::OrderResult;

/// One entry in a task's session log.
///
/// The event log is append-only per session; within one session the only
/// ordering guarantee is append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskEvent {
    Submitted { orders: usize },
    OrderPlaced { result: OrderResult },
    ApprovalRequested { correlation_id: CorrelationId, hint: String },
    DecisionReceived { correlation_id: CorrelationId, approved: bool },
    Completed { summary: String },
    Rejected { summary: String },
    Failed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderResult, ShippingOrder};

    #[test]
    fn events_are_internally_tagged() {
        let event = TaskEvent::OrderPlaced {
            result: OrderResult::auto_approved(&ShippingOrder::new(3, "Singapore")),
        };

        let v: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(v["kind"], "order_placed");
        assert_eq!(v["result"]["order_id"], "ORD-3-AUTO");
    }
}
