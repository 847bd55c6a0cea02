//! Shipping order model: the business payload a task carries.
//!
//! This module is executor-agnostic: it only defines the shape of requests
//! and the results the system records and reports.

use serde::{Deserialize, Serialize};

/// One shipping order: the unit the approval gate evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOrder {
    pub containers: u32,
    pub destination: String,
}

impl ShippingOrder {
    pub fn new(containers: u32, destination: impl Into<String>) -> Self {
        Self {
            containers,
            destination: destination.into(),
        }
    }
}

/// The payload of one task: a batch of orders placed in sequence.
///
/// Each order is gated independently; a large order suspends the task until
/// a decision arrives, then placement continues with the remaining orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRequest {
    pub orders: Vec<ShippingOrder>,
}

impl ShippingRequest {
    pub fn new(orders: Vec<ShippingOrder>) -> Self {
        Self { orders }
    }

    /// Convenience for the common single-order case.
    pub fn single(containers: u32, destination: impl Into<String>) -> Self {
        Self {
            orders: vec![ShippingOrder::new(containers, destination)],
        }
    }
}

/// Business outcome of one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Approved,
    Rejected,
}

/// Result of placing (or declining) one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub status: OrderStatus,

    /// Present only for approved orders. `ORD-{n}-AUTO` when the gate
    /// auto-approved, `ORD-{n}-HUMAN` when a human approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    pub containers: u32,
    pub destination: String,
    pub message: String,
}

impl OrderResult {
    pub fn auto_approved(order: &ShippingOrder) -> Self {
        Self {
            status: OrderStatus::Approved,
            order_id: Some(format!("ORD-{}-AUTO", order.containers)),
            containers: order.containers,
            destination: order.destination.clone(),
            message: format!(
                "Order auto-approved: {} containers to {}",
                order.containers, order.destination
            ),
        }
    }

    pub fn human_approved(order: &ShippingOrder) -> Self {
        Self {
            status: OrderStatus::Approved,
            order_id: Some(format!("ORD-{}-HUMAN", order.containers)),
            containers: order.containers,
            destination: order.destination.clone(),
            message: format!(
                "Order approved: {} containers to {}",
                order.containers, order.destination
            ),
        }
    }

    pub fn rejected(order: &ShippingOrder) -> Self {
        Self {
            status: OrderStatus::Rejected,
            order_id: None,
            containers: order.containers,
            destination: order.destination.clone(),
            message: format!(
                "Order rejected: {} containers to {}",
                order.containers, order.destination
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_results_carry_an_order_id() {
        let order = ShippingOrder::new(3, "Singapore");

        let auto = OrderResult::auto_approved(&order);
        assert_eq!(auto.status, OrderStatus::Approved);
        assert_eq!(auto.order_id.as_deref(), Some("ORD-3-AUTO"));

        let human = OrderResult::human_approved(&order);
        assert_eq!(human.order_id.as_deref(), Some("ORD-3-HUMAN"));
    }

    #[test]
    fn rejected_results_have_no_order_id() {
        let order = ShippingOrder::new(8, "Los Angeles");
        let rejected = OrderResult::rejected(&order);

        assert_eq!(rejected.status, OrderStatus::Rejected);
        assert!(rejected.order_id.is_none());
        assert!(rejected.message.contains("8 containers to Los Angeles"));
    }

    #[test]
    fn order_status_serializes_as_snake_case() {
        let s = serde_json::to_string(&OrderStatus::Approved).unwrap();
        assert_eq!(s, "\"approved\"");

        let s = serde_json::to_string(&OrderStatus::Rejected).unwrap();
        assert_eq!(s, "\"rejected\"");
    }
}
