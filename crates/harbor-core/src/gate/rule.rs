//! Gated rule: the policy deciding auto-approve vs. require-confirmation.

use crate::domain::ShippingOrder;

/// Orders above this many containers require human confirmation.
pub const LARGE_ORDER_THRESHOLD: u32 = 5;

/// Policy deciding whether an order auto-completes or must suspend.
///
/// Implementations must be pure functions of the order: deterministic and
/// idempotent, with no hidden state, so replays after a process restart
/// are safe.
pub trait GateRule: Send + Sync {
    fn requires_confirmation(&self, order: &ShippingOrder) -> bool;

    /// Human-readable description of what is being approved.
    fn hint(&self, order: &ShippingOrder) -> String;
}

/// Container-count threshold rule: `containers <= threshold` auto-approves.
#[derive(Debug, Clone)]
pub struct ContainerThresholdRule {
    threshold: u32,
}

impl ContainerThresholdRule {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Default for ContainerThresholdRule {
    fn default() -> Self {
        Self::new(LARGE_ORDER_THRESHOLD)
    }
}

impl GateRule for ContainerThresholdRule {
    fn requires_confirmation(&self, order: &ShippingOrder) -> bool {
        order.containers > self.threshold
    }

    fn hint(&self, order: &ShippingOrder) -> String {
        format!(
            "Large order: {} containers to {} requires approval",
            order.containers, order.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, false)]
    #[case(5, false)]
    #[case(6, true)]
    #[case(10, true)]
    fn threshold_is_inclusive(#[case] containers: u32, #[case] needs_confirmation: bool) {
        let rule = ContainerThresholdRule::default();
        let order = ShippingOrder::new(containers, "Singapore");
        assert_eq!(rule.requires_confirmation(&order), needs_confirmation);
    }

    #[test]
    fn rule_is_deterministic() {
        let rule = ContainerThresholdRule::new(5);
        let order = ShippingOrder::new(10, "Rotterdam");

        assert_eq!(
            rule.requires_confirmation(&order),
            rule.requires_confirmation(&order)
        );
        assert_eq!(rule.hint(&order), rule.hint(&order));
    }
}
