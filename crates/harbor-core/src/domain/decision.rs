//! Decision: the external answer to a checkpoint.

use serde::{Deserialize, Serialize};

use super::ids::CorrelationId;

/// The external (human or automated) approve/reject answer.
///
/// Ephemeral: created by the caller, consumed by the executor during the
/// resume operation, never persisted. Carrying the answer as an explicit
/// value keeps the gated rule a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Must match an existing, unresolved checkpoint.
    pub correlation_id: CorrelationId,
    pub approved: bool,
}

impl Decision {
    pub fn new(correlation_id: CorrelationId, approved: bool) -> Self {
        Self {
            correlation_id,
            approved,
        }
    }
}
