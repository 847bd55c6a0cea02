//! Domain identifiers.
//!
//! Two kinds of identity live here:
//! - `TaskId`: opaque, caller-supplied, stable for the task's lifetime.
//! - `CorrelationId`: system-minted at suspension time, ULID-based so ids
//!   sort by creation order and can be generated without coordination.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Opaque task identifier chosen by the caller (or the system on its behalf).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Correlation token linking a Decision to the exact Checkpoint it resolves.
///
/// Minted once per suspension; the only valid key for resuming that
/// suspension.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CorrelationId(Ulid);

impl CorrelationId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for CorrelationId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "approval-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_ids_compare_by_content() {
        assert_eq!(TaskId::new("T1"), TaskId::new("T1"));
        assert_ne!(TaskId::new("T1"), TaskId::new("T2"));
        assert_eq!(TaskId::new("T1").to_string(), "T1");
    }

    #[test]
    fn correlation_ids_sort_by_creation_order() {
        let id1 = CorrelationId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = CorrelationId::from_ulid(Ulid::new());

        assert!(id1 < id2);
        assert!(id1.to_string().starts_with("approval-"));
    }

    #[test]
    fn correlation_ids_round_trip_through_serde() {
        let id = CorrelationId::from_ulid(Ulid::new());

        let serialized = serde_json::to_string(&id).unwrap();
        let deserialized: CorrelationId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(id, deserialized);
    }
}
