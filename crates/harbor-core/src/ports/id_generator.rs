//! IdGenerator port - minting correlation ids.
//!
//! Correlation ids are ULIDs: sortable by mint time and generated without
//! coordination, so any number of executors can suspend tasks concurrently.

use ulid::Ulid;

use crate::domain::ids::CorrelationId;
use crate::ports::Clock;

/// Mints correlation ids for new suspensions.
pub trait IdGenerator: Send + Sync {
    fn next_correlation_id(&self) -> CorrelationId;
}

/// ULID-based generator.
///
/// Uses a `Clock` for the timestamp half, so tests can pin the timestamp
/// with `FixedClock` while the random half keeps ids unique.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn next_correlation_id(&self) -> CorrelationId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        CorrelationId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}
