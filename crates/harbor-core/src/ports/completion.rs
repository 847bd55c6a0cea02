//! Completion port - the opaque text-completion capability.

use async_trait::async_trait;

use crate::domain::HarborError;

/// Turns a context string into a short human-facing text.
///
/// The executor treats this as a black box that may be slow or fail.
/// Failures propagate as task failures; retry policy, if any, belongs to
/// the implementation behind this trait, not to the core.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, context: &str) -> Result<String, HarborError>;
}
