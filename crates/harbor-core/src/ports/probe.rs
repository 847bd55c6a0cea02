//! ServiceProbe port - remote health/service lookup.

use async_trait::async_trait;

/// Health check for a remote collaborator.
///
/// Used only as a precondition before starting work that depends on the
/// remote side; a negative answer short-circuits submission with
/// `DependencyUnavailable` before any task state is created.
#[async_trait]
pub trait ServiceProbe: Send + Sync {
    async fn check_available(&self, url: &str) -> bool;
}
