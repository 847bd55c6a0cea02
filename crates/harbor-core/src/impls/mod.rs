//! Dev implementations of the outward-facing ports.
//!
//! These keep the demo and the test suite self-contained; production
//! deployments swap in real implementations behind the same traits.

mod inmem_event_log;
mod static_probe;
mod template_completion;

pub use inmem_event_log::InMemoryEventLog;
pub use static_probe::StaticProbe;
pub use template_completion::TemplateCompletion;
