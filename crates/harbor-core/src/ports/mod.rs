//! Ports - the abstraction layer.
//!
//! Each trait here is the seam between the core state machine and an
//! external collaborator (durable storage, the text-completion capability,
//! the session log, remote health lookup, time, id minting). The core only
//! ever talks to these traits; implementations live in `store`, `impls`,
//! or downstream crates.

pub mod clock;
pub mod completion;
pub mod event_log;
pub mod id_generator;
pub mod probe;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::completion::Completion;
pub use self::event_log::EventLog;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::probe::ServiceProbe;
pub use self::task_store::TaskStore;
