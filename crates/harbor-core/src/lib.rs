//! harbor-core
//!
//! Core building blocks for the Harbor approval workflow.
//!
//! # Module layout
//! - **domain**: domain model (ids, orders, task records, checkpoints,
//!   decisions, outcomes, events, errors)
//! - **ports**: abstraction layer (TaskStore, Completion, EventLog,
//!   ServiceProbe, Clock, IdGenerator)
//! - **store**: TaskStore implementations (in-memory for dev/test)
//! - **gate**: the approval gate and the gated rule it applies
//! - **channel**: the decision channel (external approve/reject intake)
//! - **executor**: drives a task from submission to a terminal state
//! - **impls**: dev implementations of the outward-facing ports

pub mod channel;
pub mod domain;
pub mod executor;
pub mod gate;
pub mod impls;
pub mod ports;
pub mod store;
