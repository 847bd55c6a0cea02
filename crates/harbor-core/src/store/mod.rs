//! Store module: TaskStore implementations.

mod memory;

pub use memory::InMemoryTaskStore;
