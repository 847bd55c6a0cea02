//! Domain model (IDs, orders, records, checkpoints, outcomes, ...).

pub mod checkpoint;
pub mod decision;
pub mod errors;
pub mod events;
pub mod ids;
pub mod order;
pub mod outcome;
pub mod task;

pub use checkpoint::Checkpoint;
pub use decision::Decision;
pub use errors::HarborError;
pub use events::TaskEvent;
pub use ids::{CorrelationId, TaskId};
pub use order::{OrderResult, OrderStatus, ShippingOrder, ShippingRequest};
pub use outcome::{ExecutionOutcome, TaskResult};
pub use task::{TaskRecord, TaskStatus};
