//! Public API for the queue system
//!
//! External modules should import from here rather than directly from internal modules.
//! See module documentation for complete usage examples and architecture details.

// Queue variants
pub use crate::queue::bounded::BoundedQueue;
pub use crate::queue::unbounded::UnboundedQueue;

// Configuration driven selection
pub use crate::queue::config::{QueueConfig, QueueKind, MAX_CAPACITY};

// Error handling
pub use crate::queue::error::{QueueError, QueueResult};

// Traits
pub use crate::queue::traits::Queue;
