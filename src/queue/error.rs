//! Queue Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Queue is full (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Invalid queue configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Unable to read queue configuration {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QueueError {
    /// True for the recoverable "no free slot" condition raised by a bounded `add`
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, QueueError::CapacityExceeded { .. })
    }
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
