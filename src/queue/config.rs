//! TOML configuration for selecting a queue variant
//!
//! Applications that let operators pick the buffering behaviour describe it
//! in a `[queue]` table:
//!
//! ```toml
//! [queue]
//! kind = "bounded"
//! capacity = 64
//! ```
//!
//! `kind = "unbounded"` takes no capacity.

use crate::queue::bounded::BoundedQueue;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::traits::Queue;
use crate::queue::unbounded::UnboundedQueue;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which queue implementation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueKind {
    /// Fixed capacity, safe for concurrent producers and consumers
    Bounded,
    /// No capacity limit, single-threaded
    Unbounded,
}

/// Largest capacity a configured bounded queue may request
pub const MAX_CAPACITY: usize = 1 << 24;

/// Queue selection loaded from configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QueueConfig {
    pub kind: QueueKind,
    /// Requested capacity; values below one are raised to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    queue: QueueConfig,
}

impl QueueConfig {
    /// Bounded queue holding at most `capacity` values
    pub fn bounded(capacity: usize) -> Self {
        Self {
            kind: QueueKind::Bounded,
            capacity: Some(i64::try_from(capacity).unwrap_or(i64::MAX)),
        }
    }

    /// Unbounded queue, no capacity
    pub fn unbounded() -> Self {
        Self {
            kind: QueueKind::Unbounded,
            capacity: None,
        }
    }

    /// Parse the `[queue]` table out of a TOML document
    pub fn from_toml_str(contents: &str) -> QueueResult<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| QueueError::InvalidConfig {
            message: e.to_string(),
        })?;
        let config = file.queue;
        config.validate()?;
        if let (QueueKind::Unbounded, Some(capacity)) = (config.kind, config.capacity) {
            log::warn!(
                "Ignoring capacity {} for unbounded queue configuration",
                capacity
            );
        }
        Ok(config)
    }

    /// Load the `[queue]` table from a TOML file
    pub fn from_file(path: &Path) -> QueueResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| QueueError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading queue configuration from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Check that the capacity setting matches the kind
    ///
    /// A bounded queue needs a capacity no larger than [`MAX_CAPACITY`], since
    /// every slot is allocated when the queue is built. An unbounded queue
    /// ignores any capacity it is given.
    pub fn validate(&self) -> QueueResult<()> {
        match (self.kind, self.capacity) {
            (QueueKind::Bounded, None) => Err(QueueError::InvalidConfig {
                message: "bounded queue requires a capacity".to_string(),
            }),
            (QueueKind::Bounded, Some(capacity)) if capacity > MAX_CAPACITY as i64 => {
                Err(QueueError::InvalidConfig {
                    message: format!(
                        "bounded queue capacity {} exceeds maximum of {}",
                        capacity, MAX_CAPACITY
                    ),
                })
            }
            _ => Ok(()),
        }
    }

    /// Capacity the built queue will have, after coercion
    pub fn effective_capacity(&self) -> Option<usize> {
        match self.kind {
            QueueKind::Bounded => self
                .capacity
                .map(|requested| usize::try_from(requested.max(1)).unwrap_or(usize::MAX)),
            QueueKind::Unbounded => None,
        }
    }

    /// Construct the configured queue behind the shared contract
    pub fn build<T: Send + 'static>(&self) -> QueueResult<Box<dyn Queue<T> + Send>> {
        self.validate()?;
        let queue: Box<dyn Queue<T> + Send> = match self.effective_capacity() {
            Some(capacity) => Box::new(BoundedQueue::new(capacity)),
            None => Box::new(UnboundedQueue::new()),
        };
        Ok(queue)
    }
}
