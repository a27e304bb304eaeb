//! Traits for the queue system
//!
//! This module contains the capability contract shared by every queue
//! variant. Callers that only need FIFO semantics should program against
//! [`Queue`] and pick the concrete variant at construction time.

use crate::queue::error::QueueResult;

/// Basic first-in first-out queue
///
/// Both implementations hand values back in exactly the order they were
/// accepted. None of the operations ever block the calling thread.
///
/// # Example Implementation
///
/// ```rust
/// use fifoqueue::queue::api::{Queue, QueueResult};
///
/// struct Single<T>(Option<T>);
///
/// impl<T> Queue<T> for Single<T> {
///     fn add(&mut self, value: T) -> QueueResult<()> {
///         self.0 = Some(value);
///         Ok(())
///     }
///
///     fn take(&mut self) -> Option<T> {
///         self.0.take()
///     }
///
///     fn clear(&mut self) {
///         self.0 = None;
///     }
///
///     fn len(&self) -> usize {
///         usize::from(self.0.is_some())
///     }
/// }
/// ```
pub trait Queue<T> {
    /// Insert `value` at the tail of the queue
    ///
    /// Returns `QueueError::CapacityExceeded` when the queue has no room left.
    /// In that case the value was not queued and has been dropped.
    fn add(&mut self, value: T) -> QueueResult<()>;

    /// Remove and return the head of the queue, or `None` if it is empty
    fn take(&mut self) -> Option<T>;

    /// Drop every held element, leaving the queue freshly initialised
    fn clear(&mut self);

    /// Number of elements currently held
    fn len(&self) -> usize;

    /// Returns `true` if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of elements the queue can hold, `None` when unbounded
    fn capacity(&self) -> Option<usize> {
        None
    }
}
