//! UnboundedQueue - FIFO without a capacity limit for single-threaded use

use crate::queue::error::QueueResult;
use crate::queue::traits::Queue;
use std::collections::LinkedList;
use std::fmt;

/// Queue that can continuously be added to
///
/// Backed by a doubly-linked list, so adding and taking are O(1) and the
/// length is tracked by the list itself. All mutation goes through
/// `&mut self`; sharing one between threads needs an external lock.
///
/// # Example
///
/// ```rust
/// use fifoqueue::queue::api::UnboundedQueue;
///
/// let mut queue = UnboundedQueue::new();
/// queue.add(1);
/// queue.add(2);
/// assert_eq!(queue.len(), 2);
/// assert_eq!(queue.take(), Some(1));
/// ```
pub struct UnboundedQueue<T> {
    nodes: LinkedList<T>,
}

impl<T> UnboundedQueue<T> {
    /// Constructs a new, empty `UnboundedQueue<T>`
    pub fn new() -> Self {
        Self {
            nodes: LinkedList::new(),
        }
    }

    /// Append a value at the tail. Never fails.
    pub fn add(&mut self, value: T) {
        self.nodes.push_back(value);
    }

    /// Detach and return the head value, or `None` if the queue is empty
    pub fn take(&mut self) -> Option<T> {
        self.nodes.pop_front()
    }

    /// Drop every queued value
    pub fn clear(&mut self) {
        log::trace!(
            "Unbounded queue cleared, discarded {} values",
            self.nodes.len()
        );
        self.nodes.clear();
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue contains no elements
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for UnboundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> for UnboundedQueue<T> {
    fn add(&mut self, value: T) -> QueueResult<()> {
        UnboundedQueue::add(self, value);
        Ok(())
    }

    fn take(&mut self) -> Option<T> {
        UnboundedQueue::take(self)
    }

    fn clear(&mut self) {
        UnboundedQueue::clear(self)
    }

    fn len(&self) -> usize {
        UnboundedQueue::len(self)
    }
}

impl<T> fmt::Debug for UnboundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnboundedQueue")
            .field("len", &self.nodes.len())
            .finish()
    }
}
