//! BoundedQueue - fixed capacity FIFO safe for concurrent use
//!
//! Values live in a ring of `capacity` slots guarded by a mutex. The number
//! of occupied slots is mirrored into an atomic so `len` can be read without
//! contending with producers and consumers.

use crate::core::sync::recover_lock;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::traits::Queue;
use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Ring of slots holding the queued values
struct Slots<T> {
    buffer: Box<[Option<T>]>,
    /// Index of the oldest value
    head: usize,
    /// Number of occupied slots
    len: usize,
}

impl<T> Slots<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn push(&mut self, value: T) -> Result<usize, T> {
        if self.len == self.capacity() {
            return Err(value);
        }
        let tail = (self.head + self.len) % self.capacity();
        self.buffer[tail] = Some(value);
        self.len += 1;
        Ok(self.len)
    }

    fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        value
    }
}

/// Fixed capacity queue that can be shared between threads
///
/// `add` and `take` never wait: a full queue rejects the value and an empty
/// queue returns `None` straight away. Share it with `Arc<BoundedQueue<T>>`;
/// every operation only needs `&self`.
///
/// # Example
///
/// ```rust
/// use fifoqueue::queue::api::BoundedQueue;
///
/// let queue = BoundedQueue::new(2);
/// queue.add("a").unwrap();
/// queue.add("b").unwrap();
/// assert!(queue.add("c").unwrap_err().is_capacity_exceeded());
///
/// assert_eq!(queue.take(), Some("a"));
/// assert_eq!(queue.take(), Some("b"));
/// assert_eq!(queue.take(), None);
/// ```
pub struct BoundedQueue<T> {
    slots: Mutex<Slots<T>>,
    /// Occupied slot count, only written while `slots` is locked
    count: AtomicUsize,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `capacity` values
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity < 1 {
            log::debug!("Bounded queue capacity {} coerced to 1", capacity);
            1
        } else {
            capacity
        };

        Self {
            slots: Mutex::new(Slots::with_capacity(capacity)),
            count: AtomicUsize::new(0),
            capacity,
        }
    }

    /// Maximum number of values the queue holds, after coercion
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Add a value to the tail of the queue
    ///
    /// Fails with `QueueError::CapacityExceeded` if every slot is taken; the
    /// value is dropped in that case. Use [`offer`](Self::offer) to get it back.
    pub fn add(&self, value: T) -> QueueResult<()> {
        self.offer(value).map_err(|_rejected| QueueError::CapacityExceeded {
            capacity: self.capacity,
        })
    }

    /// Add a value to the tail of the queue, handing it back if the queue is full
    pub fn offer(&self, value: T) -> Result<(), T> {
        let mut slots = self.lock();
        match slots.push(value) {
            Ok(len) => {
                self.count.store(len, Ordering::Release);
                Ok(())
            }
            Err(value) => {
                log::debug!(
                    "Bounded queue full, rejected value (capacity: {})",
                    self.capacity
                );
                Err(value)
            }
        }
    }

    /// Remove and return the oldest value, or `None` if the queue is empty
    pub fn take(&self) -> Option<T> {
        if self.is_empty() {
            // Fast path check
            return None;
        }

        let mut slots = self.lock();
        let value = slots.pop();
        self.count.store(slots.len, Ordering::Release);
        value
    }

    /// Drop every queued value
    ///
    /// The slot buffer is swapped for a fresh one while locked, so this is
    /// safe to call while other threads add and take. Values are dropped
    /// after the lock is released.
    pub fn clear(&self) {
        let discarded = {
            let mut slots = self.lock();
            let fresh = Slots::with_capacity(self.capacity);
            self.count.store(0, Ordering::Release);
            mem::replace(&mut *slots, fresh)
        };
        log::trace!("Bounded queue cleared, discarded {} values", discarded.len);
    }

    /// Number of occupied slots
    ///
    /// Read without locking; the value can be stale by the time the caller
    /// acts on it but is always within `0..=capacity`.
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    /// Returns `true` if no slot is occupied; subject to the same staleness as `len`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Slots<T>> {
        recover_lock(self.slots.lock(), "bounded queue")
    }
}

impl<T> Queue<T> for BoundedQueue<T> {
    fn add(&mut self, value: T) -> QueueResult<()> {
        BoundedQueue::add(self, value)
    }

    fn take(&mut self) -> Option<T> {
        BoundedQueue::take(self)
    }

    fn clear(&mut self) {
        BoundedQueue::clear(self)
    }

    fn len(&self) -> usize {
        BoundedQueue::len(self)
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
