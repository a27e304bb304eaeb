//! FIFO Queue Component
//!
//! A minimal first-in first-out queue abstraction with two interchangeable
//! implementations sharing the [`Queue`] contract.
//!
//! # Overview
//!
//! - **BoundedQueue**: fixed capacity, safe for any number of concurrent
//!   producers and consumers. A full queue rejects new values immediately.
//! - **UnboundedQueue**: grows without limit, single-threaded only.
//!
//! Neither variant ever blocks the caller: `take` on an empty queue returns
//! `None` and `add` on a full bounded queue returns
//! [`QueueError::CapacityExceeded`]. What to do with a rejected value (retry,
//! drop, push back upstream) is the caller's decision.
//!
//! # Architecture
//!
//! ```text
//!              ┌──────────────────────────────┐
//!              │          Queue<T>            │
//!              │  add · take · clear · len    │
//!              └──────────────┬───────────────┘
//!                 ┌───────────┴────────────┐
//!                 ▼                        ▼
//! ┌───────────────────────────┐ ┌───────────────────────────┐
//! │      BoundedQueue<T>      │ │     UnboundedQueue<T>     │
//! │  ┌───┬───┬───┬───┬───┐    │ │  ┌───┐   ┌───┐   ┌───┐    │
//! │  │ 1 │ 2 │ 3 │   │   │    │ │  │ 1 │◄─►│ 2 │◄─►│ 3 │    │
//! │  └───┴───┴───┴───┴───┘    │ │  └───┘   └───┘   └───┘    │
//! │  Mutex ring + atomic len  │ │  LinkedList, &mut access  │
//! └───────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use fifoqueue::queue::api::{BoundedQueue, Queue, QueueConfig};
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Shared bounded queue
//! let queue = Arc::new(BoundedQueue::new(16));
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || queue.add("work item"))
//! };
//! producer.join().unwrap()?;
//! assert_eq!(queue.take(), Some("work item"));
//!
//! // Variant picked from configuration
//! let config = QueueConfig::from_toml_str("[queue]\nkind = \"unbounded\"")?;
//! let mut queue: Box<dyn Queue<u32> + Send> = config.build()?;
//! queue.add(1)?;
//! assert_eq!(queue.take(), Some(1));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod api;
mod bounded;
mod config;
mod error;
mod traits;
mod unbounded;

pub use bounded::BoundedQueue;
pub use config::{QueueConfig, QueueKind, MAX_CAPACITY};
pub use error::{QueueError, QueueResult};
pub use traits::Queue;
pub use unbounded::UnboundedQueue;

#[cfg(test)]
mod tests;
