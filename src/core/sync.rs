//! Synchronization utilities for robust mutex handling
//!
//! This module provides utilities for handling mutex poisoning in a
//! consistent manner across the codebase.

use std::sync::LockResult;

/// Recover the guard from a possibly poisoned lock
///
/// Poisoning only means a thread panicked while holding the lock. Callers
/// use this when the protected data is never left in a partially updated
/// state, so the inner value is still valid and can be used as-is.
///
/// # Arguments
/// * `result` - The result from a lock operation
/// * `context` - Short description of the lock, used in the warning
///
/// # Examples
/// ```
/// use std::sync::Mutex;
/// use fifoqueue::core::sync::recover_lock;
///
/// let mutex = Mutex::new(42);
/// let guard = recover_lock(mutex.lock(), "answer");
/// assert_eq!(*guard, 42);
/// ```
pub fn recover_lock<G>(result: LockResult<G>, context: &str) -> G {
    result.unwrap_or_else(|poison_err| {
        log::warn!(
            "Internal synchronisation error ({} lock poisoned). A panic occurred while holding the lock; continuing with the inner state.",
            context
        );
        poison_err.into_inner()
    })
}
