//! Bounded Blocking Queue for Per-Sensor Reading Streams
//!
//! ## Overview
//!
//! This module implements the fixed-capacity circular buffer that connects the
//! collector to each sensor worker. One instance exists per sensor type; the
//! collector holds the producing side of both, each worker the consuming side
//! of exactly one.
//!
//! ## Design Rationale
//!
//! The original design used a raw counting-semaphore pair plus a mutex per
//! buffer, all held in module-level globals. Here each queue is an owned
//! object and the semaphore pair is replaced by two condition variables over
//! a single mutex-guarded state:
//!
//! - `not_full` parks producers while every slot is occupied
//! - `not_empty` parks consumers while no slot is occupied
//!
//! The circular index bookkeeping is unchanged in spirit:
//!
//! ```text
//! BoundedQueue capacity 5:
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  0  │  1  │  2  │  3  │  4  │
//! └─────┴─────┴─────┴─────┴─────┘
//!    ↑                 ↑
//!  read              write        (both advance modulo capacity)
//! ```
//!
//! ## Invariants
//!
//! - `len <= capacity` at every instant; `put` never overruns and `get`
//!   never underruns
//! - `read < capacity` and `write < capacity` always hold
//! - items leave in the exact order they entered (strict FIFO per queue)
//! - every item is delivered at most once
//!
//! Index and count mutation happens only while the lock is held, so the queue
//! is safe under any number of producers and consumers even though the
//! pipeline only ever uses one of each per queue.
//!
//! ## Shutdown
//!
//! The stream end is signalled with [`BoundedQueue::close`] instead of the
//! fixed drain delay the original relied on. Closing wakes every parked
//! thread: producers get their item back via [`QueueClosed`], consumers drain
//! whatever is still buffered and then observe `None`. This makes shutdown
//! deterministic and testable.
//!
//! Blocking in `put`, `get`, and the channel read are the only suspension
//! points in the pipeline; nothing busy-waits.

use std::num::NonZeroUsize;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Error returned by [`BoundedQueue::put`] on a closed queue
///
/// Carries the rejected item back to the caller so it is not silently lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueClosed<T>(pub T);

struct QueueState<T> {
    slots: Box<[Option<T>]>,
    /// Next slot to read, in `[0, capacity)`
    read: usize,
    /// Next slot to write, in `[0, capacity)`
    write: usize,
    /// Occupied slot count, in `[0, capacity]`
    len: usize,
    closed: bool,
}

/// Fixed-capacity FIFO with blocking insertion and removal
///
/// See the module docs for the synchronization scheme. The capacity is fixed
/// at construction and shared state lives behind one mutex, so both endpoints
/// usually share an `Arc<BoundedQueue<T>>`.
pub struct BoundedQueue<T> {
    state: Mutex<QueueState<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue with the given capacity
    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self {
            state: Mutex::new(QueueState {
                slots: slots.into_boxed_slice(),
                read: 0,
                write: 0,
                len: 0,
                closed: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// Insert an item, blocking while the queue is full
    ///
    /// Returns the item back inside [`QueueClosed`] if the queue was closed,
    /// whether before the call or while the caller was parked waiting for a
    /// free slot.
    pub fn put(&self, item: T) -> Result<(), QueueClosed<T>> {
        let mut state = self.lock();
        while state.len == self.capacity && !state.closed {
            state = self.wait(&self.not_full, state);
        }
        if state.closed {
            return Err(QueueClosed(item));
        }

        let write = state.write;
        state.slots[write] = Some(item);
        state.write = (write + 1) % self.capacity;
        state.len += 1;
        drop(state);

        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove the oldest item, blocking while the queue is empty
    ///
    /// Returns `None` only once the queue has been closed and fully drained;
    /// items buffered at close time are still delivered in order.
    pub fn get(&self) -> Option<T> {
        let mut state = self.lock();
        while state.len == 0 && !state.closed {
            state = self.wait(&self.not_empty, state);
        }
        if state.len == 0 {
            // Closed and drained.
            return None;
        }

        let read = state.read;
        let item = state.slots[read].take();
        debug_assert!(item.is_some(), "occupied slot count out of sync");
        state.read = (read + 1) % self.capacity;
        state.len -= 1;
        drop(state);

        self.not_full.notify_one();
        item
    }

    /// Close the queue, waking every parked producer and consumer
    ///
    /// Idempotent. Subsequent `put` calls fail immediately; `get` drains the
    /// remaining items and then returns `None`.
    pub fn close(&self) {
        let mut state = self.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        drop(state);

        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// Capacity fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items currently buffered
    pub fn len(&self) -> usize {
        self.lock().len
    }

    /// Whether no items are currently buffered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// A panicked peer leaves the state consistent (every mutation completes
    /// under the lock), so poison is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait<'a>(
        &self,
        condvar: &Condvar,
        guard: MutexGuard<'a, QueueState<T>>,
    ) -> MutexGuard<'a, QueueState<T>> {
        condvar.wait(guard).unwrap_or_else(PoisonError::into_inner)
    }
}
