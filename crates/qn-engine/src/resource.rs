//! Contended, capacity-limited service points with FIFO wait lists.
//!
//! One `Resource` record covers both kinds the checkpoint model needs: the
//! multi-server pool (capacity N, one shared queue) and a single-server lane
//! (capacity 1).  State is mutated only by the engine's acquire/release
//! handling, always within a single scheduler step, so no synchronization is
//! involved.

use std::collections::VecDeque;

use qn_core::ProcessId;

/// A capacity-limited resource: slot holders plus a FIFO wait list.
pub struct Resource {
    capacity: usize,
    holders:  Vec<ProcessId>,
    waiters:  VecDeque<ProcessId>,
}

impl Resource {
    pub(crate) fn new(capacity: usize) -> Resource {
        assert!(capacity >= 1, "resource capacity must be at least 1");
        Resource {
            capacity,
            holders: Vec::with_capacity(capacity),
            waiters: VecDeque::new(),
        }
    }

    /// Total slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently held.
    #[inline]
    pub fn in_use(&self) -> usize {
        self.holders.len()
    }

    /// Processes waiting for a slot (holders excluded).
    #[inline]
    pub fn queue_len(&self) -> usize {
        self.waiters.len()
    }

    /// Grant a slot to `pid` if one is free; otherwise append it to the
    /// wait list.  Returns whether the grant happened.
    pub(crate) fn try_acquire(&mut self, pid: ProcessId) -> bool {
        debug_assert!(self.holders.len() <= self.capacity);
        if self.holders.len() < self.capacity {
            self.holders.push(pid);
            true
        } else {
            self.waiters.push_back(pid);
            false
        }
    }

    /// Free the slot held by `pid`.  If anyone is waiting, the oldest waiter
    /// is granted the slot on the spot and returned so the engine can
    /// schedule its resumption.
    ///
    /// # Panics
    /// Panics if `pid` does not hold a slot — releasing a resource that was
    /// never acquired is a programming fault, not a runtime condition.
    pub(crate) fn release(&mut self, pid: ProcessId) -> Option<ProcessId> {
        let held = self
            .holders
            .iter()
            .position(|&h| h == pid)
            .unwrap_or_else(|| panic!("{pid} released a resource it does not hold"));
        self.holders.swap_remove(held);

        self.waiters.pop_front().inspect(|&next| {
            self.holders.push(next);
        })
    }
}
