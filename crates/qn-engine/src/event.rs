//! The queued-event record and its heap ordering.

use std::cmp::Ordering;

use qn_core::{ProcessId, SimTime};

/// A pending "resume this process at this time" entry.
///
/// `seq` is a global insertion counter: among equal-time events the earliest
/// scheduled fires first, which is the engine's FIFO tie-break guarantee.
pub(crate) struct QueuedEvent {
    pub(crate) at:  SimTime,
    pub(crate) seq: u64,
    pub(crate) pid: ProcessId,
}

// `BinaryHeap` is a max-heap; we need earliest-first, so compare reversed.
impl Ord for QueuedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.at.cmp(&other.at) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            ord => ord,
        }
        .reverse()
    }
}

impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedEvent {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl Eq for QueuedEvent {}
