//! Shortest-queue lane selection.

/// Pick the index of the smallest value in a left-to-right scan, keeping the
/// first (lowest-indexed) on ties.
///
/// Lanes are compared by wait-list length only — a lane whose single server
/// is busy but whose queue is empty counts as length 0, matching the
/// real-world rule that a traveler sizes up the queues, picks one, and
/// commits.  The decision is made exactly once per passenger; it is never
/// revisited when a shorter queue opens up later.
///
/// # Panics
/// Panics on an empty lane set; configurations guarantee at least one lane.
pub fn shortest_queue(queue_lens: impl IntoIterator<Item = usize>) -> usize {
    let mut best: Option<(usize, usize)> = None;
    for (idx, len) in queue_lens.into_iter().enumerate() {
        match best {
            Some((_, best_len)) if len >= best_len => {}
            _ => best = Some((idx, len)),
        }
    }
    let (idx, _) = best.expect("shortest_queue called with no lanes");
    idx
}
