//! Multi-queue aggregation and k-way merge.
//!
//! A [`QueueEntry`] pairs an owned queue with a cached element count, and a
//! chain of entries feeds [`merge_all`], which drains every donor queue
//! into the first entry's queue and sorts the combined result. The cached
//! count is kept in lock-step with the true queue length through every
//! element move, which is what lets the merge report its combined size
//! without re-traversing each ring.

use crate::{Direction, Queue, QueueError};

/// A queue paired with a cached element count.
///
/// The queue itself keeps no counter ([`Queue::len`] is a full traversal);
/// this entry caches one so a merge chain can be sized in O(1) per member.
/// Mutation goes through the entry's own methods, which keep the cache
/// equal to the true length at all times.
#[derive(Debug, Default)]
pub struct QueueEntry {
    queue: Queue,
    size: usize,
}

impl QueueEntry {
    /// Wraps a queue, counting its elements once.
    pub fn new(queue: Queue) -> Self {
        let size = queue.len();
        Self { queue, size }
    }

    /// Cached element count. Always equals `self.queue().len()`.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read access to the queue. Mutation must go through the entry so the
    /// cached count stays accurate.
    #[inline]
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Unwraps the entry back into its queue.
    pub fn into_queue(self) -> Queue {
        self.queue
    }

    /// Inserts a copy of `value` at the head. See [`Queue::push_front`].
    pub fn push_front(&mut self, value: &str) -> Result<(), QueueError> {
        self.queue.push_front(value)?;
        self.size += 1;
        Ok(())
    }

    /// Inserts a copy of `value` at the tail. See [`Queue::push_back`].
    pub fn push_back(&mut self, value: &str) -> Result<(), QueueError> {
        self.queue.push_back(value)?;
        self.size += 1;
        Ok(())
    }

    /// Removes the first element. See [`Queue::pop_front`].
    pub fn pop_front(&mut self) -> Option<String> {
        let value = self.queue.pop_front()?;
        self.size -= 1;
        Some(value)
    }

    /// Removes the last element. See [`Queue::pop_back`].
    pub fn pop_back(&mut self) -> Option<String> {
        let value = self.queue.pop_back()?;
        self.size -= 1;
        Some(value)
    }
}

/// Merges every queue in `chain` into the first entry's queue, then sorts
/// the combined queue in the requested direction.
///
/// Every donor is drained to empty with its cached count zeroed; each
/// element moves by a single ownership transfer of its text (the donor
/// keeps no back-reference). Returns `Ok(0)` without touching anything
/// when the chain is empty or singular, and the combined count otherwise.
///
/// The target's slab is grown up front for everything incoming, so an
/// allocation failure surfaces before any element has moved.
pub fn merge_all(chain: &mut [QueueEntry], direction: Direction) -> Result<usize, QueueError> {
    let Some((target, donors)) = chain.split_first_mut() else {
        return Ok(0);
    };
    if donors.is_empty() {
        return Ok(0);
    }

    let incoming: usize = donors.iter().map(QueueEntry::len).sum();
    target.queue.try_reserve(incoming)?;

    for donor in &mut *donors {
        while let Some(value) = donor.pop_front() {
            target.queue.push_back_owned(value)?;
            target.size += 1;
        }
        debug_assert!(donor.queue.is_empty() && donor.size == 0);
    }

    target.queue.sort(direction);
    Ok(target.size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_of(values: &[&str]) -> QueueEntry {
        let mut q = Queue::new();
        q.try_extend(values.iter().copied()).unwrap();
        QueueEntry::new(q)
    }

    fn contents(entry: &QueueEntry) -> Vec<String> {
        entry.queue().iter().map(str::to_owned).collect()
    }

    #[test]
    fn test_entry_count_tracks_queue() {
        let mut entry = entry_of(&["a", "b"]);
        assert_eq!(entry.len(), 2);

        entry.push_front("z").unwrap();
        entry.push_back("y").unwrap();
        assert_eq!(entry.len(), 4);
        assert_eq!(entry.len(), entry.queue().len());

        entry.pop_front();
        entry.pop_back();
        assert_eq!(entry.len(), 2);
        assert_eq!(entry.len(), entry.queue().len());
    }

    #[test]
    fn test_merge_all_ascending() {
        let mut chain = vec![entry_of(&["c", "a"]), entry_of(&["b"])];
        let total = merge_all(&mut chain, Direction::Ascending).unwrap();

        assert_eq!(total, 3);
        assert_eq!(chain[0].len(), 3);
        assert_eq!(contents(&chain[0]), ["a", "b", "c"]);
        assert!(chain[1].is_empty());
        assert!(chain[1].queue().is_empty());
    }

    #[test]
    fn test_merge_all_descending_many_queues() {
        let mut chain = vec![
            entry_of(&["m", "d"]),
            entry_of(&["z"]),
            entry_of(&[]),
            entry_of(&["a", "q"]),
        ];
        let total = merge_all(&mut chain, Direction::Descending).unwrap();

        assert_eq!(total, 5);
        assert_eq!(contents(&chain[0]), ["z", "q", "m", "d", "a"]);
        for donor in &chain[1..] {
            assert!(donor.is_empty());
        }
    }

    #[test]
    fn test_merge_all_rejects_empty_and_singular_chains() {
        let mut empty: Vec<QueueEntry> = Vec::new();
        assert_eq!(merge_all(&mut empty, Direction::Ascending).unwrap(), 0);

        let mut singular = vec![entry_of(&["b", "a"])];
        assert_eq!(merge_all(&mut singular, Direction::Ascending).unwrap(), 0);
        // A singular chain is left untouched, unsorted included
        assert_eq!(contents(&singular[0]), ["b", "a"]);
    }

    #[test]
    fn test_merge_all_into_empty_target() {
        let mut chain = vec![entry_of(&[]), entry_of(&["b", "a"])];
        let total = merge_all(&mut chain, Direction::Ascending).unwrap();
        assert_eq!(total, 2);
        assert_eq!(contents(&chain[0]), ["a", "b"]);
    }
}
