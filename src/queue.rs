use crate::invariants::debug_assert_ring_closed;
use crate::ring::{Ring, SENTINEL};
use crate::QueueError;

/// Ordering direction for [`Queue::sort`] and [`merge_all`](crate::merge_all).
///
/// Comparison is lexical byte-wise ordering on the element text; descending
/// reverses the direction, the stability rule is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl Direction {
    /// Merge policy: emit the left (earlier) run's element on ties, so equal
    /// values keep their original relative order.
    #[inline]
    fn take_left(self, left: &str, right: &str) -> bool {
        match self {
            Self::Ascending => left <= right,
            Self::Descending => left >= right,
        }
    }
}

/// An ordered queue of owned string values on a circular doubly-linked list
/// with a sentinel node.
///
/// The ring is stored as an index-addressed slab (the crate-private `ring`
/// module), so every structural operation is pure link surgery: no element
/// text is copied or reallocated by swaps, reversals, sorting, or filtering.
///
/// Insertions duplicate the input text into owned storage and are the only
/// fallible operations; removal on an empty queue reports `None` rather
/// than failing.
///
/// # Example
///
/// ```
/// use ringlist::{Direction, Queue};
///
/// let mut q = Queue::new();
/// q.push_back("carol")?;
/// q.push_back("alice")?;
/// q.push_back("bob")?;
///
/// q.sort(Direction::Ascending);
/// assert_eq!(q.pop_front().as_deref(), Some("alice"));
/// assert_eq!(q.len(), 2);
/// # Ok::<(), ringlist::QueueError>(())
/// ```
#[derive(Default)]
pub struct Queue {
    ring: Ring,
}

impl Queue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Creates an empty queue with slab room for `capacity` elements.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, QueueError> {
        Ok(Self {
            ring: Ring::try_with_capacity(capacity)?,
        })
    }

    // ---------------------------------------------------------------------
    // INSERTION
    // ---------------------------------------------------------------------

    /// Inserts a copy of `value` before the first element.
    ///
    /// Fails with [`QueueError::Alloc`] if storage for the element or its
    /// text cannot be obtained; a failed insert leaves the queue untouched.
    pub fn push_front(&mut self, value: &str) -> Result<(), QueueError> {
        let text = duplicate(value)?;
        self.push_front_owned(text)
    }

    /// Inserts a copy of `value` after the last element.
    pub fn push_back(&mut self, value: &str) -> Result<(), QueueError> {
        let text = duplicate(value)?;
        self.push_back_owned(text)
    }

    /// Inserts an already-owned text at the head without re-duplicating it.
    pub fn push_front_owned(&mut self, value: String) -> Result<(), QueueError> {
        let i = self.ring.try_alloc(value)?;
        self.ring.link_after(i, SENTINEL);
        debug_assert_ring_closed!(self.ring);
        Ok(())
    }

    /// Inserts an already-owned text at the tail without re-duplicating it.
    pub fn push_back_owned(&mut self, value: String) -> Result<(), QueueError> {
        let i = self.ring.try_alloc(value)?;
        self.ring.link_before(i, SENTINEL);
        debug_assert_ring_closed!(self.ring);
        Ok(())
    }

    /// Appends every value from `values` at the tail, stopping at the first
    /// allocation failure.
    pub fn try_extend<'a, I>(&mut self, values: I) -> Result<(), QueueError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for value in values {
            self.push_back(value)?;
        }
        Ok(())
    }

    /// Reserves slab room for `additional` elements ahead of a bulk insert.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), QueueError> {
        self.ring.try_reserve_slots(additional)
    }

    // ---------------------------------------------------------------------
    // REMOVAL
    // ---------------------------------------------------------------------

    /// Detaches the first element and returns ownership of its text, or
    /// `None` if the queue is empty.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.ring.is_empty() {
            return None;
        }
        let first = self.ring.succ(SENTINEL);
        self.ring.detach(first);
        debug_assert_ring_closed!(self.ring);
        Some(self.ring.release(first))
    }

    /// Detaches the last element and returns ownership of its text, or
    /// `None` if the queue is empty.
    pub fn pop_back(&mut self) -> Option<String> {
        if self.ring.is_empty() {
            return None;
        }
        let last = self.ring.pred(SENTINEL);
        self.ring.detach(last);
        debug_assert_ring_closed!(self.ring);
        Some(self.ring.release(last))
    }

    /// Like [`pop_front`](Self::pop_front), additionally copying up to
    /// `buf.len() - 1` bytes of the removed text into `buf` and
    /// NUL-terminating it. The copy is advisory: ownership of the full text
    /// still transfers to the caller through the return value.
    pub fn pop_front_into(&mut self, buf: &mut [u8]) -> Option<String> {
        let value = self.pop_front()?;
        copy_truncated(&value, buf);
        Some(value)
    }

    /// Like [`pop_back`](Self::pop_back), with the same advisory copy as
    /// [`pop_front_into`](Self::pop_front_into).
    pub fn pop_back_into(&mut self, buf: &mut [u8]) -> Option<String> {
        let value = self.pop_back()?;
        copy_truncated(&value, buf);
        Some(value)
    }

    // ---------------------------------------------------------------------
    // INSPECTION
    // ---------------------------------------------------------------------

    /// Counts the elements by full ring traversal. O(n): the queue keeps no
    /// element counter (only [`QueueEntry`](crate::QueueEntry) caches one).
    pub fn len(&self) -> usize {
        self.ring.count()
    }

    /// Returns `true` if the queue holds no elements. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Borrows the first element's text.
    pub fn front(&self) -> Option<&str> {
        let first = self.ring.succ(SENTINEL);
        (first != SENTINEL).then(|| self.ring.value(first))
    }

    /// Borrows the last element's text.
    pub fn back(&self) -> Option<&str> {
        let last = self.ring.pred(SENTINEL);
        (last != SENTINEL).then(|| self.ring.value(last))
    }

    /// Iterates the elements front to back.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            ring: &self.ring,
            cur: self.ring.succ(SENTINEL),
        }
    }

    // ---------------------------------------------------------------------
    // STRUCTURAL DELETION
    // ---------------------------------------------------------------------

    /// Deletes the middle element (index `floor(len / 2)`, so the later of
    /// the two middles on even lengths) and frees it. Returns `false` on an
    /// empty queue.
    ///
    /// Uses the slow/fast walk: slow advances one step and fast two per
    /// iteration, both starting at the first element; slow sits on the
    /// middle when fast reaches or passes the sentinel.
    pub fn delete_middle(&mut self) -> bool {
        if self.ring.is_empty() {
            return false;
        }
        let mut slow = self.ring.succ(SENTINEL);
        let mut fast = slow;
        while fast != SENTINEL && self.ring.succ(fast) != SENTINEL {
            slow = self.ring.succ(slow);
            fast = self.ring.succ(self.ring.succ(fast));
        }
        self.ring.detach(slow);
        self.ring.release(slow);
        debug_assert_ring_closed!(self.ring);
        true
    }

    /// Collapses every maximal run of two or more byte-equal consecutive
    /// values to zero elements; singleton runs survive. Returns whether
    /// anything was deleted.
    ///
    /// Only neighbors are compared, so the queue must already be sorted
    /// into contiguous runs for a full deduplication.
    pub fn dedup_runs(&mut self) -> bool {
        let mut deleted = false;
        let mut cur = self.ring.succ(SENTINEL);
        while cur != SENTINEL {
            let mut next = self.ring.succ(cur);
            if next != SENTINEL && self.ring.value(next) == self.ring.value(cur) {
                // Drop the whole run, the first member included
                while next != SENTINEL && self.ring.value(next) == self.ring.value(cur) {
                    let after = self.ring.succ(next);
                    self.ring.detach(next);
                    self.ring.release(next);
                    next = after;
                }
                self.ring.detach(cur);
                self.ring.release(cur);
                deleted = true;
            }
            cur = next;
        }
        debug_assert_ring_closed!(self.ring);
        deleted
    }

    // ---------------------------------------------------------------------
    // REARRANGEMENT
    // ---------------------------------------------------------------------

    /// Exchanges each adjacent pair of elements front to back; an odd
    /// trailing element stays in place. Pure relink, no allocation.
    pub fn swap_pairs(&mut self) {
        let mut cur = self.ring.succ(SENTINEL);
        while cur != SENTINEL && self.ring.succ(cur) != SENTINEL {
            let second = self.ring.succ(cur);
            self.ring.detach(cur);
            self.ring.link_after(cur, second);
            cur = self.ring.succ(cur);
        }
        debug_assert_ring_closed!(self.ring);
    }

    /// Reverses the whole queue in place by exchanging every node's
    /// next/prev roles, the sentinel included. O(n), no allocation.
    pub fn reverse(&mut self) {
        let mut cur = SENTINEL;
        loop {
            let next = self.ring.succ(cur);
            self.ring.swap_links(cur);
            cur = next;
            if cur == SENTINEL {
                break;
            }
        }
        debug_assert_ring_closed!(self.ring);
    }

    /// Reverses each consecutive group of exactly `k` elements in place,
    /// left to right; a trailing remainder shorter than `k` keeps its
    /// original order. No-op for `k <= 1` or a queue shorter than `k`.
    pub fn reverse_k(&mut self, k: usize) {
        if k <= 1 {
            return;
        }
        let mut remaining = self.len();
        if remaining < k {
            return;
        }
        let mut cur = self.ring.succ(SENTINEL);
        while remaining >= k {
            // Moving each group member to just after the group's old
            // predecessor reverses the group in place; the first member
            // ends up linked to whatever follows the group.
            let prev_tail = self.ring.pred(cur);
            for _ in 0..k {
                let next = self.ring.succ(cur);
                self.ring.detach(cur);
                self.ring.link_after(cur, prev_tail);
                cur = next;
            }
            remaining -= k;
        }
        debug_assert_ring_closed!(self.ring);
    }

    // ---------------------------------------------------------------------
    // SORTING
    // ---------------------------------------------------------------------

    /// Sorts the queue by lexical byte-wise order with a stable merge sort:
    /// equal values keep their original relative order in both directions.
    /// O(n log n) time, O(log n) recursion depth.
    pub fn sort(&mut self, direction: Direction) {
        let first = self.ring.succ(SENTINEL);
        if first == SENTINEL || self.ring.succ(first) == SENTINEL {
            return;
        }

        // Open the ring into a sentinel-terminated chain of next links.
        // Prev links are stale until the ring is closed again below.
        let last = self.ring.pred(SENTINEL);
        self.ring.set_next(last, SENTINEL);

        let sorted = self.merge_sort(first, direction);

        // Rebuild prev links and re-close the ring through the sentinel.
        self.ring.set_next(SENTINEL, sorted);
        let mut prev = SENTINEL;
        let mut cur = sorted;
        while cur != SENTINEL {
            self.ring.set_prev(cur, prev);
            prev = cur;
            cur = self.ring.succ(cur);
        }
        self.ring.set_prev(SENTINEL, prev);
        debug_assert_ring_closed!(self.ring);
    }

    /// Sorts an open chain headed at `head`, splitting at `floor(len / 2)`
    /// with the slow/fast walk.
    fn merge_sort(&mut self, head: usize, direction: Direction) -> usize {
        if head == SENTINEL || self.ring.succ(head) == SENTINEL {
            return head;
        }

        let mut slow = head;
        let mut fast = self.ring.succ(head);
        while fast != SENTINEL && self.ring.succ(fast) != SENTINEL {
            slow = self.ring.succ(slow);
            fast = self.ring.succ(self.ring.succ(fast));
        }
        let mid = self.ring.succ(slow);
        self.ring.set_next(slow, SENTINEL);

        let left = self.merge_sort(head, direction);
        let right = self.merge_sort(mid, direction);
        self.merge_chains(left, right, direction)
    }

    /// Classical two-pointer merge of two sorted open chains. Ties emit the
    /// left chain's element first, which is what makes the sort stable.
    fn merge_chains(&mut self, mut left: usize, mut right: usize, direction: Direction) -> usize {
        let mut head = SENTINEL;
        let mut tail = SENTINEL;
        while left != SENTINEL && right != SENTINEL {
            let picked = if direction.take_left(self.ring.value(left), self.ring.value(right)) {
                let p = left;
                left = self.ring.succ(left);
                p
            } else {
                let p = right;
                right = self.ring.succ(right);
                p
            };
            if tail == SENTINEL {
                head = picked;
            } else {
                self.ring.set_next(tail, picked);
            }
            tail = picked;
        }

        let rest = if left != SENTINEL { left } else { right };
        if tail == SENTINEL {
            return rest;
        }
        self.ring.set_next(tail, rest);
        head
    }

    // ---------------------------------------------------------------------
    // MONOTONIC FILTERING
    // ---------------------------------------------------------------------

    /// Deletes every element that has a strictly smaller element somewhere
    /// to its right, leaving a non-decreasing sequence front to back.
    /// Returns the retained count (at least 1 for a non-empty queue).
    pub fn keep_ascending(&mut self) -> usize {
        self.retain_monotonic(Direction::Ascending)
    }

    /// Deletes every element that has a strictly greater element somewhere
    /// to its right, leaving a non-increasing sequence front to back.
    /// Returns the retained count (at least 1 for a non-empty queue).
    pub fn keep_descending(&mut self) -> usize {
        self.retain_monotonic(Direction::Descending)
    }

    /// Backward scan from the tail: an element survives only if it is not
    /// strictly worse than the best value kept so far. The rightmost
    /// element is always kept.
    fn retain_monotonic(&mut self, direction: Direction) -> usize {
        let mut best = self.ring.pred(SENTINEL);
        if best == SENTINEL {
            return 0;
        }
        let mut kept = 1;
        let mut cur = self.ring.pred(best);
        while cur != SENTINEL {
            let prev = self.ring.pred(cur);
            let worse = match direction {
                Direction::Ascending => self.ring.value(cur) > self.ring.value(best),
                Direction::Descending => self.ring.value(cur) < self.ring.value(best),
            };
            if worse {
                self.ring.detach(cur);
                self.ring.release(cur);
            } else {
                best = cur;
                kept += 1;
            }
            cur = prev;
        }
        debug_assert_ring_closed!(self.ring);
        kept
    }
}

impl std::fmt::Debug for Queue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Queue {}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a queue's element texts.
pub struct Iter<'a> {
    ring: &'a Ring,
    cur: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur == SENTINEL {
            return None;
        }
        let value = self.ring.value(self.cur);
        self.cur = self.ring.succ(self.cur);
        Some(value)
    }
}

impl std::iter::FusedIterator for Iter<'_> {}

/// Duplicates `value` into independently owned storage, failing instead of
/// aborting on heap exhaustion.
fn duplicate(value: &str) -> Result<String, QueueError> {
    let mut text = String::new();
    text.try_reserve_exact(value.len())?;
    text.push_str(value);
    Ok(text)
}

/// Copies up to `buf.len() - 1` bytes of `value` into `buf` and writes a
/// terminating NUL. A zero-length buffer is left untouched.
fn copy_truncated(value: &str, buf: &mut [u8]) {
    let Some(room) = buf.len().checked_sub(1) else {
        return;
    };
    let n = value.len().min(room);
    buf[..n].copy_from_slice(&value.as_bytes()[..n]);
    buf[n] = 0;
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Queue;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Queue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self {
                seq.serialize_element(value)?;
            }
            seq.end()
        }
    }

    impl<'de> Deserialize<'de> for Queue {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct QueueVisitor;

            impl<'de> Visitor<'de> for QueueVisitor {
                type Value = Queue;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a sequence of strings")
                }

                fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Queue, A::Error> {
                    let mut queue = Queue::new();
                    while let Some(value) = seq.next_element::<String>()? {
                        queue.push_back_owned(value).map_err(de::Error::custom)?;
                    }
                    Ok(queue)
                }
            }

            deserializer.deserialize_seq(QueueVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(values: &[&str]) -> Queue {
        let mut q = Queue::new();
        q.try_extend(values.iter().copied()).unwrap();
        q
    }

    fn contents(q: &Queue) -> Vec<String> {
        q.iter().map(str::to_owned).collect()
    }

    #[test]
    fn test_push_pop_both_ends() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        assert_eq!(q.pop_front(), None);
        assert_eq!(q.pop_back(), None);

        q.push_back("b").unwrap();
        q.push_front("a").unwrap();
        q.push_back("c").unwrap();

        assert_eq!(q.len(), 3);
        assert_eq!(q.front(), Some("a"));
        assert_eq!(q.back(), Some("c"));
        assert_eq!(q.pop_front().as_deref(), Some("a"));
        assert_eq!(q.pop_back().as_deref(), Some("c"));
        assert_eq!(q.pop_front().as_deref(), Some("b"));
        assert!(q.is_empty());
    }

    #[test]
    fn test_push_front_then_pop_front_is_identity() {
        let mut q = queue_of(&["x", "y"]);
        let before = contents(&q);
        q.push_front("probe").unwrap();
        assert_eq!(q.pop_front().as_deref(), Some("probe"));
        assert_eq!(contents(&q), before);
    }

    #[test]
    fn test_pop_into_copies_and_truncates() {
        let mut q = queue_of(&["hello world"]);
        let mut buf = [0xffu8; 6];
        let value = q.pop_front_into(&mut buf).unwrap();
        assert_eq!(value, "hello world");
        assert_eq!(&buf, b"hello\0");

        // Zero-length buffers are tolerated
        let mut q = queue_of(&["x"]);
        let value = q.pop_back_into(&mut []).unwrap();
        assert_eq!(value, "x");
    }

    #[test]
    fn test_delete_middle_odd_and_even() {
        let mut q = queue_of(&["1", "2", "3", "4", "5"]);
        assert!(q.delete_middle());
        assert_eq!(contents(&q), ["1", "2", "4", "5"]);

        // Even length deletes the later of the two middles
        assert!(q.delete_middle());
        assert_eq!(contents(&q), ["1", "2", "5"]);
    }

    #[test]
    fn test_delete_middle_small_queues() {
        let mut q = Queue::new();
        assert!(!q.delete_middle());

        q.push_back("only").unwrap();
        assert!(q.delete_middle());
        assert!(q.is_empty());

        let mut q = queue_of(&["a", "b"]);
        assert!(q.delete_middle());
        assert_eq!(contents(&q), ["a"]);
    }

    #[test]
    fn test_dedup_runs_removes_whole_runs() {
        let mut q = queue_of(&["a", "b", "b", "c", "c", "c", "d"]);
        assert!(q.dedup_runs());
        assert_eq!(contents(&q), ["a", "d"]);
    }

    #[test]
    fn test_dedup_runs_noop_on_distinct_neighbors() {
        // Unsorted but free of adjacent duplicates: nothing to delete
        let mut q = queue_of(&["b", "a", "b"]);
        assert!(!q.dedup_runs());
        assert_eq!(contents(&q), ["b", "a", "b"]);
    }

    #[test]
    fn test_dedup_runs_collapses_everything() {
        let mut q = queue_of(&["x", "x", "x"]);
        assert!(q.dedup_runs());
        assert!(q.is_empty());
    }

    #[test]
    fn test_swap_pairs() {
        let mut q = queue_of(&["1", "2", "3", "4", "5"]);
        q.swap_pairs();
        assert_eq!(contents(&q), ["2", "1", "4", "3", "5"]);

        let mut q = queue_of(&["1", "2"]);
        q.swap_pairs();
        assert_eq!(contents(&q), ["2", "1"]);

        let mut q = queue_of(&["1"]);
        q.swap_pairs();
        assert_eq!(contents(&q), ["1"]);
    }

    #[test]
    fn test_reverse_and_double_reverse() {
        let mut q = queue_of(&["1", "2", "3"]);
        q.reverse();
        assert_eq!(contents(&q), ["3", "2", "1"]);
        q.reverse();
        assert_eq!(contents(&q), ["1", "2", "3"]);

        let mut empty = Queue::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_reverse_k_groups() {
        let mut q = queue_of(&["1", "2", "3", "4", "5"]);
        q.reverse_k(2);
        assert_eq!(contents(&q), ["2", "1", "4", "3", "5"]);

        let mut q = queue_of(&["1", "2", "3", "4", "5", "6"]);
        q.reverse_k(3);
        assert_eq!(contents(&q), ["3", "2", "1", "6", "5", "4"]);
    }

    #[test]
    fn test_reverse_k_noop_cases() {
        let original = ["1", "2", "3"];
        for k in [0, 1, 4] {
            let mut q = queue_of(&original);
            q.reverse_k(k);
            assert_eq!(contents(&q), original, "k = {k}");
        }
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut q = queue_of(&["pear", "apple", "mango", "fig"]);
        q.sort(Direction::Ascending);
        assert_eq!(contents(&q), ["apple", "fig", "mango", "pear"]);
        q.sort(Direction::Descending);
        assert_eq!(contents(&q), ["pear", "mango", "fig", "apple"]);
    }

    #[test]
    fn test_sort_is_stable() {
        // Tag equal keys with a suffix, sort on the key prefix only by
        // using keys whose order is unaffected by the tag
        let mut q = queue_of(&["b1", "a1", "b2", "a2"]);
        q.sort(Direction::Ascending);
        assert_eq!(contents(&q), ["a1", "a2", "b1", "b2"]);

        // Byte-equal values: relative order must be original insertion order
        let mut q = Queue::new();
        q.push_back("b").unwrap();
        q.push_back("a").unwrap();
        q.push_back("b").unwrap();
        q.sort(Direction::Ascending);
        assert_eq!(contents(&q), ["a", "b", "b"]);
    }

    #[test]
    fn test_sort_small_queues() {
        let mut q = Queue::new();
        q.sort(Direction::Ascending);
        assert!(q.is_empty());

        q.push_back("z").unwrap();
        q.sort(Direction::Ascending);
        assert_eq!(contents(&q), ["z"]);
    }

    #[test]
    fn test_keep_ascending() {
        let mut q = queue_of(&["5", "3", "8", "1", "9"]);
        assert_eq!(q.keep_ascending(), 2);
        assert_eq!(contents(&q), ["1", "9"]);
    }

    #[test]
    fn test_keep_descending() {
        let mut q = queue_of(&["5", "3", "8", "1", "9"]);
        assert_eq!(q.keep_descending(), 1);
        assert_eq!(contents(&q), ["9"]);
    }

    #[test]
    fn test_keep_ascending_preserves_monotonic_input() {
        let mut q = queue_of(&["a", "b", "b", "c"]);
        assert_eq!(q.keep_ascending(), 4);
        assert_eq!(contents(&q), ["a", "b", "b", "c"]);

        let mut empty = Queue::new();
        assert_eq!(empty.keep_ascending(), 0);
    }

    #[test]
    fn test_len_counts_by_traversal() {
        let mut q = Queue::new();
        for i in 0..10 {
            q.push_back(&i.to_string()).unwrap();
        }
        assert_eq!(q.len(), 10);
        q.pop_front();
        q.pop_back();
        assert_eq!(q.len(), 8);
    }

    #[test]
    fn test_debug_and_eq() {
        let q = queue_of(&["a", "b"]);
        assert_eq!(format!("{q:?}"), r#"["a", "b"]"#);
        assert_eq!(q, queue_of(&["a", "b"]));
        assert_ne!(q, queue_of(&["b", "a"]));
    }

    #[test]
    fn test_repeated_build_teardown() {
        // Exercises slot recycling and whole-queue drop across cycles
        for _ in 0..100 {
            let mut q = Queue::new();
            for i in 0..50 {
                q.push_back(&i.to_string()).unwrap();
            }
            for _ in 0..25 {
                q.pop_front();
            }
            drop(q);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let q = queue_of(&["a", "b", "c"]);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"["a","b","c"]"#);
        let back: Queue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
