use crate::invariants::{debug_assert_detached, debug_assert_live};
use crate::QueueError;

// =============================================================================
// STORAGE & OWNERSHIP STRATEGY
// =============================================================================
//
// The ring is a circular doubly-linked list expressed over a slab of nodes
// addressed by stable indices instead of raw pointers:
//
// - Slot 0 is the sentinel. It is allocated at construction, never carries a
//   value, and never moves. An empty ring is the sentinel self-linked.
// - Every other slot is either a linked element (value present), a detached
//   element in transit between rings or to a caller (value present,
//   self-linked), or on the free list (value absent, self-linked).
// - The slab is the sole owner of its elements. Releasing a slot hands the
//   owned text back to the caller exactly once and recycles the index, so
//   there is no way to double-free or to read a freed value through a stale
//   neighbor link: neighbors are plain indices, not owning references.
//
// Link surgery is confined to this module. The operations in `queue` are
// written against `succ`/`pred`/`link_after`/`detach` so the ring-closure
// invariant can be asserted independently of what the algorithms do.
//
// =============================================================================

/// Index of the sentinel slot in every slab.
pub(crate) const SENTINEL: usize = 0;

#[derive(Debug)]
struct Node {
    next: usize,
    prev: usize,
    value: Option<String>,
}

/// Slab-backed circular doubly-linked ring with a sentinel at slot 0.
#[derive(Debug)]
pub(crate) struct Ring {
    nodes: Vec<Node>,
    /// Recycled slot indices, reused before the slab grows.
    free: Vec<usize>,
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}

impl Ring {
    /// Creates an empty ring: the sentinel pointing to itself.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node {
                next: SENTINEL,
                prev: SENTINEL,
                value: None,
            }],
            free: Vec::new(),
        }
    }

    /// Creates an empty ring with room for `capacity` elements, failing
    /// instead of aborting if the slab cannot be allocated.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, QueueError> {
        let mut nodes = Vec::new();
        nodes.try_reserve(capacity + 1)?;
        nodes.push(Node {
            next: SENTINEL,
            prev: SENTINEL,
            value: None,
        });
        Ok(Self {
            nodes,
            free: Vec::new(),
        })
    }

    // ---------------------------------------------------------------------
    // LINK ACCESSORS
    // ---------------------------------------------------------------------

    #[inline]
    pub(crate) fn succ(&self, i: usize) -> usize {
        self.nodes[i].next
    }

    #[inline]
    pub(crate) fn pred(&self, i: usize) -> usize {
        self.nodes[i].prev
    }

    /// Raw next-link write. Only sort uses this, while the ring is opened
    /// into a chain; prev links are rebuilt before the ring closes again.
    #[inline]
    pub(crate) fn set_next(&mut self, i: usize, j: usize) {
        self.nodes[i].next = j;
    }

    /// Raw prev-link write. See [`set_next`](Self::set_next).
    #[inline]
    pub(crate) fn set_prev(&mut self, i: usize, j: usize) {
        self.nodes[i].prev = j;
    }

    /// Exchanges the next/prev roles of one node.
    #[inline]
    pub(crate) fn swap_links(&mut self, i: usize) {
        let node = &mut self.nodes[i];
        std::mem::swap(&mut node.next, &mut node.prev);
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.nodes[SENTINEL].next == SENTINEL
    }

    #[inline]
    pub(crate) fn is_detached(&self, i: usize) -> bool {
        self.nodes[i].next == i && self.nodes[i].prev == i
    }

    #[inline]
    pub(crate) fn is_live(&self, i: usize) -> bool {
        self.nodes[i].value.is_some()
    }

    /// Borrows the text of a live element slot.
    #[inline]
    pub(crate) fn value(&self, i: usize) -> &str {
        debug_assert_live!(self, i);
        self.nodes[i].value.as_deref().unwrap_or_default()
    }

    /// Counts elements by full ring traversal. O(n) by contract: no element
    /// counter is cached at this layer.
    pub(crate) fn count(&self) -> usize {
        let mut len = 0;
        let mut cur = self.succ(SENTINEL);
        while cur != SENTINEL {
            len += 1;
            cur = self.succ(cur);
        }
        len
    }

    // ---------------------------------------------------------------------
    // SLOT LIFECYCLE
    // ---------------------------------------------------------------------

    /// Allocates a detached slot holding `value`, recycling a freed index
    /// when one exists. Fails without side effects if the slab cannot grow.
    pub(crate) fn try_alloc(&mut self, value: String) -> Result<usize, QueueError> {
        if let Some(i) = self.free.pop() {
            let node = &mut self.nodes[i];
            node.next = i;
            node.prev = i;
            node.value = Some(value);
            return Ok(i);
        }
        self.nodes.try_reserve(1)?;
        let i = self.nodes.len();
        self.nodes.push(Node {
            next: i,
            prev: i,
            value: Some(value),
        });
        Ok(i)
    }

    /// Reserves slab room for `additional` elements ahead of a bulk move,
    /// so the moves themselves cannot fail midway.
    pub(crate) fn try_reserve_slots(&mut self, additional: usize) -> Result<(), QueueError> {
        let needed = additional.saturating_sub(self.free.len());
        self.nodes.try_reserve(needed)?;
        Ok(())
    }

    /// Reclaims a detached slot, returning its owned text. The index goes
    /// on the free list; the text is handed back exactly once.
    pub(crate) fn release(&mut self, i: usize) -> String {
        debug_assert!(i != SENTINEL, "cannot release the sentinel");
        debug_assert_detached!(self, i);
        debug_assert_live!(self, i);
        let value = self.nodes[i].value.take().unwrap_or_default();
        self.free.push(i);
        value
    }

    // ---------------------------------------------------------------------
    // LINK SURGERY
    // ---------------------------------------------------------------------

    /// Links a detached node immediately after `anchor`.
    pub(crate) fn link_after(&mut self, i: usize, anchor: usize) {
        debug_assert!(i != SENTINEL, "cannot link the sentinel");
        debug_assert_detached!(self, i);
        let n = self.nodes[anchor].next;
        self.nodes[i].prev = anchor;
        self.nodes[i].next = n;
        self.nodes[anchor].next = i;
        self.nodes[n].prev = i;
    }

    /// Links a detached node immediately before `anchor`.
    #[inline]
    pub(crate) fn link_before(&mut self, i: usize, anchor: usize) {
        let p = self.nodes[anchor].prev;
        self.link_after(i, p);
    }

    /// Unlinks a node from its neighbors, restoring the ring invariant over
    /// the remaining elements, and leaves the node self-linked.
    pub(crate) fn detach(&mut self, i: usize) {
        debug_assert!(i != SENTINEL, "cannot detach the sentinel");
        let p = self.nodes[i].prev;
        let n = self.nodes[i].next;
        self.nodes[p].next = n;
        self.nodes[n].prev = p;
        self.nodes[i].next = i;
        self.nodes[i].prev = i;
    }

    // ---------------------------------------------------------------------
    // INVARIANT CHECK (debug builds)
    // ---------------------------------------------------------------------

    /// Walks the full ring and panics if it is not a single closed cycle
    /// with consistent back-links. Invoked through `debug_assert_ring_closed!`,
    /// so release builds never pay for the walk.
    pub(crate) fn assert_closed(&self) {
        let mut cur = SENTINEL;
        let mut hops = 0usize;
        loop {
            let next = self.nodes[cur].next;
            assert_eq!(
                self.nodes[next].prev, cur,
                "INV-RING-01 violated: prev[next[{cur}]] != {cur}"
            );
            assert!(
                cur == SENTINEL || self.is_live(cur),
                "INV-RING-01 violated: linked slot {cur} holds no value"
            );
            cur = next;
            hops += 1;
            assert!(
                hops <= self.nodes.len(),
                "INV-RING-01 violated: ring does not close within the slab"
            );
            if cur == SENTINEL {
                break;
            }
        }
    }
}
