//! Debug assertion macros for ring invariants.
//!
//! These macros provide runtime checks for the structural invariants of the
//! sentinel ring. They compile to nothing in release builds, so there is
//! zero overhead outside of debug builds.

// =============================================================================
// INV-RING-01: Ring Closure
// =============================================================================

/// Assert that the ring is a single closed cycle through the sentinel.
///
/// **Invariant**: for every reachable node `n`, `prev[next[n]] == n` and
/// `next[prev[n]] == n`, and following `next` from the sentinel returns to
/// the sentinel within the slab size.
///
/// Used in: `Queue` operations after structural edits
macro_rules! debug_assert_ring_closed {
    ($ring:expr) => {
        if cfg!(debug_assertions) {
            $ring.assert_closed();
        }
    };
}

// =============================================================================
// INV-RING-02: Detached Before Relink / Release
// =============================================================================

/// Assert that a node is detached (self-linked) before it is relinked into
/// a ring or released back to the free list.
///
/// **Invariant**: `next[i] == i && prev[i] == i` for a detached node
///
/// Used in: `Ring::link_after()`, `Ring::release()`
macro_rules! debug_assert_detached {
    ($ring:expr, $i:expr) => {
        debug_assert!(
            $ring.is_detached($i),
            "INV-RING-02 violated: node {} is still linked",
            $i
        )
    };
}

// =============================================================================
// INV-RING-03: Slot Liveness
// =============================================================================

/// Assert that a slot carries a value: neither the sentinel nor a freed
/// slot may be read as an element.
///
/// **Invariant**: `value[i].is_some()` for every linked element slot
///
/// Used in: `Ring::value()`
macro_rules! debug_assert_live {
    ($ring:expr, $i:expr) => {
        debug_assert!(
            $ring.is_live($i),
            "INV-RING-03 violated: slot {} holds no value",
            $i
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_detached;
pub(crate) use debug_assert_live;
pub(crate) use debug_assert_ring_closed;
