//! ringlist - An Ordered Queue of Owned Strings on a Sentinel Ring
//!
//! A circular doubly-linked list with a sentinel node, stored as an
//! index-addressed slab instead of raw pointers, carrying one owned string
//! per element. On top of the ring sit the structural operations that make
//! linked lists interesting: pairwise swap, full and k-group reversal,
//! adjacent-run deduplication, stable merge sort, monotonic filtering, and
//! a k-way merge across independent queues.
//!
//! # Key Properties
//!
//! - Ring closure (`prev[next[n]] == n`) asserted after every structural
//!   edit in debug builds
//! - Structural operations are pure link surgery: no element text moves
//! - Insertions reserve fallibly before mutating, so failure has no
//!   partial effects
//! - Single-threaded by contract: no locks, no suspension points
//!
//! # Example
//!
//! ```
//! use ringlist::{merge_all, Direction, Queue, QueueEntry};
//!
//! let mut q = Queue::new();
//! q.push_back("carol")?;
//! q.push_back("alice")?;
//! q.push_back("alice")?;
//! q.push_back("bob")?;
//!
//! q.sort(Direction::Ascending);
//! assert!(q.dedup_runs());
//! assert_eq!(q.iter().collect::<Vec<_>>(), ["bob", "carol"]);
//!
//! // Merge several queues into one sorted queue
//! let mut other = Queue::new();
//! other.push_back("dave")?;
//! let mut chain = vec![QueueEntry::new(q), QueueEntry::new(other)];
//! let total = merge_all(&mut chain, Direction::Ascending)?;
//! assert_eq!(total, 3);
//! # Ok::<(), ringlist::QueueError>(())
//! ```

mod error;
mod invariants;
mod merge;
mod queue;
mod ring;

pub use error::QueueError;
pub use merge::{merge_all, QueueEntry};
pub use queue::{Direction, Iter, Queue};
