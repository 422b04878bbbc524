//! Array-backed binary heaps with a shared, order-generic kernel.
//!
//! One algorithmic kernel — sift-down, sift-up, heapify, heap-sort,
//! remove-by-value, merge — exposed through two surfaces that differ only in
//! who owns the storage:
//!
//! ```text
//! kernel      - algorithms over exact-length slices, generic over ordering
//!     │
//!     ├── flat          - caller owns buffer + logical size, stateless fns
//!     │
//!     └── PriorityQueue - owns its storage, invariant held continuously
//! ```
//!
//! # Design Philosophy
//!
//! Heap direction is a type parameter, not a runtime flag: [`MinFirst`] and
//! [`MaxFirst`] are zero-sized [`HeapOrder`] strategies, so one kernel
//! serves both directions with no duplicated sift logic and no branch on a
//! stored comparator.
//!
//! The flat surface keeps the classic array-heap calling convention —
//! buffer plus explicit logical size, dead capacity past the live region —
//! for callers that already own their storage. The queue surface wraps the
//! same kernel for callers that want the container to own storage and
//! enforce the invariant between calls.
//!
//! # Quick Start
//!
//! Flat operations over a caller-owned buffer:
//!
//! ```
//! use apex_heap::{flat, MinFirst};
//!
//! let mut buf = [8, 3, 5, 6, 2, 9, 1, 7, 4, 0];
//! let len = buf.len();
//!
//! flat::heapify::<_, MinFirst>(&mut buf, len);
//! assert_eq!(buf[0], 0);
//!
//! flat::heap_sort::<_, MinFirst>(&mut buf, len);
//! assert_eq!(buf, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
//! ```
//!
//! An owned queue:
//!
//! ```
//! use apex_heap::PriorityQueue;
//!
//! let mut queue: PriorityQueue<u32> = PriorityQueue::with_capacity(100);
//! queue.try_insert(5).unwrap();
//! queue.try_insert(42).unwrap();
//! queue.try_insert(17).unwrap();
//!
//! assert_eq!(queue.extract_max(), Ok(42));
//! assert_eq!(queue.extract_max(), Ok(17));
//! assert_eq!(queue.extract_max(), Ok(5));
//! ```
//!
//! # Operations
//!
//! | Operation | Surface | Cost | Notes |
//! |-----------|---------|------|-------|
//! | `heapify` | flat / `from_vec` | O(n) | idempotent |
//! | `heap_sort` | flat / `into_sorted_vec` | O(n log n) | destroys heap arrangement |
//! | `remove_all` | flat | O(n) | every occurrence, then rebuild |
//! | `merge` | both | O(n + m) | sole allocating operation |
//! | `try_insert` / `extract_max` / `peek` | queue | O(log n) / O(log n) / O(1) | |
//!
//! # Error Handling
//!
//! The queue's capacity is fixed at construction; `try_insert` at capacity
//! rejects with [`Full`], carrying the item back. `peek`/`extract_max` on an
//! empty queue fail with [`Empty`]. Rejected operations mutate nothing.

#![warn(missing_docs)]

pub mod error;
pub mod flat;
pub mod kernel;
pub mod order;
pub mod queue;

pub use error::{Empty, Full};
pub use flat::Traverse;
pub use order::{HeapOrder, MaxFirst, MinFirst};
pub use queue::PriorityQueue;
