//! A max-first priority queue that owns its storage.
//!
//! Where the [`flat`](crate::flat) surface leaves the buffer and logical
//! size in the caller's hands, [`PriorityQueue`] owns both: the backing
//! `Vec` is allocated once at construction, the logical size is tracked
//! internally, and the heap invariant holds continuously between calls.

use crate::error::{Empty, Full};
use crate::flat::{self, Traverse};
use crate::kernel;
use crate::order::MaxFirst;

/// A fixed-capacity priority queue over comparable items.
///
/// The root is always the maximum under the item's `Ord`. For
/// priority-bearing items, implement `Ord` on the priority field alone —
/// the rest of the item does not participate in ordering, and ties between
/// equal priorities break in no guaranteed order.
///
/// Capacity is fixed at construction: [`try_insert`](Self::try_insert)
/// rejects with [`Full`] once the queue holds `capacity` items, returning
/// the item to the caller. Reads from an empty queue fail with [`Empty`].
///
/// # Example
///
/// ```
/// use apex_heap::PriorityQueue;
///
/// let mut queue: PriorityQueue<u32> = PriorityQueue::with_capacity(8);
///
/// queue.try_insert(3).unwrap();
/// queue.try_insert(9).unwrap();
/// queue.try_insert(5).unwrap();
///
/// assert_eq!(queue.peek(), Ok(&9));
/// assert_eq!(queue.extract_max(), Ok(9));
/// assert_eq!(queue.extract_max(), Ok(5));
/// assert_eq!(queue.extract_max(), Ok(3));
/// assert!(queue.extract_max().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Ord> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue holding up to `capacity` items.
    ///
    /// The backing storage is allocated here and never grows.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a queue from an arbitrary vector of items in O(n).
    ///
    /// The items are heapified in place; `capacity` bounds the queue from
    /// then on.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or smaller than `items.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use apex_heap::PriorityQueue;
    ///
    /// let queue = PriorityQueue::from_vec(vec![4, 6, 1, 8, 2, 3], 8);
    /// assert_eq!(queue.peek(), Ok(&8));
    /// assert_eq!(queue.len(), 6);
    /// ```
    pub fn from_vec(mut items: Vec<T>, capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        assert!(
            capacity >= items.len(),
            "capacity smaller than item count"
        );
        items.reserve_exact(capacity - items.len());
        kernel::heapify::<T, MaxFirst>(&mut items);
        Self { items, capacity }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the number of items in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the queue holds `capacity` items.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the maximum item.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the queue holds no items.
    #[inline]
    pub fn peek(&self) -> Result<&T, Empty> {
        self.items.first().ok_or(Empty)
    }

    /// Returns the heap's backing array, root first.
    ///
    /// Read-only view for display layers; the slice satisfies the heap
    /// invariant but is otherwise in unspecified order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a lazy `(depth, item)` traversal of the tree shape.
    ///
    /// Same order as [`flat::traverse`]: right subtree before each node,
    /// left after, for sideways-tree rendering.
    #[inline]
    pub fn traverse(&self) -> Traverse<'_, T> {
        flat::traverse(&self.items, self.items.len())
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Inserts an item, keeping the invariant. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`Full`] carrying the item back if the queue is at capacity.
    /// Nothing is mutated on rejection.
    pub fn try_insert(&mut self, item: T) -> Result<(), Full<T>> {
        if self.items.len() == self.capacity {
            return Err(Full(item));
        }
        self.items.push(item);
        let last = self.items.len() - 1;
        kernel::sift_up::<T, MaxFirst>(&mut self.items, last);
        Ok(())
    }

    /// Removes and returns the maximum item. O(log n).
    ///
    /// The last item moves to the root and sifts down.
    ///
    /// # Errors
    ///
    /// Returns [`Empty`] if the queue holds no items.
    pub fn extract_max(&mut self) -> Result<T, Empty> {
        if self.items.is_empty() {
            return Err(Empty);
        }
        let max = self.items.swap_remove(0);
        if !self.items.is_empty() {
            kernel::sift_down::<T, MaxFirst>(&mut self.items, 0);
        }
        Ok(max)
    }

    /// Removes all items, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Builds a new queue holding every item of `self` and `other`.
    ///
    /// Duplicates are preserved; neither input is modified. The result's
    /// capacity is the sum of both capacities, so it is never born full
    /// beyond its bound.
    pub fn merge(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self {
            items: kernel::merge::<T, MaxFirst>(&self.items, &other.items),
            capacity: self.capacity + other.capacity,
        }
    }

    /// Consumes the queue and returns its items in ascending order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut items = self.items;
        kernel::heap_sort::<T, MaxFirst>(&mut items);
        items
    }
}
