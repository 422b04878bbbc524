//! Algorithmic kernel shared by both heap surfaces.
//!
//! Every function here operates on an exact-length slice: the slice *is* the
//! live region. Callers holding a buffer with dead capacity slice it down
//! first — that is exactly what the [`flat`](crate::flat) surface does.
//!
//! With `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`, `right(i) = 2i + 2`,
//! the invariant maintained throughout is: for every `i > 0`,
//! `heap[parent(i)]` is not strictly worse than `heap[i]` under the chosen
//! [`HeapOrder`].

use crate::order::HeapOrder;

/// Restores the invariant at `i`, assuming both child subtrees already
/// satisfy it.
///
/// Repeatedly swaps `heap[i]` with whichever child belongs closer to the
/// root, until neither child is strictly better or a leaf is reached.
/// O(log n), in-place. A no-op if `i` is out of range.
pub fn sift_down<T, O>(heap: &mut [T], mut i: usize)
where
    T: Ord,
    O: HeapOrder,
{
    let n = heap.len();
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut best = i;
        if left < n && O::before(&heap[left], &heap[best]) {
            best = left;
        }
        if right < n && O::before(&heap[right], &heap[best]) {
            best = right;
        }
        if best == i {
            return;
        }
        heap.swap(i, best);
        i = best;
    }
}

/// Restores the invariant at `i`, assuming `heap[..i]` already satisfies it.
///
/// Swaps toward the root while the parent is strictly worse. O(log n).
pub fn sift_up<T, O>(heap: &mut [T], mut i: usize)
where
    T: Ord,
    O: HeapOrder,
{
    while i > 0 {
        let parent = (i - 1) / 2;
        if O::before(&heap[i], &heap[parent]) {
            heap.swap(i, parent);
            i = parent;
        } else {
            return;
        }
    }
}

/// Rearranges an arbitrary slice into a heap.
///
/// Sifts down every internal node from `(n - 2) / 2` back to the root.
/// O(n) total, and idempotent: heapifying a valid heap changes nothing.
pub fn heapify<T, O>(heap: &mut [T])
where
    T: Ord,
    O: HeapOrder,
{
    let n = heap.len();
    for i in (0..n / 2).rev() {
        sift_down::<T, O>(heap, i);
    }
}

/// Sorts the slice in place via heap-sort. O(n log n).
///
/// The direction follows the ordering: [`MinFirst`](crate::MinFirst) yields
/// descending order, [`MaxFirst`](crate::MaxFirst) ascending, because each
/// round moves the current root to the end of the shrinking prefix.
///
/// The output is a sorted slice, *not* a heap — the heap arrangement is
/// destroyed and re-heapifying does not restore it.
pub fn heap_sort<T, O>(heap: &mut [T])
where
    T: Ord,
    O: HeapOrder,
{
    heapify::<T, O>(heap);
    for end in (1..heap.len()).rev() {
        heap.swap(0, end);
        sift_down::<T, O>(&mut heap[..end], 0);
    }
}

/// Removes every element equal to `key` and returns the new logical size.
///
/// Equality is value equality, not heap order. Survivors are compacted to
/// the front of the slice in their original relative order and re-heapified;
/// the removed elements end up in `heap[new_len..]` in unspecified
/// arrangement. A key with no occurrences leaves the logical size unchanged
/// (the slice is still heapified, a no-op if it already was a heap).
///
/// O(n) for the compaction plus O(n) for the rebuild.
pub fn remove_all<T, O>(heap: &mut [T], key: &T) -> usize
where
    T: Ord,
    O: HeapOrder,
{
    let mut kept = 0;
    for i in 0..heap.len() {
        if heap[i] != *key {
            // Swap rather than overwrite so removed elements stay owned by
            // the buffer tail.
            heap.swap(kept, i);
            kept += 1;
        }
    }
    heapify::<T, O>(&mut heap[..kept]);
    kept
}

/// Builds a new heap holding the multiset union of two inputs.
///
/// Copies both inputs into a fresh `Vec` (duplicates preserved, neither
/// input needs to be a valid heap) and heapifies it. Inputs are read-only;
/// ownership of the result transfers to the caller. This is the kernel's
/// only allocating operation.
pub fn merge<T, O>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Clone,
    O: HeapOrder,
{
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    heapify::<T, O>(&mut out);
    out
}

/// Returns `true` if the slice satisfies the heap invariant.
pub fn is_heap<T, O>(heap: &[T]) -> bool
where
    T: Ord,
    O: HeapOrder,
{
    (1..heap.len()).all(|i| !O::before(&heap[i], &heap[(i - 1) / 2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{MaxFirst, MinFirst};

    // Driver fixtures from the flat heap's original workload.
    const INPUT1: [i32; 10] = [8, 3, 5, 6, 2, 9, 1, 7, 4, 0];
    const INPUT2: [i32; 6] = [4, 6, 1, 8, 2, 3];
    const INPUT3: [i32; 7] = [2, 2, 2, 2, 2, 2, 2];

    fn scrambled(n: usize) -> Vec<u64> {
        (0..n as u64).map(|i| (i * 7 + 13) % n as u64).collect()
    }

    #[test]
    fn heapify_establishes_invariant() {
        let mut heap = INPUT1.to_vec();
        heapify::<_, MinFirst>(&mut heap);
        assert!(is_heap::<_, MinFirst>(&heap));
        assert_eq!(heap[0], 0);

        let mut heap = INPUT1.to_vec();
        heapify::<_, MaxFirst>(&mut heap);
        assert!(is_heap::<_, MaxFirst>(&heap));
        assert_eq!(heap[0], 9);
    }

    #[test]
    fn heapify_is_idempotent() {
        let mut once = INPUT1.to_vec();
        heapify::<_, MinFirst>(&mut once);
        let mut twice = once.clone();
        heapify::<_, MinFirst>(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn heapify_tiny_inputs() {
        let mut empty: Vec<i32> = Vec::new();
        heapify::<_, MinFirst>(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![7];
        heapify::<_, MinFirst>(&mut single);
        assert_eq!(single, [7]);

        let mut pair = vec![9, 1];
        heapify::<_, MinFirst>(&mut pair);
        assert_eq!(pair, [1, 9]);
    }

    #[test]
    fn sift_down_repairs_root() {
        // Valid min-heap except for the root.
        let mut heap = vec![9, 1, 2, 3, 4, 5, 6];
        sift_down::<_, MinFirst>(&mut heap, 0);
        assert!(is_heap::<_, MinFirst>(&heap));
        assert_eq!(heap[0], 1);
    }

    #[test]
    fn sift_down_leaf_is_noop() {
        let mut heap = vec![1, 2, 3];
        sift_down::<_, MinFirst>(&mut heap, 2);
        assert_eq!(heap, [1, 2, 3]);

        // Out of range: nothing to do.
        sift_down::<_, MinFirst>(&mut heap, 10);
        assert_eq!(heap, [1, 2, 3]);
    }

    #[test]
    fn sift_up_repairs_last() {
        let mut heap = vec![1, 2, 3, 4, 0];
        sift_up::<_, MinFirst>(&mut heap, 4);
        assert!(is_heap::<_, MinFirst>(&heap));
        assert_eq!(heap[0], 0);
    }

    #[test]
    fn heap_sort_min_first_descends() {
        let mut heap = INPUT1.to_vec();
        heap_sort::<_, MinFirst>(&mut heap);
        assert_eq!(heap, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn heap_sort_max_first_ascends() {
        let mut heap = INPUT2.to_vec();
        heap_sort::<_, MaxFirst>(&mut heap);
        assert_eq!(heap, [1, 2, 3, 4, 6, 8]);
    }

    #[test]
    fn heap_sort_output_is_not_a_heap() {
        let mut heap = INPUT1.to_vec();
        heapify::<_, MinFirst>(&mut heap);
        let before_sort = heap.clone();

        heap_sort::<_, MinFirst>(&mut heap);
        assert!(!is_heap::<_, MinFirst>(&heap));

        // Re-heapifying sorted output does not reproduce the pre-sort
        // arrangement.
        heapify::<_, MinFirst>(&mut heap);
        assert_ne!(heap, before_sort);
    }

    #[test]
    fn remove_all_strips_every_occurrence() {
        let mut heap = INPUT2.to_vec();
        heapify::<_, MinFirst>(&mut heap);
        let n = remove_all::<_, MinFirst>(&mut heap, &8);
        assert_eq!(n, 5);
        assert!(!heap[..n].contains(&8));
        assert!(is_heap::<_, MinFirst>(&heap[..n]));
    }

    #[test]
    fn remove_all_duplicates_to_empty() {
        let mut heap = INPUT3.to_vec();
        heapify::<_, MinFirst>(&mut heap);

        let n = remove_all::<_, MinFirst>(&mut heap, &2);
        assert_eq!(n, 0);

        // Removing again from the (logically) empty heap stays empty.
        let n = remove_all::<_, MinFirst>(&mut heap[..n], &2);
        assert_eq!(n, 0);
    }

    #[test]
    fn remove_all_absent_key_keeps_size() {
        let mut heap = INPUT1.to_vec();
        heapify::<_, MinFirst>(&mut heap);
        let before = heap.clone();
        let n = remove_all::<_, MinFirst>(&mut heap, &42);
        assert_eq!(n, before.len());
        assert_eq!(heap, before);
    }

    #[test]
    fn remove_all_match_at_last_live_index() {
        // Max element of a min-heap sits at the last index; removing it must
        // not touch anything past the live region.
        let mut heap = vec![0, 1, 2, 9];
        assert!(is_heap::<_, MinFirst>(&heap));
        let n = remove_all::<_, MinFirst>(&mut heap, &9);
        assert_eq!(n, 3);
        assert_eq!(&heap[..n], [0, 1, 2]);
    }

    #[test]
    fn merge_preserves_multiset() {
        let mut a = INPUT1.to_vec();
        let mut b = INPUT2.to_vec();
        heapify::<_, MinFirst>(&mut a);
        heapify::<_, MinFirst>(&mut b);

        let merged = merge::<_, MinFirst>(&a, &b);
        assert_eq!(merged.len(), a.len() + b.len());
        assert!(is_heap::<_, MinFirst>(&merged));

        let mut expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        let mut actual = merged.clone();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn merge_with_empty_copies_other() {
        let mut a = INPUT2.to_vec();
        heapify::<_, MinFirst>(&mut a);

        let merged = merge::<_, MinFirst>(&a, &[]);
        assert_eq!(merged.len(), a.len());
        assert!(is_heap::<_, MinFirst>(&merged));

        let empty: Vec<i32> = merge::<_, MinFirst>(&[], &[]);
        assert!(empty.is_empty());
    }

    #[test]
    fn merge_accepts_unheapified_inputs() {
        let merged = merge::<_, MinFirst>(&INPUT1, &INPUT2);
        assert_eq!(merged.len(), INPUT1.len() + INPUT2.len());
        assert!(is_heap::<_, MinFirst>(&merged));
    }

    #[test]
    fn stress_invariant_through_sort() {
        let mut heap = scrambled(1000);
        heapify::<_, MinFirst>(&mut heap);
        assert!(is_heap::<_, MinFirst>(&heap));

        heap_sort::<_, MinFirst>(&mut heap);
        assert!(heap.windows(2).all(|w| w[0] >= w[1]));
    }
}
