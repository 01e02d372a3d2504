//! Index-based sort protocol.
//!
//! A [`Sortable`] exposes only a length, a strict `less(i, j)` comparator and
//! an in-place `swap(i, j)`. The routines here drive any implementor through
//! those three operations, so a collection can be sorted without handing out
//! a mutable slice of its internals.
//!
//! - [`sort`]: heap sort, `O(n log n)`, not stable.
//! - [`sort_stable`]: insertion sort over adjacent swaps, stable.
//!
//! Collections that own a plain `Vec` can also sort it directly, as
//! [`Checklist::sort`](crate::Checklist::sort) does; the drivers here are for
//! callers that only see the protocol.

/// Capability required by [`sort`], [`sort_stable`] and [`is_sorted`].
///
/// `less` must be a strict weak ordering: irreflexive and transitive.
pub trait Sortable {
    /// Number of positions.
    fn len(&self) -> usize;

    /// True when the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchange the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort ascending by `less`. Equal elements may be reordered.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    if n < 2 {
        return;
    }

    // Build a max-heap.
    for root in (0..=(n - 1) / 2).rev() {
        sift_down(data, root, n);
    }

    // Pop the max into the tail, shrinking the heap.
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

/// Sort ascending by `less`, keeping equal elements in their current order.
pub fn sort_stable<S: Sortable + ?Sized>(data: &mut S) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// True when no element sorts before its predecessor.
#[must_use]
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

/// Restore the heap property for the subtree at `root` within `[0, end)`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && data.less(child, child + 1) {
            child += 1;
        }
        if !data.less(root, child) {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `(key, tag)` pairs ordered by key only, so stability is observable.
    struct Keyed(Vec<(u8, usize)>);

    impl Sortable for Keyed {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn less(&self, i: usize, j: usize) -> bool {
            self.0[i].0 < self.0[j].0
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.0.swap(i, j);
        }
    }

    fn keyed(keys: &[u8]) -> Keyed {
        Keyed(keys.iter().copied().zip(0..).collect())
    }

    fn keys(data: &Keyed) -> Vec<u8> {
        data.0.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn sort_handles_empty_and_single() {
        let mut empty = keyed(&[]);
        sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = keyed(&[7]);
        sort(&mut one);
        assert_eq!(keys(&one), vec![7]);
    }

    #[test]
    fn sort_orders_ascending() {
        let mut data = keyed(&[5, 1, 4, 1, 9, 2, 6, 5, 3]);
        sort(&mut data);
        assert_eq!(keys(&data), vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
        assert!(is_sorted(&data));
    }

    #[test]
    fn sort_handles_reverse_input() {
        let mut data = keyed(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        sort(&mut data);
        assert_eq!(keys(&data), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn sort_stable_keeps_equal_keys_in_order() {
        let mut data = keyed(&[2, 1, 2, 1, 2]);
        sort_stable(&mut data);
        assert_eq!(data.0, vec![(1, 1), (1, 3), (2, 0), (2, 2), (2, 4)]);
    }

    #[test]
    fn is_sorted_detects_inversions() {
        assert!(is_sorted(&keyed(&[])));
        assert!(is_sorted(&keyed(&[1, 1, 2])));
        assert!(!is_sorted(&keyed(&[2, 1])));
    }
}
