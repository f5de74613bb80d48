//! An immutable, cheaply cloneable sequence with non-mutating transformations.
//!
//! [`SharedVec`] holds its elements in an `Arc<Vec<T>>` together with an offset and
//! length describing the visible window. Cloning and slicing never copy elements.
//! Transformations such as [`SharedVec::pushed`] or [`SharedVec::spliced`] return a
//! new `SharedVec` and leave the original untouched; [`SharedVec::popped`] and
//! [`SharedVec::shifted`] are zero-copy views over the same storage.

use std::fmt;
use std::ops::{Bound, Deref, RangeBounds};
use std::sync::Arc;

/// A window `offset..offset + len` into shared, never-mutated storage.
#[derive(Clone)]
pub struct SharedVec<T> {
    inner: Arc<Vec<T>>,
    offset: usize,
    len: usize,
}

impl<T> SharedVec<T> {
    /// Takes ownership of `vec` as the backing storage.
    pub fn from_vec(vec: Vec<T>) -> Self {
        let len = vec.len();
        SharedVec {
            inner: Arc::new(vec),
            offset: 0,
            len,
        }
    }

    /// Clones `slice` into fresh backing storage.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        SharedVec::from_vec(slice.to_vec())
    }

    pub fn empty() -> Self {
        SharedVec::from_vec(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner[self.offset..self.offset + self.len]
    }

    /// Returns a sub-view of this sequence, sharing the same storage.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n + 1,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };
        assert!(start <= end && end <= self.len, "slice out of bounds");
        self.window(start, end)
    }

    /// Converts to an exclusively owned `Vec<T>` by cloning the data.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Returns `true` if both values view the same storage.
    pub fn shares_storage_with(&self, other: &SharedVec<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns all elements except the last one, sharing the same storage.
    pub fn popped(&self) -> Self {
        self.window(0, self.len.saturating_sub(1))
    }

    /// Returns all elements except the first one, sharing the same storage.
    pub fn shifted(&self) -> Self {
        self.window(self.len.min(1), self.len)
    }

    fn window(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len);
        SharedVec {
            inner: Arc::clone(&self.inner),
            offset: self.offset + start,
            len: end - start,
        }
    }
}

impl<T: Clone> SharedVec<T> {
    /// Returns a new sequence with `item` appended.
    pub fn pushed(&self, item: T) -> Self {
        immut_seq::pushed(self, item).into()
    }

    /// Returns a new sequence with `item` prepended.
    pub fn unshifted(&self, item: T) -> Self {
        immut_seq::unshifted(self, item).into()
    }

    pub fn reversed(&self) -> Self {
        immut_seq::reversed(self).into()
    }

    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        immut_seq::sorted(self).into()
    }

    /// Returns a new sequence with `delete_count` elements removed at `start` and
    /// `items` inserted in their place. Out-of-range arguments are clamped the same
    /// way as [`immut_seq::spliced`].
    pub fn spliced<I>(&self, start: usize, delete_count: usize, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        immut_seq::spliced(self, start, delete_count, items).into()
    }
}

impl<T> Deref for SharedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for SharedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SharedVec<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SharedVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T> Default for SharedVec<T> {
    fn default() -> Self {
        SharedVec::empty()
    }
}

impl<T> From<Vec<T>> for SharedVec<T> {
    fn from(vec: Vec<T>) -> Self {
        SharedVec::from_vec(vec)
    }
}

impl<T> FromIterator<T> for SharedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SharedVec::from_vec(iter.into_iter().collect())
    }
}

/// By-value iterator over a `SharedVec`, cloning each element out of the shared storage.
#[derive(Clone)]
pub struct SharedVecIntoIter<T> {
    inner: Arc<Vec<T>>,
    pos: usize,
    end: usize,
}

impl<T: Clone> Iterator for SharedVecIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.inner[self.pos..self.end].first()?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SharedVecIntoIter<T> {}

impl<T: Clone> IntoIterator for SharedVec<T> {
    type Item = T;
    type IntoIter = SharedVecIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SharedVecIntoIter {
            pos: self.offset,
            end: self.offset + self.len,
            inner: self.inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> SharedVec<char> {
        s.chars().collect()
    }

    #[test]
    fn slice_shares_storage() {
        let shared = SharedVec::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(shared.len(), 5);
        assert_eq!(shared[2], 3);
        let sub = shared.slice(1..4);
        assert_eq!(&*sub, &[2, 3, 4]);
        assert!(sub.shares_storage_with(&shared));
        assert_eq!(shared.slice(..=1), [1, 2]);
    }

    #[test]
    fn empty_and_default() {
        let empty = SharedVec::<i32>::empty();
        assert!(empty.is_empty());
        assert_eq!(empty, SharedVec::default());
        assert!(empty.popped().is_empty());
        assert!(empty.shifted().is_empty());
    }

    #[test]
    fn popped_and_shifted_are_zero_copy() {
        let abc = letters("abc");
        let popped = abc.popped();
        let shifted = abc.shifted();
        assert_eq!(popped, ['a', 'b']);
        assert_eq!(shifted, ['b', 'c']);
        assert!(popped.shares_storage_with(&abc));
        assert!(shifted.shares_storage_with(&abc));
        assert_eq!(shifted.popped(), ['b']);
        assert_eq!(abc, ['a', 'b', 'c']);
    }

    #[test]
    fn pushed_and_unshifted() {
        let abc = letters("abc");
        let pushed = abc.pushed('x');
        assert_eq!(pushed, ['a', 'b', 'c', 'x']);
        assert!(!pushed.shares_storage_with(&abc));
        assert_eq!(abc.unshifted('x'), ['x', 'a', 'b', 'c']);
        assert_eq!(abc, ['a', 'b', 'c']);
    }

    #[test]
    fn reversed_and_sorted() {
        let abc = letters("abc");
        assert_eq!(abc.reversed(), ['c', 'b', 'a']);
        assert_eq!(abc.reversed().reversed(), abc);
        let cba = letters("cba");
        assert_eq!(cba.sorted(), ['a', 'b', 'c']);
        assert_eq!(cba, ['c', 'b', 'a']);
    }

    #[test]
    fn spliced_on_a_view() {
        let abcde = letters("abcde");
        assert_eq!(abcde.spliced(2, 2, []), ['a', 'b', 'e']);
        assert_eq!(abcde.spliced(1, 2, ['x', 'y']), ['a', 'x', 'y', 'd', 'e']);

        let bcd = abcde.slice(1..4);
        assert_eq!(bcd.spliced(1, 5, ['z']), ['b', 'z']);
        assert_eq!(abcde, ['a', 'b', 'c', 'd', 'e']);
    }

    #[test]
    fn into_iter_by_value_respects_view() {
        let shared = SharedVec::from_vec(vec![10, 20, 30, 40]);
        let view = shared.slice(1..3);
        assert_eq!(view.clone().into_iter().len(), 2);
        let collected: Vec<_> = view.into_iter().collect();
        assert_eq!(collected, [20, 30]);
    }

    #[test]
    fn to_vec_is_independent() {
        let shared = SharedVec::from_slice(&[String::from("a")]);
        let mut owned = shared.to_vec();
        owned[0].push('!');
        assert_eq!(shared[0], "a");
        assert_eq!(owned, ["a!"]);
    }

    #[test]
    fn debug_lists_visible_elements() {
        let view = SharedVec::from_vec(vec![1, 2, 3]).shifted();
        assert_eq!(format!("{view:?}"), "[2, 3]");
    }

    #[test]
    fn random_operations_match_slice_helpers() {
        fastrand::seed(41007);
        for _ in 0..200 {
            let len = fastrand::usize(0..16);
            let source: SharedVec<u16> = (0..len).map(|_| fastrand::u16(..)).collect();
            let snapshot = source.to_vec();
            let start = fastrand::usize(0..=len + 1);
            let delete_count = fastrand::usize(0..=len + 1);

            let (derived, expected) = match fastrand::u8(0..7) {
                0 => (source.popped(), immut_seq::popped(&snapshot)),
                1 => (source.shifted(), immut_seq::shifted(&snapshot)),
                2 => (source.pushed(1), immut_seq::pushed(&snapshot, 1)),
                3 => (source.unshifted(1), immut_seq::unshifted(&snapshot, 1)),
                4 => (source.reversed(), immut_seq::reversed(&snapshot)),
                5 => (source.sorted(), immut_seq::sorted(&snapshot)),
                _ => (
                    source.spliced(start, delete_count, [1, 2]),
                    immut_seq::spliced(&snapshot, start, delete_count, [1, 2]),
                ),
            };

            assert_eq!(derived.to_vec(), expected);
            assert_eq!(source.as_slice(), snapshot.as_slice());
        }
    }
}
