//! Method-call syntax for the non-mutating helpers.
//!
//! This module provides the [`ImmutableSliceExt`] trait, which exposes the free
//! functions of this crate as methods on slices. Because the trait is implemented
//! for `[T]`, the methods are also callable on `Vec<T>` and arrays.

use std::cmp::Ordering;

/// Extension trait adding non-mutating transformations to slices.
///
/// Each method borrows `self` immutably and returns a newly allocated `Vec<T>`.
pub trait ImmutableSliceExt<T: Clone> {
    /// See [`crate::popped`].
    fn popped(&self) -> Vec<T>;

    /// See [`crate::shifted`].
    fn shifted(&self) -> Vec<T>;

    /// See [`crate::pushed`].
    fn pushed(&self, item: T) -> Vec<T>;

    /// See [`crate::unshifted`].
    fn unshifted(&self, item: T) -> Vec<T>;

    /// See [`crate::reversed`].
    fn reversed(&self) -> Vec<T>;

    /// See [`crate::sorted`].
    fn sorted(&self) -> Vec<T>
    where
        T: Ord;

    /// See [`crate::sorted_by`].
    fn sorted_by<F>(&self, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering;

    /// See [`crate::sorted_by_key`].
    fn sorted_by_key<K, F>(&self, key: F) -> Vec<T>
    where
        K: Ord,
        F: FnMut(&T) -> K;

    /// See [`crate::spliced`].
    fn spliced<I>(&self, start: usize, delete_count: usize, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>;
}

impl<T: Clone> ImmutableSliceExt<T> for [T] {
    fn popped(&self) -> Vec<T> {
        crate::ops::popped(self)
    }

    fn shifted(&self) -> Vec<T> {
        crate::ops::shifted(self)
    }

    fn pushed(&self, item: T) -> Vec<T> {
        crate::ops::pushed(self, item)
    }

    fn unshifted(&self, item: T) -> Vec<T> {
        crate::ops::unshifted(self, item)
    }

    fn reversed(&self) -> Vec<T> {
        crate::ops::reversed(self)
    }

    fn sorted(&self) -> Vec<T>
    where
        T: Ord,
    {
        crate::sort::sorted(self)
    }

    fn sorted_by<F>(&self, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        crate::sort::sorted_by(self, compare)
    }

    fn sorted_by_key<K, F>(&self, key: F) -> Vec<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        crate::sort::sorted_by_key(self, key)
    }

    fn spliced<I>(&self, start: usize, delete_count: usize, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        crate::splice::spliced(self, start, delete_count, items)
    }
}
