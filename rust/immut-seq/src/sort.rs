//! Sorting into a new vector.
//!
//! All sorts here are stable: elements that compare equal keep their relative
//! order from the input.
//!
//! For text, [`sorted`] relies on the `Ord` implementation of `str`, which compares
//! the UTF-8 bytes. This is the same as ordering by Unicode scalar value and does not
//! apply any locale-specific collation. [`sorted_utf16`] compares UTF-16 code units
//! instead, which matches the default array sort of JavaScript engines. The two
//! orders differ only when a string contains characters above `U+FFFF` and the
//! other contains characters in `U+E000..=U+FFFF` at the same position.

use std::cmp::Ordering;

/// Returns the elements of `seq` in ascending order.
pub fn sorted<T: Clone + Ord>(seq: &[T]) -> Vec<T> {
    let mut result = seq.to_vec();
    result.sort();
    result
}

/// Returns the elements of `seq` ordered by the `compare` function.
pub fn sorted_by<T, F>(seq: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = seq.to_vec();
    result.sort_by(compare);
    result
}

/// Returns the elements of `seq` in ascending order of the key extracted by `key`.
pub fn sorted_by_key<T, K, F>(seq: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut result = seq.to_vec();
    result.sort_by_key(key);
    result
}

/// Returns the strings of `seq` ordered by their UTF-16 code units.
pub fn sorted_utf16<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + AsRef<str>,
{
    sorted_by(seq, |a, b| compare_utf16(a.as_ref(), b.as_ref()))
}

#[inline]
fn compare_utf16(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}
