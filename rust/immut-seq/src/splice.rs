//! Removing a run of elements and inserting replacements in its place.
//!
//! Three flavors share the same assembly step and differ in how they treat
//! `start` and `delete_count`:
//!
//! - [`spliced`] clamps both to the sequence bounds.
//! - [`spliced_relative`] additionally accepts a negative `start`, counted back
//!   from the end of the sequence.
//! - [`try_spliced`] rejects out-of-range arguments with an error.

use immut_common::{Result, verify_arg};

/// Returns a copy of `seq` with `delete_count` elements removed at `start` and
/// `items` inserted in their place.
///
/// A `start` past the end of `seq` appends `items` at the end. A `delete_count`
/// reaching past the end removes everything from `start` onwards.
///
/// # Examples
///
/// ```
/// use immut_seq::spliced;
///
/// let seq = ['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(spliced(&seq, 2, 2, []), ['a', 'b', 'e']);
/// assert_eq!(spliced(&seq, 1, 2, ['x', 'y']), ['a', 'x', 'y', 'd', 'e']);
/// assert_eq!(spliced(&seq, 10, 1, ['z']), ['a', 'b', 'c', 'd', 'e', 'z']);
/// ```
pub fn spliced<T, I>(seq: &[T], start: usize, delete_count: usize, items: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let (start, end) = clamp_bounds(seq.len(), start, delete_count);
    splice_range(seq, start, end, items)
}

/// Like [`spliced`], but a negative `start` is an offset from the end of `seq`.
///
/// `-1` addresses the last element. Offsets reaching before the beginning of the
/// sequence are clamped to `0`.
pub fn spliced_relative<T, I>(seq: &[T], start: isize, delete_count: usize, items: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let len = seq.len();
    let start = if start < 0 {
        let offset = start.unsigned_abs();
        if offset > len {
            log::trace!("spliced_relative: start {start} clamped to 0 (len {len})");
        }
        len.saturating_sub(offset)
    } else {
        start as usize
    };
    let (start, end) = clamp_bounds(len, start, delete_count);
    splice_range(seq, start, end, items)
}

/// Like [`spliced`], but fails instead of clamping.
///
/// Returns `ErrorKind::InvalidArgument` when `start` is past the end of `seq`, or
/// when fewer than `delete_count` elements follow `start`.
pub fn try_spliced<T, I>(seq: &[T], start: usize, delete_count: usize, items: I) -> Result<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    check_bounds(seq.len(), start, delete_count)
        .inspect_err(|e| log::debug!("try_spliced rejected arguments: {e}"))?;
    Ok(splice_range(seq, start, start + delete_count, items))
}

fn check_bounds(len: usize, start: usize, delete_count: usize) -> Result<()> {
    verify_arg!(start, start <= len);
    verify_arg!(delete_count, delete_count <= len - start);
    Ok(())
}

/// Resolves `start` and `delete_count` to a `start..end` range within `0..len`.
fn clamp_bounds(len: usize, start: usize, delete_count: usize) -> (usize, usize) {
    let clamped_start = start.min(len);
    let end = clamped_start.saturating_add(delete_count).min(len);
    if clamped_start != start || end - clamped_start != delete_count {
        log::trace!(
            "splice bounds clamped: start {start} -> {clamped_start}, \
             delete_count {delete_count} -> {} (len {len})",
            end - clamped_start
        );
    }
    (clamped_start, end)
}

/// Assembles `seq[..start]`, then `items`, then `seq[end..]`.
fn splice_range<T, I>(seq: &[T], start: usize, end: usize, items: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    debug_assert!(start <= end && end <= seq.len());
    let items = items.into_iter();
    let (lower, _) = items.size_hint();
    let mut result = Vec::with_capacity(seq.len() - (end - start) + lower);
    result.extend_from_slice(&seq[..start]);
    result.extend(items);
    result.extend_from_slice(&seq[end..]);
    result
}
