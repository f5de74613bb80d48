//! Element removal, insertion at either end, and reversal.

/// Returns all elements of `seq` except the last one.
///
/// An empty input yields an empty output.
pub fn popped<T: Clone>(seq: &[T]) -> Vec<T> {
    seq[..seq.len().saturating_sub(1)].to_vec()
}

/// Returns all elements of `seq` except the first one.
///
/// An empty input yields an empty output.
pub fn shifted<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.get(1..).unwrap_or_default().to_vec()
}

/// Returns the elements of `seq` followed by `item`.
pub fn pushed<T: Clone>(seq: &[T], item: T) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.extend_from_slice(seq);
    result.push(item);
    result
}

/// Returns `item` followed by the elements of `seq`.
pub fn unshifted<T: Clone>(seq: &[T], item: T) -> Vec<T> {
    let mut result = Vec::with_capacity(seq.len() + 1);
    result.push(item);
    result.extend_from_slice(seq);
    result
}

/// Returns the elements of `seq` in reverse order.
pub fn reversed<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}
