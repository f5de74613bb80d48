//! Non-mutating sequence helpers.
//!
//! Every function in this crate borrows its input sequence as `&[T]` and returns
//! a freshly allocated `Vec<T>` reflecting the requested transformation. The input
//! is never modified, and the output never shares storage with it, so callers are
//! free to mutate the result.
//!
//! # Operations
//!
//! - [`popped`], [`shifted`] - drop the last or the first element
//! - [`pushed`], [`unshifted`] - append or prepend a single element
//! - [`reversed`] - reverse the element order
//! - [`sorted`], [`sorted_by`], [`sorted_by_key`], [`sorted_utf16`] - stable sorts
//! - [`spliced`], [`spliced_relative`], [`try_spliced`] - remove a run of elements
//!   and insert replacements in its place
//!
//! The same operations are available in method form through [`ImmutableSliceExt`].
//!
//! # Examples
//!
//! ```
//! use immut_seq::{popped, spliced, ImmutableSliceExt};
//!
//! let letters = vec!["a", "b", "c", "d", "e"];
//! assert_eq!(popped(&letters), ["a", "b", "c", "d"]);
//! assert_eq!(spliced(&letters, 1, 2, ["x", "y"]), ["a", "x", "y", "d", "e"]);
//! assert_eq!(letters.reversed(), ["e", "d", "c", "b", "a"]);
//! assert_eq!(letters, ["a", "b", "c", "d", "e"]);
//! ```

pub mod ops;
pub mod slice_ext;
pub mod sort;
pub mod splice;


pub use ops::{popped, pushed, reversed, shifted, unshifted};
pub use slice_ext::ImmutableSliceExt;
pub use sort::{sorted, sorted_by, sorted_by_key, sorted_utf16};
pub use splice::{spliced, spliced_relative, try_spliced};
