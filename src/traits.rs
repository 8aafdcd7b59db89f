//! Capability traits shared by [`Stack`](crate::Stack) and
//! [`StackSlice`](crate::StackSlice).
//!
//! Both types also implement the usual std traits (`PartialEq`, `Hash`,
//! `Index`, `IntoIterator`, ...) and, with the `serde` feature, `Serialize`
//! and `Deserialize`. The traits here cover what std has no trait for, so
//! code can be written once against either a whole stack or a slice of one.
//!
//! ```
//! use cow_stack::{Lifo, Stack};
//!
//! fn drain_top<S: Lifo<i32>>(stack: &mut S, n: usize) -> Vec<i32> {
//!     (0..n).map_while(|_| stack.pop()).collect()
//! }
//!
//! let mut stack = Stack::from([1, 2, 3, 4]);
//! let mut slice = stack.slice(1..);
//!
//! assert_eq!(drain_top(&mut slice, 2), [2, 3]);
//! assert_eq!(drain_top(&mut stack, 2), [1, 2]);
//! ```

use std::ops::{Range, RangeBounds};

/// Last-in-first-out access. The top is the first position of the sequence.
pub trait Lifo<T> {
    /// Pushes `value` onto the top.
    fn push(&mut self, value: T);

    /// Removes and returns the top element, or `None` if empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns the top element without removing it.
    fn peek(&self) -> Option<&T>;
}

/// An ordered sequence whose contents can be edited range by range.
///
/// Only [`replace_range`](RangeReplaceable::replace_range) and the index
/// accessors are required; the other edits are expressed through it.
/// Indices are those of the sequence itself, which for a
/// [`StackSlice`](crate::StackSlice) are the indices of its base stack.
pub trait RangeReplaceable<T> {
    /// Position of the first element.
    fn start_index(&self) -> usize;

    /// Position one past the last element.
    fn end_index(&self) -> usize;

    /// Replaces the elements in `range` with `elements`.
    fn replace_range<R, I>(&mut self, range: R, elements: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>;

    /// All valid element positions.
    fn indices(&self) -> Range<usize> {
        self.start_index()..self.end_index()
    }

    /// Inserts `value` at `index`.
    fn insert_at(&mut self, index: usize, value: T) {
        self.replace_range(index..index, [value]);
    }

    /// Inserts all of `elements` at `index`, keeping their order.
    fn insert_contents<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        self.replace_range(index..index, elements);
    }

    /// Removes the elements in `range`.
    fn remove_subrange<R: RangeBounds<usize>>(&mut self, range: R) {
        self.replace_range(range, []);
    }

    /// Appends `elements` after the last element.
    fn append_contents<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        let end = self.end_index();
        self.replace_range(end..end, elements);
    }

    /// Removes every element.
    fn remove_all(&mut self) {
        self.replace_range(.., []);
    }
}
