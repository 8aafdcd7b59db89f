//! Bounded views over a stack.

use std::ops::{Range, RangeBounds};

use crate::{
    Error, Iter, IterMut, Result, Stack,
    util::{cold_path, fail, resolve_range, resolve_range_within},
};

mod trait_impl;

/// A contiguous range of a [`Stack`], usable as a sequence of its own.
///
/// A slice holds its own copy of the base stack (an O(1) clone sharing the
/// same storage) plus the bounds of the range it covers. Reading through a
/// slice never copies elements. Mutating a slice edits its private base, which
/// takes a private copy of shared storage first, so the stack the slice was
/// taken from is never affected.
///
/// Slices keep the indices of their base: the first element of `stack.slice(2..5)`
/// is at index `2`.
///
/// ```
/// use cow_stack::Stack;
///
/// let mut stack = Stack::from([1, 2, 3, 4, 5]);
/// let mut view = stack.slice(1..4);
/// assert_eq!(view, [2, 3, 4]);
/// assert_eq!(view[1], 2);
///
/// view[2] = 30;
/// assert_eq!(stack, [1, 2, 3, 4, 5]);
///
/// stack.replace_range(1..4, view);
/// assert_eq!(stack, [1, 2, 30, 4, 5]);
/// ```
pub struct StackSlice<T> {
    base: Stack<T>,
    bounds: Range<usize>,
}

impl<T> StackSlice<T> {
    #[inline]
    pub(crate) fn from_parts(base: Stack<T>, bounds: Range<usize>) -> Self {
        debug_assert!(bounds.start <= bounds.end && bounds.end <= base.len());
        Self { base, bounds }
    }

    /// Creates a slice of `base` covering `bounds`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is not within `0..=base.len()`.
    #[track_caller]
    pub fn new<R: RangeBounds<usize>>(base: Stack<T>, bounds: R) -> Self {
        Self::try_new(base, bounds).unwrap_or_else(|error| fail(error))
    }

    /// Checked form of [`new`](Self::new).
    pub fn try_new<R: RangeBounds<usize>>(base: Stack<T>, bounds: R) -> Result<Self> {
        let bounds = resolve_range(bounds, base.len())?;
        Ok(Self::from_parts(base, bounds))
    }

    // ============ Basic accessors ============

    /// Returns the stack this slice was taken from, as of slicing time.
    #[inline]
    pub fn base(&self) -> &Stack<T> {
        &self.base
    }

    /// Consumes the slice and returns its base.
    #[inline]
    pub fn into_base(self) -> Stack<T> {
        self.base
    }

    /// Returns the covered range of base indices.
    #[inline]
    pub fn bounds(&self) -> Range<usize> {
        self.bounds.clone()
    }

    /// Index of the first element.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.bounds.start
    }

    /// Index one past the last element.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.bounds.end
    }

    /// Same as [`bounds`](Self::bounds).
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.bounds()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Returns the element at base index `index`, or `None` if it is outside
    /// the bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if !self.bounds.contains(&index) {
            return None;
        }
        self.base.get(index)
    }

    /// Returns the top element of the slice, the one at `start_index()`.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(self.bounds.start)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.peek()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.get(self.bounds.end.checked_sub(1)?)
    }

    /// Returns an iterator over the covered elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.base.range_iter(self.bounds())
    }

    /// Moves `index` by `distance` positions, returning `None` if the result
    /// leaves `start_index()..=end_index()`.
    pub fn offset_index(&self, index: usize, distance: isize) -> Option<usize> {
        if index < self.bounds.start || index > self.bounds.end {
            return None;
        }
        let target = index.checked_add_signed(distance)?;
        (self.bounds.start..=self.bounds.end)
            .contains(&target)
            .then_some(target)
    }

    /// Number of positions from `from` to `to`, negative if `to` comes first.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `start_index()..=end_index()`.
    #[track_caller]
    pub fn distance(&self, from: usize, to: usize) -> isize {
        self.check_position(from);
        self.check_position(to);
        if to >= from {
            (to - from) as isize
        } else {
            -((from - to) as isize)
        }
    }

    /// Returns a slice of the same base covering `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within the current bounds.
    #[track_caller]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> StackSlice<T> {
        self.try_slice(range).unwrap_or_else(|error| fail(error))
    }

    /// Checked form of [`slice`](Self::slice).
    pub fn try_slice<R: RangeBounds<usize>>(&self, range: R) -> Result<StackSlice<T>> {
        let bounds = resolve_range_within(range, &self.bounds)?;
        Ok(Self::from_parts(self.base.clone(), bounds))
    }

    /// Calls `f` with the covered elements as one slice if the base stores
    /// them contiguously.
    pub fn with_contiguous_storage_if_available<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&[T]) -> R,
    {
        self.base.contiguous_range(self.bounds()).map(f)
    }

    // ============ Bounds checks ============

    #[track_caller]
    #[inline]
    fn check_index(&self, index: usize) {
        if !self.bounds.contains(&index) {
            cold_path();
            fail(self.index_error(index));
        }
    }

    #[track_caller]
    #[inline]
    fn check_position(&self, index: usize) {
        if index < self.bounds.start || index > self.bounds.end {
            cold_path();
            fail(self.index_error(index));
        }
    }

    #[track_caller]
    #[inline]
    fn resolve<R: RangeBounds<usize>>(&self, range: R) -> Range<usize> {
        resolve_range_within(range, &self.bounds).unwrap_or_else(|error| fail(error))
    }

    fn index_error(&self, index: usize) -> Error {
        Error::IndexOutsideBounds {
            index,
            lower: self.bounds.start,
            upper: self.bounds.end,
        }
    }

    /// Moves the upper bound after the base changed from `before` to its
    /// current length.
    #[inline]
    fn rebound(&mut self, before: usize) {
        let after = self.base.len();
        self.bounds.end = self.bounds.end + after - before;
    }
}

impl<T: Clone> StackSlice<T> {
    /// Returns a slice over a fresh stack of `count` clones of `value`.
    pub fn repeating(value: T, count: usize) -> Self {
        Self::from(Stack::repeating(value, count))
    }

    /// Copies the covered elements into a stack of their own.
    pub fn to_stack(&self) -> Stack<T> {
        self.iter().cloned().collect()
    }

    /// Copies the covered elements into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a mutable reference to the element at base index `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if !self.bounds.contains(&index) {
            return None;
        }
        self.base.get_mut(index)
    }

    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.bounds.start)
    }

    /// Returns an iterator that allows modifying each covered element.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let bounds = self.bounds();
        self.base.range_iter_mut(bounds)
    }

    /// Inserts `value` at `start_index()`, the top of the slice.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.insert(self.bounds.start, value);
    }

    /// Removes the element at `start_index()`, or returns `None` if the slice
    /// is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove(self.bounds.start))
    }

    /// Inserts `value` at base index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `start_index()..=end_index()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.check_position(index);
        self.base.insert(index, value);
        self.bounds.end += 1;
    }

    /// Inserts all of `elements` at base index `index`, keeping their order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `start_index()..=end_index()`.
    #[track_caller]
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        self.check_position(index);
        let before = self.base.len();
        self.base.insert_all(index, elements);
        self.rebound(before);
    }

    /// Removes and returns the element at base index `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the bounds.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);
        let value = self.base.remove(index);
        self.bounds.end -= 1;
        value
    }

    /// Checked form of [`remove`](Self::remove).
    pub fn try_remove(&mut self, index: usize) -> Result<T> {
        if !self.bounds.contains(&index) {
            return Err(self.index_error(index));
        }
        let value = self.base.try_remove(index)?;
        self.bounds.end -= 1;
        Ok(value)
    }

    /// Removes the elements in `range`, given in base indices.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within the bounds.
    #[track_caller]
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) {
        let range = self.resolve(range);
        self.bounds.end -= range.len();
        self.base.remove_range(range);
    }

    /// Replaces the elements in `range`, given in base indices, with `elements`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within the bounds.
    #[track_caller]
    pub fn replace_range<R, I>(&mut self, range: R, elements: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let range = self.resolve(range);
        let before = self.base.len();
        self.base.replace_range(range, elements);
        self.rebound(before);
    }

    /// Calls `f` with the covered elements as one mutable slice.
    ///
    /// Works like [`Stack::with_contiguous_mut`] on the base, handing `f` only
    /// the covered part.
    ///
    /// # Panics
    ///
    /// Panics if the base buffer or the covered part moved while `f` ran.
    pub fn with_contiguous_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut [T]) -> R,
    {
        let bounds = self.bounds();
        self.base.with_contiguous_range_mut(bounds, f)
    }
}
