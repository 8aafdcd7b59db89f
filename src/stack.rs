//! The copy-on-write stack container.

use std::{
    collections::VecDeque,
    ops::{Range, RangeBounds},
};

use crate::{
    Error, Result, StackSlice,
    storage::{SharedStorage, StorageExt},
    util::{cold_path, fail, resolve_range, trace_storage},
};

mod contiguous;
mod iter;
mod trait_impl;

pub use iter::{IntoIter, Iter, IterMut};

/// A last-in-first-out sequence with value semantics.
///
/// Index `0` is the top of the stack: [`push`](Stack::push) inserts there and
/// [`pop`](Stack::pop) removes from there. Beyond stack access, every position
/// can be read, written, inserted at, removed or replaced as a range.
///
/// Cloning a `Stack` is O(1): clones share one reference-counted buffer until
/// one of them is mutated, at which point the mutated value takes a private
/// copy. An empty stack never holds an allocation, except right after an
/// explicit [`reserve`](Stack::reserve).
///
/// # Example
///
/// ```
/// use cow_stack::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
/// assert_eq!(stack, [3, 2, 1]);
///
/// let snapshot = stack.clone();
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack, [2, 1]);
/// assert_eq!(snapshot, [3, 2, 1]);
/// ```
pub struct Stack<T> {
    pub(crate) storage: Option<SharedStorage<T>>,
}

impl<T> Stack<T> {
    /// Creates an empty stack without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self { storage: None }
    }

    // ============ Basic accessors ============

    /// Returns the number of elements in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.as_ref().map_or(0, SharedStorage::len)
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements the current storage can hold without
    /// reallocating. Zero when no storage is allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().map_or(0, SharedStorage::capacity)
    }

    /// Returns how many more elements fit before the storage has to grow.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.storage
            .as_ref()
            .map_or(0, SharedStorage::residual_capacity)
    }

    /// Returns `true` if the stack currently owns (or shares) an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.storage.is_some()
    }

    /// Returns `true` if another stack value shares this stack's storage.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.storage.as_ref().is_some_and(SharedStorage::is_shared)
    }

    /// Returns `true` if both stacks refer to the same storage, or both have none.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Some(lhs), Some(rhs)) => lhs.ptr_eq(rhs),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.as_ref()?.deque().get(index)
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the top element, if any. Same as [`peek`](Self::peek).
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the bottom element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.storage.as_ref()?.deque().back()
    }

    /// Returns the valid indices, `0..len()`.
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        0..self.len()
    }

    /// Returns the storage as two slices in index order, like
    /// [`VecDeque::as_slices`].
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        match &self.storage {
            Some(storage) => storage.deque().as_slices(),
            None => (&[], &[]),
        }
    }

    /// Returns an iterator over the elements from top to bottom.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.deque().map(VecDeque::iter),
        }
    }

    /// Removes every element and releases the storage.
    #[inline]
    pub fn clear(&mut self) {
        self.storage = None;
    }

    /// Returns a view over `range` that shares this stack's storage.
    ///
    /// The view keeps the stack's indices: its first element is at
    /// `range.start`, not at `0`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not within `0..=len()`.
    #[track_caller]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> StackSlice<T> {
        self.try_slice(range).unwrap_or_else(|error| fail(error))
    }

    /// Checked form of [`slice`](Self::slice).
    pub fn try_slice<R: RangeBounds<usize>>(&self, range: R) -> Result<StackSlice<T>> {
        let bounds = resolve_range(range, self.len())?;
        Ok(StackSlice::from_parts(self.clone(), bounds))
    }

    // ============ Internal gates ============

    #[inline]
    pub(crate) fn deque(&self) -> Option<&VecDeque<T>> {
        self.storage.as_ref().map(SharedStorage::deque)
    }

    /// Iterator over `range`, which must already be validated.
    #[inline]
    pub(crate) fn range_iter(&self, range: Range<usize>) -> Iter<'_, T> {
        Iter {
            inner: self.deque().map(|deque| deque.range(range)),
        }
    }

    /// Drops the storage once it holds no elements.
    #[inline]
    pub(crate) fn collapse_if_empty(&mut self) {
        if self.storage.as_ref().is_some_and(SharedStorage::is_empty) {
            trace_storage!("releasing drained storage");
            self.storage = None;
        }
    }

    #[track_caller]
    #[inline]
    pub(crate) fn check_index(&self, index: usize) {
        let len = self.len();
        if index >= len {
            cold_path();
            fail(Error::IndexOutOfBounds { index, len });
        }
    }

    #[track_caller]
    #[inline]
    pub(crate) fn check_insertion_index(&self, index: usize) {
        let len = self.len();
        if index > len {
            cold_path();
            fail(Error::IndexOutOfBounds { index, len });
        }
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a stack holding `count` clones of `value`.
    pub fn repeating(value: T, count: usize) -> Self {
        if count == 0 {
            return Self::new();
        }
        let mut deque = VecDeque::with_capacity(count);
        deque.resize(count, value);
        Self::from(deque)
    }

    /// Exclusivity gate: gives unique access to storage with at least
    /// `additional` spare elements, allocating or copying as needed.
    ///
    /// Every mutation goes through here before touching storage.
    #[inline]
    pub(crate) fn ensure_unique(&mut self, additional: usize) -> &mut VecDeque<T> {
        self.storage
            .get_or_insert_with(|| SharedStorage::with_capacity(additional))
            .make_unique(additional)
    }

    fn try_ensure_unique(&mut self, additional: usize) -> Result<&mut VecDeque<T>> {
        let storage = match self.storage.take() {
            Some(storage) => storage,
            None => SharedStorage::try_with_capacity(additional)?,
        };
        Ok(self.storage.insert(storage).try_make_unique(additional)?)
    }

    pub(crate) fn into_deque(self) -> VecDeque<T> {
        self.storage
            .map_or_else(VecDeque::new, SharedStorage::into_deque)
    }

    /// Returns an iterator that allows modifying each element. Takes a private
    /// copy of shared storage first.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.range_iter_mut(0..self.len())
    }

    /// Mutable iterator over `range`, which must already be validated.
    pub(crate) fn range_iter_mut(&mut self, range: Range<usize>) -> IterMut<'_, T> {
        if self.is_empty() {
            return IterMut { inner: None };
        }
        IterMut {
            inner: Some(self.ensure_unique(0).range_mut(range)),
        }
    }

    // ============ Stack operations ============

    /// Pushes `value` onto the top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.ensure_unique(1).push_front(value);
    }

    /// Pushes every element of `elements` in iteration order, so the last
    /// element yielded ends up on top.
    ///
    /// ```
    /// use cow_stack::Stack;
    ///
    /// let mut stack = Stack::from([9]);
    /// stack.push_all([1, 2, 3]);
    /// assert_eq!(stack, [3, 2, 1, 9]);
    /// ```
    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        // Collected before touching storage so a panicking iterator leaves
        // the stack as it was.
        let elements: Vec<T> = elements.into_iter().collect();
        if elements.is_empty() {
            return;
        }
        let deque = self.ensure_unique(elements.len());
        for element in elements {
            deque.push_front(element);
        }
    }

    /// Removes the top element and returns it, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.ensure_unique(0).pop_front();
        self.collapse_if_empty();
        value
    }

    /// Returns a mutable reference to the top element.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out
    /// of bounds. Takes a private copy of shared storage first.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len() {
            return None;
        }
        self.ensure_unique(0).get_mut(index)
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check_index(a);
        self.check_index(b);
        self.ensure_unique(0).swap(a, b);
    }

    // ============ Insertion ============

    /// Inserts `value` at `index`, shifting later elements toward the bottom.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.check_insertion_index(index);
        self.ensure_unique(1).insert(index, value);
    }

    /// Checked form of [`insert`](Self::insert).
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.try_ensure_unique(1)?.insert(index, value);
        Ok(())
    }

    /// Inserts all of `elements` at `index`, keeping their order: the first
    /// element yielded ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[track_caller]
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        self.check_insertion_index(index);
        let elements: Vec<T> = elements.into_iter().collect();
        if elements.is_empty() {
            return;
        }
        self.ensure_unique(elements.len())
            .insert_contents(index, elements);
    }

    // ============ Removal ============

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).unwrap_or_else(|error| fail(error))
    }

    /// Checked form of [`remove`](Self::remove).
    pub fn try_remove(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        let value = if index < len {
            self.ensure_unique(0).remove(index)
        } else {
            None
        };
        self.collapse_if_empty();
        value.ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Removes the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is inverted or reaches past `len()`.
    #[track_caller]
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) {
        let range = resolve_range(range, self.len()).unwrap_or_else(|error| fail(error));
        if range.is_empty() {
            return;
        }
        self.ensure_unique(0).drain(range);
        self.collapse_if_empty();
    }

    /// Removes and returns the top element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty; use [`pop_first`](Self::pop_first) to get
    /// an `Option` instead.
    #[track_caller]
    pub fn remove_first(&mut self) -> T {
        self.try_remove_first().unwrap_or_else(|error| fail(error))
    }

    /// Checked form of [`remove_first`](Self::remove_first).
    pub fn try_remove_first(&mut self) -> Result<T> {
        self.pop_first()
            .ok_or(Error::NotEnoughElements { requested: 1, len: 0 })
    }

    /// Removes the top `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > len()`.
    #[track_caller]
    pub fn remove_first_n(&mut self, count: usize) {
        let len = self.len();
        if count > len {
            cold_path();
            fail(Error::NotEnoughElements { requested: count, len });
        }
        if count == 0 {
            return;
        }
        self.ensure_unique(0).drain(..count);
        self.collapse_if_empty();
    }

    /// Removes and returns the bottom element.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty; use [`pop_last`](Self::pop_last) to get
    /// an `Option` instead.
    #[track_caller]
    pub fn remove_last(&mut self) -> T {
        self.try_remove_last().unwrap_or_else(|error| fail(error))
    }

    /// Checked form of [`remove_last`](Self::remove_last).
    pub fn try_remove_last(&mut self) -> Result<T> {
        self.pop_last()
            .ok_or(Error::NotEnoughElements { requested: 1, len: 0 })
    }

    /// Removes the bottom `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count > len()`.
    #[track_caller]
    pub fn remove_last_n(&mut self, count: usize) {
        let len = self.len();
        if count > len {
            cold_path();
            fail(Error::NotEnoughElements { requested: count, len });
        }
        if count == 0 {
            return;
        }
        self.ensure_unique(0).truncate(len - count);
        self.collapse_if_empty();
    }

    /// Removes and returns the top element, or `None` if empty.
    #[inline]
    pub fn pop_first(&mut self) -> Option<T> {
        self.pop()
    }

    /// Removes and returns the bottom element, or `None` if empty.
    pub fn pop_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.ensure_unique(0).pop_back();
        self.collapse_if_empty();
        value
    }

    /// Keeps only the elements for which `keep` returns `true`.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        if self.is_empty() {
            return;
        }
        self.ensure_unique(0).retain(keep);
        self.collapse_if_empty();
    }

    // ============ Range replacement ============

    /// Replaces the elements in `range` with `elements`.
    ///
    /// Storage grows by exactly the net number of added elements, if any.
    ///
    /// ```
    /// use cow_stack::Stack;
    ///
    /// let mut stack = Stack::from([1, 2, 3, 4, 5]);
    /// stack.replace_range(1..4, [20, 30]);
    /// assert_eq!(stack, [1, 20, 30, 5]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `range` is inverted or reaches past `len()`.
    #[track_caller]
    pub fn replace_range<R, I>(&mut self, range: R, elements: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let range = resolve_range(range, self.len()).unwrap_or_else(|error| fail(error));
        let elements: Vec<T> = elements.into_iter().collect();
        if range.is_empty() && elements.is_empty() {
            return;
        }
        let growth = elements.len().saturating_sub(range.len());
        self.ensure_unique(growth).replace_contents(range, elements);
        self.collapse_if_empty();
    }

    // ============ Capacity ============

    /// Makes room for at least `additional` more elements without changing
    /// the contents.
    ///
    /// Unique storage with enough spare room is left untouched; unique storage
    /// without it grows in place; shared storage is copied. The stack may stay
    /// allocated while empty afterwards.
    pub fn reserve(&mut self, additional: usize) {
        if additional == 0 && self.storage.is_none() {
            return;
        }
        self.ensure_unique(additional);
    }

    /// Checked form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        if additional == 0 && self.storage.is_none() {
            return Ok(());
        }
        self.try_ensure_unique(additional)?;
        Ok(())
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Stack<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}
