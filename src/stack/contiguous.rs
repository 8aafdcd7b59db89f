use std::{mem, ops::Range, ptr};

use crate::Stack;

/// Holds a stack's contents outside of the stack for the duration of a
/// callback and puts them back on every exit path, unwinding included.
struct Reattach<'a, T> {
    home: &'a mut Stack<T>,
    detached: Stack<T>,
}

impl<'a, T> Reattach<'a, T> {
    #[inline]
    fn detach(home: &'a mut Stack<T>) -> Self {
        let detached = mem::take(home);
        Self { home, detached }
    }
}

impl<T> Drop for Reattach<'_, T> {
    #[inline]
    fn drop(&mut self) {
        mem::swap(self.home, &mut self.detached);
    }
}

impl<T> Stack<T> {
    /// Calls `f` with the whole contents as one slice, if the ring buffer
    /// currently stores them contiguously. Returns `None` without calling `f`
    /// otherwise.
    ///
    /// An empty stack is always contiguous.
    pub fn with_contiguous_storage_if_available<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&[T]) -> R,
    {
        self.contiguous_range(0..self.len()).map(f)
    }

    /// Returns the elements in `range` as one slice if they are stored
    /// contiguously. `range` must already be validated.
    pub(crate) fn contiguous_range(&self, range: Range<usize>) -> Option<&[T]> {
        let (front, back) = self.as_slices();
        if range.end <= front.len() {
            Some(&front[range])
        } else if range.start >= front.len() {
            Some(&back[range.start - front.len()..range.end - front.len()])
        } else {
            None
        }
    }
}

impl<T: Clone> Stack<T> {
    /// Rearranges the storage so the contents are contiguous and returns them
    /// as one mutable slice. Takes a private copy of shared storage first.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        if self.is_empty() {
            return &mut [];
        }
        self.ensure_unique(0).make_contiguous()
    }

    /// Calls `f` with the whole contents as one mutable slice.
    ///
    /// The storage is made unique and contiguous first. While `f` runs the
    /// storage is detached from `self`; it is restored afterwards even if `f`
    /// panics.
    ///
    /// ```
    /// use cow_stack::Stack;
    ///
    /// let mut stack = Stack::from([3, 1, 2]);
    /// let snapshot = stack.clone();
    /// stack.with_contiguous_mut(|slice| slice.sort());
    /// assert_eq!(stack, [1, 2, 3]);
    /// assert_eq!(snapshot, [3, 1, 2]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the buffer's address or length changed while `f` ran.
    pub fn with_contiguous_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut [T]) -> R,
    {
        let len = self.len();
        self.with_contiguous_range_mut(0..len, f)
    }

    /// Shared implementation of the mutable bulk access for stacks and slices.
    /// `range` must already be validated against `self.len()`.
    pub(crate) fn with_contiguous_range_mut<R, F>(&mut self, range: Range<usize>, f: F) -> R
    where
        F: FnOnce(&mut [T]) -> R,
    {
        if self.is_empty() {
            return f(&mut []);
        }
        let mut reattach = Reattach::detach(self);

        let buffer = reattach.detached.ensure_unique(0).make_contiguous();
        let (address, len) = (buffer.as_ptr(), buffer.len());
        let window = &mut buffer[range.clone()];
        let (window_address, window_len) = (window.as_ptr(), window.len());

        let result = f(window);

        let (front, back) = reattach.detached.as_slices();
        assert!(
            ptr::eq(front.as_ptr(), address) && front.len() == len && back.is_empty(),
            "contiguous storage was relocated during mutable access"
        );
        let window = &front[range];
        assert!(
            ptr::eq(window.as_ptr(), window_address) && window.len() == window_len,
            "contiguous slice was relocated during mutable access"
        );
        result
    }
}
