//! Reference-counted backing storage shared by stack values.
//!
//! The storage engine is a [`VecDeque`]: a growable ring buffer that provides
//! capacity growth, front insertion and contiguous access. [`SharedStorage`]
//! puts it behind an [`Arc`] and knows how to hand out exclusive access,
//! copying the buffer first when another value still refers to it.

use std::{
    collections::{TryReserveError, VecDeque},
    ops::Range,
    sync::Arc,
};

use crate::util::{cold_path, trace_storage};

/// Shared handle to a ring buffer.
pub(crate) struct SharedStorage<T> {
    buffer: Arc<VecDeque<T>>,
}

impl<T> Clone for SharedStorage<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl<T> SharedStorage<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        trace_storage!(capacity, "allocating storage");
        Self::from_deque(VecDeque::with_capacity(capacity))
    }

    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut deque = VecDeque::new();
        deque.try_reserve(capacity)?;
        trace_storage!(capacity, "allocating storage");
        Ok(Self::from_deque(deque))
    }

    #[inline]
    pub(crate) fn from_deque(deque: VecDeque<T>) -> Self {
        Self {
            buffer: Arc::new(deque),
        }
    }

    #[inline]
    pub(crate) fn deque(&self) -> &VecDeque<T> {
        &self.buffer
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Room left before the engine has to grow.
    #[inline]
    pub(crate) fn residual_capacity(&self) -> usize {
        self.buffer.capacity() - self.buffer.len()
    }

    /// Returns `true` if no other handle refers to this buffer.
    #[inline]
    pub(crate) fn is_unique(&mut self) -> bool {
        Arc::get_mut(&mut self.buffer).is_some()
    }

    /// Like [`is_unique`](Self::is_unique), for callers holding a shared reference.
    #[inline]
    pub(crate) fn is_shared(&self) -> bool {
        Arc::strong_count(&self.buffer) > 1
    }

    #[inline]
    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }
}

impl<T: Clone> SharedStorage<T> {
    /// Returns a new unique buffer holding clones of every element, with room
    /// for at least `additional` more.
    pub(crate) fn copy_with_headroom(&self, additional: usize) -> Self {
        trace_storage!(
            len = self.buffer.len(),
            additional,
            "copying shared storage"
        );
        let mut deque = VecDeque::with_capacity(self.buffer.len().saturating_add(additional));
        deque.extend(self.buffer.iter().cloned());
        Self::from_deque(deque)
    }

    /// Returns exclusive access to the engine with at least `additional`
    /// elements of spare room, copying the buffer first if it is shared.
    pub(crate) fn make_unique(&mut self, additional: usize) -> &mut VecDeque<T> {
        if !self.is_unique() {
            cold_path();
            *self = self.copy_with_headroom(additional);
        }
        // Unique at this point, so `make_mut` never clones.
        let deque = Arc::make_mut(&mut self.buffer);
        if additional > deque.capacity() - deque.len() {
            deque.reserve(additional);
        }
        deque
    }

    /// Fallible form of [`make_unique`](Self::make_unique).
    pub(crate) fn try_make_unique(
        &mut self,
        additional: usize,
    ) -> Result<&mut VecDeque<T>, TryReserveError> {
        if !self.is_unique() {
            cold_path();
            let mut deque = VecDeque::new();
            deque.try_reserve(self.buffer.len().saturating_add(additional))?;
            trace_storage!(
                len = self.buffer.len(),
                additional,
                "copying shared storage"
            );
            deque.extend(self.buffer.iter().cloned());
            *self = Self::from_deque(deque);
        }
        let deque = Arc::make_mut(&mut self.buffer);
        if additional > deque.capacity() - deque.len() {
            deque.try_reserve(additional)?;
        }
        Ok(deque)
    }

    /// Takes the engine out of the handle, cloning it if it is shared.
    pub(crate) fn into_deque(self) -> VecDeque<T> {
        Arc::try_unwrap(self.buffer).unwrap_or_else(|shared| (*shared).clone())
    }
}

/// Ranged editing on top of the engine's primitive operations.
pub(crate) trait StorageExt<T> {
    /// Inserts every element of `elements` starting at `index`, keeping their order.
    ///
    /// `elements` must not panic: the elements after `index` are detached
    /// while it runs.
    fn insert_contents<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I);

    /// Replaces the elements in `range` with `elements`.
    fn replace_contents(&mut self, range: Range<usize>, elements: Vec<T>);
}

impl<T> StorageExt<T> for VecDeque<T> {
    fn insert_contents<I: IntoIterator<Item = T>>(&mut self, index: usize, elements: I) {
        if index == self.len() {
            self.extend(elements);
            return;
        }
        let mut tail = self.split_off(index);
        self.extend(elements);
        self.append(&mut tail);
    }

    fn replace_contents(&mut self, range: Range<usize>, elements: Vec<T>) {
        let overlap = range.len().min(elements.len());
        let mut elements = elements.into_iter();
        for (slot, element) in self.range_mut(range.start..range.start + overlap).zip(&mut elements) {
            *slot = element;
        }
        if range.len() > overlap {
            self.drain(range.start + overlap..range.end);
        } else {
            self.insert_contents(range.start + overlap, elements);
        }
    }
}
